//! The `gradebook add-student` and `gradebook add-course` commands.

use std::path::{Path, PathBuf};

use anyhow::Result;

use gradebook_core::{Course, Student};

use super::Workspace;

pub fn student(
    config_path: Option<&Path>,
    data_file: Option<PathBuf>,
    email: String,
    first_name: String,
    last_name: String,
) -> Result<()> {
    let mut ws = Workspace::open(config_path, data_file)?;

    let student = Student::new(email, first_name, last_name);
    let name = student.full_name();
    ws.book.add_student(student)?;
    ws.save()?;

    println!("Student {name} added successfully.");
    Ok(())
}

pub fn course(
    config_path: Option<&Path>,
    data_file: Option<PathBuf>,
    name: String,
    term: String,
    credits: u32,
) -> Result<()> {
    let mut ws = Workspace::open(config_path, data_file)?;

    ws.book.add_course(Course::new(name, term, credits))?;
    ws.save()?;

    println!("Course added successfully.");
    Ok(())
}
