//! The `gradebook grade` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::Workspace;

pub fn execute(
    config_path: Option<&Path>,
    data_file: Option<PathBuf>,
    email: &str,
    course: &str,
    grade: f64,
) -> Result<()> {
    let mut ws = Workspace::open(config_path, data_file)?;

    ws.book.grade(email, course, grade)?;
    ws.save()?;

    if let Some(student) = ws.book.find_student(email) {
        println!(
            "Grade added successfully. GPA for {} is now {:.*}",
            student.full_name(),
            ws.gpa_precision(),
            student.gpa
        );
    }
    Ok(())
}
