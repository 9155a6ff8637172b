//! The `gradebook search` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::Workspace;

pub fn execute(
    config_path: Option<&Path>,
    data_file: Option<PathBuf>,
    course: &str,
    grade: f64,
) -> Result<()> {
    let ws = Workspace::open(config_path, data_file)?;

    let found = ws.book.search_by_grade(course, grade);
    if found.is_empty() {
        println!("No students found.");
    }
    for s in found {
        println!("{} - {}", s.full_name(), s.email);
    }
    Ok(())
}
