//! The `gradebook enroll` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::Workspace;

pub fn execute(
    config_path: Option<&Path>,
    data_file: Option<PathBuf>,
    email: &str,
    course: &str,
) -> Result<()> {
    let mut ws = Workspace::open(config_path, data_file)?;

    ws.book.enroll(email, course)?;
    ws.save()?;

    println!("Student registered for course successfully.");
    Ok(())
}
