//! The `gradebook summary` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::render::summary_table;

use super::Workspace;

pub fn execute(config_path: Option<&Path>, data_file: Option<PathBuf>) -> Result<()> {
    let ws = Workspace::open(config_path, data_file)?;

    let summaries = ws.book.course_summaries();
    if summaries.is_empty() {
        println!("No courses yet.");
    } else {
        println!("{}", summary_table(&summaries, ws.gpa_precision()));
    }
    Ok(())
}
