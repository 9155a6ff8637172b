//! The `gradebook courses` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::input::{parse_format, Format};
use crate::render::courses_table;

use super::Workspace;

pub fn execute(config_path: Option<&Path>, data_file: Option<PathBuf>, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let ws = Workspace::open(config_path, data_file)?;
    let courses = ws.book.list_courses();

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(courses)?),
        Format::Text if courses.is_empty() => println!("No courses yet."),
        Format::Text => println!("{}", courses_table(courses)),
    }
    Ok(())
}
