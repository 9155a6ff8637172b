//! The `gradebook rank` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::input::{parse_format, Format};
use crate::render::{ranking_rows, ranking_table};

use super::Workspace;

pub fn execute(config_path: Option<&Path>, data_file: Option<PathBuf>, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let ws = Workspace::open(config_path, data_file)?;

    let ranked = ws.book.rank_by_gpa();
    let rows = ranking_rows(&ranked);

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        Format::Text if rows.is_empty() => println!("No students yet."),
        Format::Text => println!("{}", ranking_table(&rows, ws.gpa_precision())),
    }
    Ok(())
}
