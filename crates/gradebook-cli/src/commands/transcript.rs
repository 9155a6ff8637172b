//! The `gradebook transcript` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::Workspace;

pub fn execute(
    config_path: Option<&Path>,
    data_file: Option<PathBuf>,
    emails: &[String],
) -> Result<()> {
    let ws = Workspace::open(config_path, data_file)?;

    let mut missing = Vec::new();
    for (email, transcript) in emails
        .iter()
        .zip(ws.book.transcripts(emails.iter().map(String::as_str)))
    {
        match transcript {
            Ok(text) => println!("{text}"),
            Err(e) => {
                tracing::debug!("{e}");
                missing.push(email.trim());
            }
        }
    }

    anyhow::ensure!(
        missing.is_empty(),
        "student not found: {}",
        missing.join(", ")
    );
    Ok(())
}
