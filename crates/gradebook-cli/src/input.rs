//! Validation of typed-in menu values.

use anyhow::{Context, Result};

/// Parse a numeric grade.
pub fn parse_grade(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    let value: f64 = raw
        .parse()
        .with_context(|| format!("invalid grade: '{raw}' is not a number"))?;
    anyhow::ensure!(value.is_finite(), "invalid grade: '{raw}' is not a finite number");
    Ok(value)
}

/// Parse a credit count.
pub fn parse_credits(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    raw.parse()
        .with_context(|| format!("invalid credits: '{raw}' is not a whole number"))
}

/// Largest number of entries accepted in one menu batch.
pub const MAX_BATCH: usize = 1000;

/// Parse how many entries the user wants to enter.
pub fn parse_count(raw: &str) -> Result<usize> {
    let raw = raw.trim();
    let count: usize = raw
        .parse()
        .with_context(|| format!("invalid count: '{raw}' is not a whole number"))?;
    anyhow::ensure!(
        count <= MAX_BATCH,
        "invalid count: {count} is more than {MAX_BATCH} at a time"
    );
    Ok(count)
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

pub fn parse_format(raw: &str) -> Result<Format> {
    match raw.trim().to_lowercase().as_str() {
        "text" => Ok(Format::Text),
        "json" => Ok(Format::Json),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }
}
