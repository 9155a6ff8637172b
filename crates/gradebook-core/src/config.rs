//! Configuration loading.
//!
//! Search order:
//! 1. an explicit path (must exist)
//! 2. `gradebook.toml` in the current directory
//! 3. `~/.config/gradebook/config.toml`
//!
//! `GRADEBOOK_DATA_FILE` overrides the snapshot path from any of these.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::GradeScale;

/// Environment variable that overrides [`GradebookConfig::data_file`].
pub const DATA_FILE_ENV: &str = "GRADEBOOK_DATA_FILE";

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Where the snapshot is read from and saved to.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Accepted grade range.
    #[serde(default)]
    pub grade_scale: GradeScale,
    /// Decimal places for GPAs in rankings and summaries.
    #[serde(default = "default_gpa_precision")]
    pub gpa_precision: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("gradebook_data.json")
}

fn default_gpa_precision() -> usize {
    2
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            grade_scale: GradeScale::default(),
            gpa_precision: default_gpa_precision(),
        }
    }
}

impl GradebookConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: GradebookConfig =
            toml::from_str(content).context("failed to parse config TOML")?;
        config.data_file = PathBuf::from(resolve_env_vars(&config.data_file.to_string_lossy()));
        Ok(config)
    }

    /// Reject settings the record model cannot work with.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.data_file.as_os_str().is_empty(),
            "data_file cannot be empty"
        );
        let GradeScale { min, max } = self.grade_scale;
        anyhow::ensure!(
            min.is_finite() && max.is_finite(),
            "grade_scale bounds must be finite numbers"
        );
        anyhow::ensure!(
            min < max,
            "grade_scale.min ({min}) must be less than grade_scale.max ({max})"
        );
        anyhow::ensure!(self.gpa_precision <= 6, "gpa_precision must be at most 6");
        Ok(())
    }
}

/// Expand `${VAR_NAME}` references in a single left-to-right pass.
///
/// Unset variables expand to an empty string. Substituted values are copied
/// verbatim and never re-scanned; an unterminated `${` is kept as written.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + 2 + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
pub fn load_config() -> Result<GradebookConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            GradebookConfig::from_toml_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradebookConfig::default(),
    };

    if let Ok(data_file) = std::env::var(DATA_FILE_ENV) {
        if !data_file.is_empty() {
            config.data_file = PathBuf::from(data_file);
        }
    }

    config.validate()?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
