//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::Result;

use gradebook_core::config::{load_config_from, GradebookConfig};
use gradebook_core::{snapshot, GradeBook};

pub mod add;
pub mod courses;
pub mod enroll;
pub mod grade;
pub mod init;
pub mod rank;
pub mod search;
pub mod shell;
pub mod summary;
pub mod transcript;

/// A loaded grade book together with where it came from.
pub struct Workspace {
    pub config: GradebookConfig,
    pub book: GradeBook,
    pub data_file: PathBuf,
    /// Whether the snapshot file existed when the book was loaded.
    pub loaded_from_disk: bool,
}

impl Workspace {
    /// Resolve the config, then load the snapshot it points at.
    /// `data_file` takes precedence over the configured path.
    pub fn open(config_path: Option<&Path>, data_file: Option<PathBuf>) -> Result<Self> {
        let config = load_config_from(config_path)?;
        let data_file = data_file.unwrap_or_else(|| config.data_file.clone());
        let loaded_from_disk = data_file.exists();
        let book = snapshot::load(&data_file, config.grade_scale)?;

        Ok(Self {
            config,
            book,
            data_file,
            loaded_from_disk,
        })
    }

    pub fn save(&self) -> Result<()> {
        snapshot::save(&self.book, &self.data_file)
    }

    pub fn gpa_precision(&self) -> usize {
        self.config.gpa_precision
    }
}
