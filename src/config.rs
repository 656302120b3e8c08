//! Path management for hearthbook
//!
//! Resolves where the JSON file store keeps its data.
//!
//! ## Path Resolution Order
//!
//! 1. `HEARTHBOOK_DATA_DIR` environment variable (if set)
//! 2. Platform data directory via `directories` (e.g.
//!    `~/.local/share/hearthbook` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{HearthError, HearthResult};

/// Manages the paths used by the file store
#[derive(Debug, Clone)]
pub struct HearthPaths {
    base_dir: PathBuf,
}

impl HearthPaths {
    /// Create a new HearthPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// environment override is unset.
    pub fn new() -> HearthResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("HEARTHBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "hearthbook")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    HearthError::Config("Could not determine a data directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create HearthPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory holding per-user budget documents
    pub fn budgets_dir(&self) -> PathBuf {
        self.base_dir.join("budgets")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> HearthResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HearthError::Io(format!("Failed to create base directory: {}", e)))?;
        std::fs::create_dir_all(self.budgets_dir())
            .map_err(|e| HearthError::Io(format!("Failed to create budgets directory: {}", e)))?;
        Ok(())
    }
}
