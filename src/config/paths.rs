//! Path management for Allotment
//!
//! ## Path Resolution Order
//!
//! 1. `ALLOTMENT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/allotment` on Linux, `~/Library/Application Support/allotment`
//!    on macOS, `%APPDATA%\allotment\config` on Windows)

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::AllotError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ALLOTMENT_DATA_DIR";

/// Manages all paths used by Allotment
#[derive(Debug, Clone)]
pub struct AllotPaths {
    /// Base directory for all Allotment data
    base_dir: PathBuf,
}

impl AllotPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, AllotError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "allotment")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    AllotError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create AllotPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory searched for snapshots given by bare name
    pub fn snapshots_dir(&self) -> PathBuf {
        self.base_dir.join("snapshots")
    }

    /// Default directory for exported analyses
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), AllotError> {
        for dir in [self.base_dir.clone(), self.snapshots_dir(), self.exports_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                AllotError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
