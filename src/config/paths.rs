//! Path management for Outlay
//!
//! ## Path Resolution Order
//!
//! 1. `OUTLAY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/outlay` on Linux, `%APPDATA%\outlay\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::OutlayError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "OUTLAY_DATA_DIR";

/// Manages all paths used by Outlay
#[derive(Debug, Clone)]
pub struct OutlayPaths {
    base_dir: PathBuf,
}

impl OutlayPaths {
    /// Create a new OutlayPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, OutlayError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create OutlayPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), OutlayError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OutlayError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if Outlay has been configured (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, OutlayError> {
    ProjectDirs::from("", "", "outlay")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| OutlayError::Config("Could not determine a home directory".into()))
}
