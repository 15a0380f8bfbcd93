//! Path management for the budget advisor
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_ADVISOR_DIR` environment variable (if set)
//! 2. The platform config directory, e.g. `~/.config/budget-advisor` on Linux
//!    or `%APPDATA%\budget-advisor\config` on Windows

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AdvisorError;

/// Environment variable that overrides the config directory
pub const DIR_ENV_VAR: &str = "BUDGET_ADVISOR_DIR";

/// Manages all paths used by the budget advisor
#[derive(Debug, Clone)]
pub struct AdvisorPaths {
    base_dir: PathBuf,
}

impl AdvisorPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, AdvisorError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the base directory if needed
    pub fn ensure_directories(&self) -> Result<(), AdvisorError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AdvisorError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Whether a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, AdvisorError> {
    ProjectDirs::from("", "", "budget-advisor")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| AdvisorError::Config("Could not determine home directory".into()))
}
