//! Path management for money-manager
//!
//! ## Path Resolution Order
//!
//! 1. `MONEY_MANAGER_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory joined with `money-manager`
//!    (`$XDG_CONFIG_HOME` or `~/.config` on Linux, `%APPDATA%` on Windows,
//!    `~/Library/Application Support` on macOS)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::MoneyManagerError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "MONEY_MANAGER_DATA_DIR";

const APP_DIR_NAME: &str = "money-manager";

/// Manages all paths used by money-manager
#[derive(Debug, Clone)]
pub struct ManagerPaths {
    /// Base directory for all money-manager data
    base_dir: PathBuf,
}

impl ManagerPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, MoneyManagerError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ManagerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the expense stores
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path of the named store file
    pub fn store_file(&self, store_name: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", store_name))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), MoneyManagerError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            MoneyManagerError::Io(format!("Failed to create base directory: {}", e))
        })?;

        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            MoneyManagerError::Io(format!("Failed to create data directory: {}", e))
        })?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, MoneyManagerError> {
    let dirs = BaseDirs::new().ok_or_else(|| {
        MoneyManagerError::Config(format!(
            "Could not determine a home directory; set {} instead",
            DATA_DIR_ENV
        ))
    })?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
