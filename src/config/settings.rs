//! User settings for money-manager
//!
//! Settings live in `config.json` under the base directory. Every field has a
//! serde default, so older or partial files keep loading.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ManagerPaths;
use crate::error::MoneyManagerError;
use crate::models::StatsPeriod;

/// Name of the store holding the expense list unless configured otherwise
pub const DEFAULT_STORE_NAME: &str = "expenses_prefs";

/// User settings for money-manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Period selected when the expense view opens
    #[serde(default)]
    pub default_period: StatsPeriod,

    /// Name of the store file holding the expense list
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format (strftime)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_store_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %d, %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_period: StatsPeriod::default(),
            store_name: default_store_name(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

/// Whether `format` is a strftime pattern chrono can render
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ManagerPaths) -> Result<Self, MoneyManagerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Defaults are not written until the caller saves them
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| MoneyManagerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            MoneyManagerError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        if settings.store_name.trim().is_empty() {
            return Err(MoneyManagerError::Config(
                "store_name must not be empty".into(),
            ));
        }

        if !is_valid_date_format(&settings.date_format) {
            return Err(MoneyManagerError::Config(format!(
                "Invalid date_format: {}",
                settings.date_format
            )));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ManagerPaths) -> Result<(), MoneyManagerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MoneyManagerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| MoneyManagerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}
