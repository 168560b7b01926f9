//! User settings for fintrack
//!
//! Display preferences only. The active currency is ledger state and lives in
//! the blob store next to the transactions.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format used by the history view (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether category icons are shown in the history and dashboard
    #[serde(default = "default_show_icons")]
    pub show_icons: bool,

    /// Default number of rows shown by `list`
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

fn default_show_icons() -> bool {
    true
}

fn default_history_limit() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            show_icons: default_show_icons(),
            history_limit: default_history_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            TrackerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
