//! User settings for peso-inflation
//!
//! Manages display preferences, the optional custom rate table, and how
//! years without a recorded rate are handled.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::InflationPaths;
use crate::error::InflationError;
use crate::services::MissingRatePolicy;

/// User settings for peso-inflation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol placed before formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Decimal places shown for amounts and percentages
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,

    /// Number of columns in the rate grid
    #[serde(default = "default_table_columns")]
    pub table_columns: usize,

    /// Reject conversions spanning a year with no recorded rate
    /// instead of counting that year as 0%
    #[serde(default)]
    pub strict_missing_rates: bool,

    /// Custom rate table (JSON or CSV) used instead of the built-in data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₱".to_string()
}

fn default_decimal_places() -> usize {
    2
}

fn default_table_columns() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            decimal_places: default_decimal_places(),
            table_columns: default_table_columns(),
            strict_missing_rates: false,
            rates_file: None,
        }
    }
}

impl Settings {
    /// Policy applied to spanned years whose rate is unknown
    pub fn missing_rate_policy(&self) -> MissingRatePolicy {
        if self.strict_missing_rates {
            MissingRatePolicy::Reject
        } else {
            MissingRatePolicy::TreatAsZero
        }
    }

    /// Check that the settings describe something we can render
    pub fn validate(&self) -> Result<(), InflationError> {
        if self.table_columns == 0 {
            return Err(InflationError::Config("table_columns must be at least 1".into()));
        }
        if self.decimal_places > 8 {
            return Err(InflationError::Config("decimal_places must be between 0 and 8".into()));
        }
        Ok(())
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &InflationPaths) -> Result<Self, InflationError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                InflationError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                InflationError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &InflationPaths) -> Result<(), InflationError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            InflationError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| InflationError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
