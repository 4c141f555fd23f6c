//! Path management for peso-inflation
//!
//! ## Path Resolution Order
//!
//! 1. `PESO_INFLATION_DIR` environment variable (if set)
//! 2. The platform configuration directory joined with `peso-inflation`
//!    (`~/.config/peso-inflation` on Linux, `%APPDATA%\peso-inflation` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::InflationError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "PESO_INFLATION_DIR";

const APP_DIR_NAME: &str = "peso-inflation";

/// Manages all paths used by peso-inflation
#[derive(Debug, Clone)]
pub struct InflationPaths {
    base_dir: PathBuf,
}

impl InflationPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or configuration directory can be determined.
    pub fn new() -> Result<Self, InflationError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create InflationPaths with a custom base directory (useful for testing)
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

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), InflationError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            InflationError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, InflationError> {
    let dirs = BaseDirs::new().ok_or_else(|| {
        InflationError::Config("Could not determine the configuration directory".into())
    })?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
