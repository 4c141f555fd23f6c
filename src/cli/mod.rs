//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod convert;
pub mod table;

use std::path::Path;

use tracing::debug;

use crate::config::Settings;
use crate::error::InflationResult;
use crate::models::RateTable;

pub use convert::{handle_convert_command, ConvertArgs};
pub use table::{handle_table_command, handle_years_command, TableArgs};

/// Load the rate table from `--rates`, the settings, or the built-in data
pub fn load_rate_table(rates: Option<&Path>, settings: &Settings) -> InflationResult<RateTable> {
    match rates.or(settings.rates_file.as_deref()) {
        Some(path) => RateTable::load(path),
        None => {
            debug!("using built-in rate table");
            RateTable::builtin()
        }
    }
}
