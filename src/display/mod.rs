//! Display formatting for terminal output
//!
//! Provides utilities for formatting conversions and rate tables for
//! terminal display.

pub mod conversion;
pub mod format;
pub mod rate_table;

pub use conversion::{
    format_conversion, format_conversion_details, format_result_line, note_is_warning,
    status_note,
};
pub use format::{format_currency, format_delta, format_percent_change, format_rate};
pub use rate_table::{format_rate_grid, format_year_list};
