//! Custom error types for peso-inflation
//!
//! This module defines the error hierarchy for the calculator using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for peso-inflation operations
#[derive(Error, Debug)]
pub enum InflationError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The amount input could not be read as a non-negative number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A year outside the rate table was requested
    #[error("Year {year} is not in the rate table ({first}-{last})")]
    UnknownYear { year: i32, first: i32, last: i32 },

    /// A spanned year has no known rate and missing rates are rejected
    #[error("No inflation rate recorded for {0}")]
    MissingRate(i32),

    /// The amount is valid but the result does not fit in an `f64`
    #[error("Result cannot be computed: {0}")]
    NotComputable(String),

    /// The rate table source is malformed or empty
    #[error("Rate data error: {0}")]
    RateData(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl InflationError {
    /// Create an "invalid amount" error for the given raw input
    pub fn invalid_amount(input: impl AsRef<str>) -> Self {
        Self::InvalidAmount(format!(
            "'{}' is not a non-negative number",
            input.as_ref().trim()
        ))
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is a result overflow error
    pub fn is_not_computable(&self) -> bool {
        matches!(self, Self::NotComputable(_))
    }

    /// Check if this is an unknown year error
    pub fn is_unknown_year(&self) -> bool {
        matches!(self, Self::UnknownYear { .. })
    }
}

impl From<std::io::Error> for InflationError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InflationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for InflationError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for InflationError {
    fn from(err: csv::Error) -> Self {
        Self::RateData(err.to_string())
    }
}

/// Result type alias for peso-inflation operations
pub type InflationResult<T> = Result<T, InflationError>;
