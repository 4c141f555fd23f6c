//! peso-inflation - Philippine peso inflation calculator
//!
//! This library converts a peso amount from one year to another using a
//! table of average annual inflation rates, and derives the year-over-year
//! change of those rates for display.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The rate table, year selections, and amount parsing
//! - `services`: The multiplier engine
//! - `reports`: The yearly delta view and its grid layout
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```
//! use peso_inflation::models::RateTable;
//! use peso_inflation::services::MultiplierEngine;
//!
//! let table = RateTable::builtin().unwrap();
//! let engine = MultiplierEngine::new(&table);
//! let result = engine.compute("100", 2000, 2020).unwrap();
//! assert!(result.final_amount > 100.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{InflationError, InflationResult};
