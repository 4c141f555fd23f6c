//! Core data models for peso-inflation
//!
//! This module contains the data structures of the calculator domain: the
//! yearly rate table, year selections, and amount parsing.

pub mod amount;
pub mod rate_table;
pub mod year_pair;

pub use amount::parse_amount;
pub use rate_table::RateTable;
pub use year_pair::{Direction, YearPair};
