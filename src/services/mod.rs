//! Service layer for peso-inflation
//!
//! The service layer provides the calculations on top of the rate table.

pub mod multiplier;

pub use multiplier::{Advisory, Conversion, MissingRatePolicy, MultiplierEngine};
