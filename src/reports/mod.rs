//! Reports module for peso-inflation
//!
//! Provides the yearly delta view of the rate table and its grid layout.

pub mod rate_grid;
pub mod yearly_delta;

pub use rate_grid::RateGrid;
pub use yearly_delta::{delta_map, yearly_deltas, YearlyDelta, YearlyDeltaReport};
