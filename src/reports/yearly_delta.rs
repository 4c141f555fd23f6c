//! Year-over-year rate changes
//!
//! For each year in the rate table, the change in rate from the closest
//! earlier year that is present in the table. Gaps are skipped, never
//! treated as zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::RateTable;

/// One year's rate and its change from the previous present year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyDelta {
    pub year: i32,
    /// Annual rate in percent, `None` when unknown
    pub rate: Option<f64>,
    /// `rate - previous rate`, `None` when either is unknown or there is no
    /// earlier year
    pub delta: Option<f64>,
}

impl YearlyDelta {
    /// Whether the rate went up from the previous year
    pub fn is_increase(&self) -> Option<bool> {
        self.delta.map(|d| d > 0.0)
    }
}

/// Deltas for every year in the table, most recent first
pub fn yearly_deltas(table: &RateTable) -> Vec<YearlyDelta> {
    let items: Vec<(i32, Option<f64>)> = table.entries().rev().collect();

    items
        .iter()
        .enumerate()
        .map(|(i, &(year, rate))| {
            let delta = match (rate, items.get(i + 1).and_then(|&(_, prev)| prev)) {
                (Some(current), Some(previous)) => Some(current - previous),
                _ => None,
            };
            YearlyDelta { year, rate, delta }
        })
        .collect()
}

/// Deltas keyed by year
pub fn delta_map(table: &RateTable) -> BTreeMap<i32, Option<f64>> {
    yearly_deltas(table)
        .into_iter()
        .map(|entry| (entry.year, entry.delta))
        .collect()
}

/// The yearly delta view: the latest year plus everything before it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyDeltaReport {
    /// Every year, most recent first
    pub entries: Vec<YearlyDelta>,
}

impl YearlyDeltaReport {
    /// Build the report for a rate table
    pub fn generate(table: &RateTable) -> Self {
        Self {
            entries: yearly_deltas(table),
        }
    }

    /// The most recent year
    pub fn latest(&self) -> Option<&YearlyDelta> {
        self.entries.first()
    }

    /// Every year except the most recent, most recent first
    pub fn remaining(&self) -> &[YearlyDelta] {
        self.entries.get(1..).unwrap_or_default()
    }
}
