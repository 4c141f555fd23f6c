//! Grid layout of the yearly delta view
//!
//! The latest year sits alone on top. The remaining years fill the grid
//! column by column, so reading down the first column and then the next
//! keeps years in descending order.

use super::yearly_delta::{YearlyDelta, YearlyDeltaReport};

/// Column-major grid of yearly deltas
#[derive(Debug, Clone, PartialEq)]
pub struct RateGrid {
    pub latest: Option<YearlyDelta>,
    /// `rows[r][c]`, `None` for empty trailing cells
    pub rows: Vec<Vec<Option<YearlyDelta>>>,
    pub columns: usize,
}

impl RateGrid {
    /// Lay out a report in `columns` columns (at least one)
    pub fn layout(report: &YearlyDeltaReport, columns: usize) -> Self {
        let columns = columns.max(1);
        let remaining = report.remaining();
        let row_count = remaining.len().div_ceil(columns);

        let rows = (0..row_count)
            .map(|r| {
                (0..columns)
                    .map(|c| remaining.get(c * row_count + r).copied())
                    .collect()
            })
            .collect();

        Self {
            latest: report.latest().copied(),
            rows,
            columns,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
