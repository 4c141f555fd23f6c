//! JSON Export functionality
//!
//! Exports the yearly delta view to JSON format with schema versioning.

use crate::error::{InflationError, InflationResult};
use crate::reports::{YearlyDelta, YearlyDeltaReport};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported rate table with year-over-year deltas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    /// Oldest year in the export
    pub first_year: Option<i32>,

    /// Most recent year in the export
    pub last_year: Option<i32>,

    /// Every year, most recent first
    pub entries: Vec<YearlyDelta>,
}

impl RateExport {
    /// Create an export from a generated report
    pub fn from_report(report: &YearlyDeltaReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            first_year: report.entries.last().map(|e| e.year),
            last_year: report.latest().map(|e| e.year),
            entries: report.entries.clone(),
        }
    }
}

/// Export the yearly delta view to JSON
pub fn export_deltas_json<W: Write>(
    report: &YearlyDeltaReport,
    writer: &mut W,
) -> InflationResult<()> {
    let export = RateExport::from_report(report);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| InflationError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| InflationError::Export(e.to_string()))?;
    Ok(())
}
