//! Export module for peso-inflation
//!
//! Exports the yearly delta view in multiple formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable with schema versioning
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;

use crate::error::InflationResult;
use crate::reports::YearlyDeltaReport;

pub use self::csv::export_deltas_csv;
pub use json::{export_deltas_json, RateExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_deltas_yaml;

/// Machine-readable export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

/// Export the report in the given format
pub fn export_deltas<W: Write>(
    report: &YearlyDeltaReport,
    format: ExportFormat,
    writer: &mut W,
) -> InflationResult<()> {
    match format {
        ExportFormat::Json => export_deltas_json(report, writer),
        ExportFormat::Yaml => export_deltas_yaml(report, writer),
        ExportFormat::Csv => export_deltas_csv(report, writer),
    }
}
