//! YAML Export functionality
//!
//! Exports the yearly delta view to YAML format for human-readable output.

use crate::error::{InflationError, InflationResult};
use crate::export::json::RateExport;
use crate::reports::YearlyDeltaReport;
use std::io::Write;

/// Export the yearly delta view to YAML
pub fn export_deltas_yaml<W: Write>(
    report: &YearlyDeltaReport,
    writer: &mut W,
) -> InflationResult<()> {
    let export = RateExport::from_report(report);

    writeln!(writer, "# Philippine average inflation by year")
        .map_err(|e| InflationError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| InflationError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}
