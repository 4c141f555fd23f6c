//! CSV Export functionality
//!
//! Exports the yearly delta view to CSV (spreadsheet-compatible).

use crate::error::{InflationError, InflationResult};
use crate::reports::YearlyDeltaReport;
use std::io::Write;

/// Export the yearly delta view as `year,rate,delta` rows, most recent first
///
/// Unknown rates and absent deltas are written as empty fields.
pub fn export_deltas_csv<W: Write>(
    report: &YearlyDeltaReport,
    writer: &mut W,
) -> InflationResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["year", "rate", "delta"])
        .map_err(|e| InflationError::Export(e.to_string()))?;

    for entry in &report.entries {
        csv_writer
            .write_record([
                entry.year.to_string(),
                entry.rate.map(|r| r.to_string()).unwrap_or_default(),
                entry.delta.map(|d| format!("{:.2}", d)).unwrap_or_default(),
            ])
            .map_err(|e| InflationError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| InflationError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RateTable;

    #[test]
    fn test_csv_export() {
        let table =
            RateTable::from_entries([(2020, Some(5.0)), (2021, Some(10.0)), (2022, Some(-2.0))])
                .unwrap();
        let report = YearlyDeltaReport::generate(&table);

        let mut output = Vec::new();
        export_deltas_csv(&report, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "year,rate,delta");
        assert_eq!(lines[1], "2022,-2,-12.00");
        assert_eq!(lines[2], "2021,10,5.00");
        assert_eq!(lines[3], "2020,5,");
    }

    #[test]
    fn test_csv_export_reloads_as_rate_table() {
        let table = RateTable::builtin().unwrap();
        let report = YearlyDeltaReport::generate(&table);

        let mut output = Vec::new();
        export_deltas_csv(&report, &mut output).unwrap();

        let reloaded = RateTable::from_csv_reader(output.as_slice()).unwrap();
        assert_eq!(reloaded, table);
    }
}
