//! Table CLI commands
//!
//! Shows or exports the yearly rate table with year-over-year changes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::Settings;
use crate::display::{format_rate_grid, format_year_list};
use crate::error::{InflationError, InflationResult};
use crate::export::{export_deltas, ExportFormat};
use crate::models::RateTable;
use crate::reports::{RateGrid, YearlyDeltaReport};

/// Arguments for `inflation table`
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Number of grid columns (defaults to the configured value)
    #[arg(short, long)]
    pub columns: Option<usize>,

    /// Export format instead of the terminal grid
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the table command
pub fn handle_table_command(
    table: &RateTable,
    settings: &Settings,
    args: TableArgs,
) -> InflationResult<()> {
    let report = YearlyDeltaReport::generate(table);

    let mut buffer = Vec::new();
    match args.format {
        Some(format) => export_deltas(&report, format, &mut buffer)?,
        None => {
            let columns = args.columns.unwrap_or(settings.table_columns);
            if columns == 0 {
                return Err(InflationError::Config("--columns must be at least 1".into()));
            }
            let grid = RateGrid::layout(&report, columns);
            buffer.extend_from_slice(format_rate_grid(&grid, settings.decimal_places).as_bytes());
        }
    }

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                InflationError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(&buffer)
                .and_then(|_| writer.flush())
                .map_err(|e| InflationError::Export(e.to_string()))?;
            info!(path = %path.display(), "wrote rate table");
            println!("Rate table written to {}", path.display());
        }
        None => {
            std::io::stdout().write_all(&buffer)?;
        }
    }

    Ok(())
}

/// Handle the years command
pub fn handle_years_command(table: &RateTable) -> InflationResult<()> {
    println!("{}", format_year_list(table));
    Ok(())
}
