//! Rate table display formatting
//!
//! Renders the yearly delta grid and the plain year list as terminal tables.

use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::RateTable;
use crate::reports::{RateGrid, YearlyDelta};

use super::format::{format_delta, format_rate};

/// Format the header block for the most recent year
pub fn format_latest(entry: &YearlyDelta, decimals: usize) -> String {
    let mut output = format!("{}  {}", entry.year, format_rate(entry.rate));
    if let Some(delta) = entry.delta {
        output.push_str(&format!(
            "  ({} compared to last year)",
            format_delta(delta, decimals)
        ));
    }
    output
}

fn format_cell(entry: &YearlyDelta, decimals: usize) -> String {
    let mut cell = format!("{}  {:>6}", entry.year, format_rate(entry.rate));
    if let Some(delta) = entry.delta {
        cell.push_str(&format!("  {:>7}", format_delta(delta, decimals)));
    }
    cell
}

/// Format the delta grid: latest year on top, the rest column-major below
pub fn format_rate_grid(grid: &RateGrid, decimals: usize) -> String {
    let Some(latest) = &grid.latest else {
        return "No inflation data available.".to_string();
    };

    let mut output = String::new();
    output.push_str("Average inflation by year\n");
    output.push_str(&format_latest(latest, decimals));
    output.push('\n');

    if grid.rows.is_empty() {
        return output;
    }

    let mut builder = Builder::default();
    for row in &grid.rows {
        builder.push_record(row.iter().map(|cell| match cell {
            Some(entry) => format_cell(entry, decimals),
            None => String::new(),
        }));
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

#[derive(Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Rate")]
    rate: String,
}

/// Format every year with its rate, oldest first
pub fn format_year_list(table: &RateTable) -> String {
    let rows: Vec<YearRow> = table
        .entries()
        .map(|(year, rate)| YearRow {
            year,
            rate: format_rate(rate),
        })
        .collect();

    let mut output = Table::new(rows);
    output.with(Style::psql());
    output.to_string()
}
