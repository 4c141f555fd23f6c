//! Convert CLI command
//!
//! Implements the amount conversion between two years.

use clap::Args;

use crate::config::Settings;
use crate::display::conversion::NO_RESULT_MESSAGE;
use crate::display::{format_conversion, format_conversion_details, note_is_warning, status_note};
use crate::error::InflationResult;
use crate::models::{RateTable, YearPair};
use crate::services::{MissingRatePolicy, MultiplierEngine};

/// Arguments for `inflation convert`
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Amount in pesos (e.g., "100", "1,250.50", "₱500")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Year the amount is from (defaults to the earliest year)
    #[arg(short, long)]
    pub from: Option<i32>,

    /// Year to convert to (defaults to the latest year)
    #[arg(short, long)]
    pub to: Option<i32>,

    /// Exchange the from and to years
    #[arg(short, long)]
    pub swap: bool,

    /// Fail instead of counting years without a recorded rate as 0%
    #[arg(long)]
    pub strict: bool,

    /// Show the multiplier and span
    #[arg(short, long)]
    pub details: bool,
}

impl ConvertArgs {
    /// The years to convert between, after defaults and swapping
    pub fn years(&self, table: &RateTable) -> YearPair {
        let pair = YearPair::new(
            self.from.unwrap_or_else(|| table.first_year()),
            self.to.unwrap_or_else(|| table.last_year()),
        );
        if self.swap {
            pair.swapped()
        } else {
            pair
        }
    }
}

/// Handle the convert command
///
/// Errors are printed as the result message and status note before they are
/// returned, so callers only need to set the exit status.
pub fn handle_convert_command(
    table: &RateTable,
    settings: &Settings,
    args: ConvertArgs,
) -> InflationResult<()> {
    let years = args.years(table);
    let policy = if args.strict {
        MissingRatePolicy::Reject
    } else {
        settings.missing_rate_policy()
    };

    let engine = MultiplierEngine::new(table).with_missing_rate_policy(policy);
    let result = engine.compute(&args.amount, years.from, years.to);

    match &result {
        Ok(conversion) => {
            println!("{}", format_conversion(conversion, settings));
            if args.details {
                println!();
                print!("{}", format_conversion_details(conversion));
            }
        }
        Err(_) => println!("{}", NO_RESULT_MESSAGE),
    }

    let note = status_note(&result);
    if note_is_warning(&result) {
        eprintln!("{}", note);
    } else {
        println!();
        println!("{}", note);
    }

    result.map(|_| ())
}
