//! Conversion result formatting

use crate::config::Settings;
use crate::error::{InflationError, InflationResult};
use crate::services::{Advisory, Conversion};

use super::format::{format_currency, format_percent_change};

/// Shown when no result can be computed from the amount
pub const NO_RESULT_MESSAGE: &str = "Enter a valid amount to see the result.";

/// Prompt for an amount that isn't a non-negative number
pub const INVALID_AMOUNT_NOTE: &str = "Please enter a valid non-negative number for the amount.";

/// Advisory for identical from/to years
pub const SAME_YEAR_NOTE: &str = "Picking the same year shows no change.";

/// Default footnote when nothing needs the user's attention
pub const SOURCE_NOTE: &str =
    "Note: Uses average annual inflation per year. Source: BSP and public datasets.";

/// The one-line result, e.g. "would roughly cost you ₱107.80 (7.80% increase)"
pub fn format_result_line(conversion: &Conversion, settings: &Settings) -> String {
    format!(
        "would roughly cost you {} ({})",
        format_currency(
            conversion.final_amount,
            &settings.currency_symbol,
            settings.decimal_places
        ),
        format_percent_change(conversion.percent_change, settings.decimal_places)
    )
}

/// The full sentence including the amount and both years
pub fn format_conversion(conversion: &Conversion, settings: &Settings) -> String {
    format!(
        "In {}, the goods you can buy for {}\nat the end of {} {}",
        conversion.from_year,
        format_currency(
            conversion.amount,
            &settings.currency_symbol,
            settings.decimal_places
        ),
        conversion.to_year,
        format_result_line(conversion, settings)
    )
}

/// Multiplier and direction details
pub fn format_conversion_details(conversion: &Conversion) -> String {
    let (start, end) = conversion.years().span();
    let mut output = String::new();
    output.push_str(&format!("  Multiplier:  {:.6}\n", conversion.multiplier));
    if start == end {
        output.push_str("  Span:        none\n");
    } else {
        output.push_str(&format!(
            "  Span:        {}-{} ({} year{})\n",
            start + 1,
            end,
            end - start,
            if end - start == 1 { "" } else { "s" }
        ));
    }
    output.push_str(&format!("  Direction:   {:?}\n", conversion.direction()));
    output
}

/// The note shown under a result: a correction, an advisory, or the source
pub fn status_note(result: &InflationResult<Conversion>) -> String {
    match result {
        Err(InflationError::InvalidAmount(_) | InflationError::NotComputable(_)) => {
            INVALID_AMOUNT_NOTE.to_string()
        }
        Err(err) => err.to_string(),
        Ok(conversion) => match conversion.advisory() {
            Some(Advisory::SameYear) => SAME_YEAR_NOTE.to_string(),
            None => SOURCE_NOTE.to_string(),
        },
    }
}

/// Whether the note needs the user's attention
pub fn note_is_warning(result: &InflationResult<Conversion>) -> bool {
    match result {
        Err(_) => true,
        Ok(conversion) => conversion.advisory().is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RateTable;
    use crate::services::MultiplierEngine;

    fn sample_table() -> RateTable {
        RateTable::from_entries([(2020, Some(5.0)), (2021, Some(10.0)), (2022, Some(-2.0))])
            .unwrap()
    }

    #[test]
    fn test_result_line() {
        let table = sample_table();
        let engine = MultiplierEngine::new(&table);
        let settings = Settings::default();

        let forward = engine.compute("100", 2020, 2022).unwrap();
        assert_eq!(
            format_result_line(&forward, &settings),
            "would roughly cost you ₱107.80 (7.80% increase)"
        );

        let backward = engine.compute("100", 2022, 2020).unwrap();
        assert_eq!(
            format_result_line(&backward, &settings),
            "would roughly cost you ₱92.76 (-7.24% decrease)"
        );
    }

    #[test]
    fn test_full_sentence() {
        let table = sample_table();
        let engine = MultiplierEngine::new(&table);
        let conversion = engine.compute("1,000", 2020, 2021).unwrap();

        let text = format_conversion(&conversion, &Settings::default());
        assert!(text.starts_with("In 2020, the goods you can buy for ₱1,000.00"));
        assert!(text.contains("at the end of 2021 would roughly cost you ₱1,100.00"));
    }

    #[test]
    fn test_details() {
        let table = sample_table();
        let engine = MultiplierEngine::new(&table);

        let details = format_conversion_details(&engine.compute("1", 2020, 2022).unwrap());
        assert!(details.contains("Multiplier:  1.078000"));
        assert!(details.contains("Span:        2021-2022 (2 years)"));
        assert!(details.contains("Forward"));

        let details = format_conversion_details(&engine.compute("1", 2021, 2021).unwrap());
        assert!(details.contains("Span:        none"));
    }

    #[test]
    fn test_status_notes() {
        let table = sample_table();
        let engine = MultiplierEngine::new(&table);

        let invalid = engine.compute("abc", 2020, 2021);
        assert_eq!(status_note(&invalid), INVALID_AMOUNT_NOTE);
        assert!(note_is_warning(&invalid));

        let same = engine.compute("100", 2021, 2021);
        assert_eq!(status_note(&same), SAME_YEAR_NOTE);
        assert!(note_is_warning(&same));

        let normal = engine.compute("100", 2020, 2021);
        assert_eq!(status_note(&normal), SOURCE_NOTE);
        assert!(!note_is_warning(&normal));

        let unknown = engine.compute("100", 1999, 2021);
        assert!(status_note(&unknown).contains("1999"));
    }

    #[test]
    fn test_status_note_for_out_of_range_result() {
        let table = RateTable::builtin().unwrap();
        let engine = MultiplierEngine::new(&table);

        let overflow = engine.compute("1e308", 1990, 2024);
        assert_eq!(status_note(&overflow), INVALID_AMOUNT_NOTE);
        assert!(note_is_warning(&overflow));
    }
}
