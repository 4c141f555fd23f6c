//! Parsing of user-entered peso amounts
//!
//! Amounts arrive as free text, possibly with a currency prefix and comma
//! grouping ("₱1,250.50", "PHP 1,000"). Only finite, non-negative values are
//! accepted.

use crate::error::{InflationError, InflationResult};

const PESO_SIGN: char = '₱';
const PESO_CODE: &str = "PHP";

/// Parse an amount string into a non-negative finite number
///
/// Accepts formats: "100", "1,250.50", "₱1,250.50", "PHP 1000", "1e3"
///
/// # Examples
/// ```
/// use peso_inflation::models::parse_amount;
/// assert_eq!(parse_amount("₱1,250.50").unwrap(), 1250.5);
/// assert!(parse_amount("abc").is_err());
/// ```
pub fn parse_amount(input: &str) -> InflationResult<f64> {
    let s = input.trim();

    // Remove currency prefix if present
    let s = s.strip_prefix(PESO_SIGN).unwrap_or(s);
    let s = match s.get(..PESO_CODE.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(PESO_CODE) => &s[PESO_CODE.len()..],
        _ => s,
    };

    let cleaned: String = s
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err(InflationError::invalid_amount(input));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| InflationError::invalid_amount(input))?;

    if !value.is_finite() || value < 0.0 {
        return Err(InflationError::invalid_amount(input));
    }

    // Normalise -0.0
    Ok(value + 0.0)
}
