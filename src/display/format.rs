//! Number formatting for terminal output
//!
//! Currency amounts, annual rates, and year-over-year deltas.

/// Sign used for falling deltas (U+2212)
pub const MINUS_SIGN: char = '−';

/// Placeholder for an unknown rate
pub const UNKNOWN_RATE: &str = "—";

/// Format a currency amount with thousands separators
///
/// Non-finite values render as zero.
pub fn format_currency(value: f64, symbol: &str, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut output = String::new();
    // "-0.00" reads as zero, so only signal a negative that survives rounding
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        output.push('-');
    }
    output.push_str(symbol);
    output.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        output.push('.');
        output.push_str(frac);
    }
    output
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format an annual rate as given in the table, e.g. "6.2%" or "4%"
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{}%", r),
        None => UNKNOWN_RATE.to_string(),
    }
}

/// Format a year-over-year delta as "+1.20" or "−1.20"
pub fn format_delta(delta: f64, decimals: usize) -> String {
    let magnitude = format!("{:.*}", decimals, delta.abs());
    if magnitude.chars().all(|c| c == '0' || c == '.') {
        magnitude
    } else if delta > 0.0 {
        format!("+{}", magnitude)
    } else {
        format!("{}{}", MINUS_SIGN, magnitude)
    }
}

/// Format a percent change as "12.50% increase" or "3.10% decrease"
pub fn format_percent_change(pct: f64, decimals: usize) -> String {
    let label = if pct >= 0.0 { "increase" } else { "decrease" };
    format!("{:.*}% {}", decimals, pct, label)
}
