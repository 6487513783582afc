//! Locale-tolerant numeric parsing and formatting.
//!
//! Catalog files are produced by Brazilian spreadsheets, so `1,5` and `1.5`
//! both mean one and a half.

/// Parse a decimal that may use a comma as decimal separator.
///
/// Surrounding whitespace is ignored. Every comma is replaced by a period
/// before parsing, so `1.234,5` is rejected rather than guessed at.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse::<f64>().ok()
}

/// Check if a string parses as a decimal.
pub fn is_decimal(value: &str) -> bool {
    parse_decimal(value).is_some()
}

/// Returns the value as an integer when it has no fractional part.
pub fn as_integral(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // Beyond 2^53 an f64 no longer maps one-to-one onto integers.
    if value.abs() > 9_007_199_254_740_992.0 {
        return None;
    }
    Some(value as i64)
}

/// Formats a float, dropping the fractional part when it is zero.
pub fn format_number(value: f64) -> String {
    match as_integral(value) {
        Some(int) => int.to_string(),
        None => value.to_string(),
    }
}
