//! Numeric projection of MIC values.
//!
//! Every arithmetic, statistical and relational operation on a measurement
//! goes through [`to_number`]: comparator characters are dropped and the
//! remaining digits are parsed as an `f64`. The comparator never biases the
//! result.

/// Project a serialized measurement onto its magnitude.
///
/// Returns `None` when nothing numeric remains after removing `<`, `=` and `>`.
pub fn to_number(value: &str) -> Option<f64> {
    let digits: String = value
        .chars()
        .filter(|ch| !matches!(ch, '<' | '=' | '>'))
        .collect();
    let trimmed = digits.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Formats a floating-point number without scientific notation or trailing zeros.
///
/// This is how numeric raw input is turned into text before normalization.
///
/// # Examples
///
/// ```
/// use mic_model::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(0.125), "0.125");
/// assert_eq!(format_numeric(1024.0), "1024");
/// assert_eq!(format_numeric(0.00001), "0.00001");
/// ```
pub fn format_numeric(value: f64) -> String {
    // `Display` for f64 never switches to exponent notation.
    let formatted = format!("{value}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
