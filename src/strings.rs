//! Text cleanup for numeric input fields.

use crate::error::InputError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that cannot be part of a plain decimal number.
static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^-.0-9]").expect("valid pattern"));

/// Leading zeros followed by at least one more digit, after an optional sign.
static LEADING_ZEROS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(-?)0+(\d+)").expect("valid pattern"));

/// Sanitizes raw text typed into a numeric field.
///
/// Keeps digits, minus signs and decimal points, then strips leading zeros
/// while preserving a single `"0"`. Empty input stays empty; non-empty input
/// with nothing numeric left becomes `"0"`.
///
/// The result is idempotent: `sanitize_input(sanitize_input(s)) == sanitize_input(s)`.
///
/// # Examples
/// ```
/// use rtimeline::sanitize_input;
/// assert_eq!(sanitize_input("0123"), "123");
/// assert_eq!(sanitize_input("000"), "0");
/// assert_eq!(sanitize_input("-0045"), "-45");
/// ```
pub fn sanitize_input(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let filtered = DISALLOWED_CHARS.replace_all(text, "");
    let stripped = LEADING_ZEROS.replace(&filtered, "${1}${2}");

    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.into_owned()
    }
}

/// Parses already-sanitized text into a number.
///
/// Only plain decimal notation reaches this point, so `f64` parsing agrees
/// with what a user expects: `"1."` and `".5"` are numbers, `"-"`, `"."`
/// and `"1.2.3"` are not.
pub fn parse_numeric(text: &str) -> Result<f64, InputError> {
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| InputError::NotANumber { text: text.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_leading_zeros() {
        assert_eq!(sanitize_input("0123"), "123");
        assert_eq!(sanitize_input("00456"), "456");
        assert_eq!(sanitize_input("000789"), "789");
    }

    #[test]
    fn test_preserves_single_zero() {
        assert_eq!(sanitize_input("0"), "0");
        assert_eq!(sanitize_input("00"), "0");
        assert_eq!(sanitize_input("000"), "0");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(sanitize_input("-0123"), "-123");
        assert_eq!(sanitize_input("-000456"), "-456");
        assert_eq!(sanitize_input("-0"), "-0");
    }

    #[test]
    fn test_strips_non_numeric_characters() {
        assert_eq!(sanitize_input("123a"), "123");
        assert_eq!(sanitize_input("4 5 6"), "456");
        assert_eq!(sanitize_input("+789"), "789");
        assert_eq!(sanitize_input("abc"), "0");
    }

    #[test]
    fn test_decimal_after_zero_is_kept() {
        assert_eq!(sanitize_input("0.5"), "0.5");
        assert_eq!(sanitize_input("00.5"), "0.5");
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(sanitize_input(""), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["000123", "0", "-000456", "12.50", "x0y0z1", "--1", ""] {
            let once = sanitize_input(raw);
            assert_eq!(sanitize_input(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("1500"), Ok(1500.0));
        assert_eq!(parse_numeric("-45"), Ok(-45.0));
        assert_eq!(parse_numeric("1."), Ok(1.0));
        assert_eq!(parse_numeric(".5"), Ok(0.5));
        assert_eq!(parse_numeric(""), Err(InputError::Empty));
        assert!(parse_numeric("-").is_err());
        assert!(parse_numeric(".").is_err());
        assert!(parse_numeric("1.2.3").is_err());
        assert!(parse_numeric("1-2").is_err());
    }
}
