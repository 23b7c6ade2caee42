//! # Input Module
//!
//! Turns whatever lands in an amount text field into something numeric.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Text → Number Pipeline                            │
//! │                                                                         │
//! │  "€1 234,567"                                                           │
//! │       │  sanitize_currency_input                                        │
//! │       ▼                                                                 │
//! │  "1234.56"      digits + one '.', ≤ 2 decimals, ≤ 9 chars               │
//! │       │  parse_currency_string                                          │
//! │       ▼                                                                 │
//! │  1234.56        leading numeric prefix, 0 when there is none            │
//! │       │  is_amount_valid (live typing)                                  │
//! │       ▼         validate_amount (validation module)                     │
//! │  accept / reject                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `-` sign is noise like any other symbol, so negative input never
//! survives this pipeline.

use crate::{MAX_AMOUNT, MAX_FRACTION_DIGITS, MAX_INPUT_LENGTH};

const DECIMAL_POINT: char = '.';
const DECIMAL_COMMA: char = ',';

// =============================================================================
// Sanitizer
// =============================================================================

/// Cleans free text into a canonical decimal string.
///
/// ## Rules
/// 1. Keep ASCII digits, `.` and `,`; drop everything else.
/// 2. The first `,` becomes `.`; later commas are thousands noise and go.
/// 3. Only the run right after the first `.` is kept as the fraction,
///    clipped to 2 digits. Later `.`-segments are discarded.
/// 4. At most 9 characters overall.
///
/// ```rust
/// use resto_core::input::sanitize_currency_input;
///
/// assert_eq!(sanitize_currency_input("15,50"), "15.50");
/// assert_eq!(sanitize_currency_input("1 234,56"), "1234.56");
/// assert_eq!(sanitize_currency_input("1,234.56"), "1.23");
/// assert_eq!(sanitize_currency_input("12.34.56"), "12.34");
/// assert_eq!(sanitize_currency_input("-50"), "50");
/// assert_eq!(sanitize_currency_input(","), ".");
/// ```
pub fn sanitize_currency_input(text: &str) -> String {
    let mut filtered = String::with_capacity(text.len());
    let mut comma_seen = false;

    for c in text.chars() {
        match c {
            '0'..='9' | DECIMAL_POINT => filtered.push(c),
            DECIMAL_COMMA if !comma_seen => {
                comma_seen = true;
                filtered.push(DECIMAL_POINT);
            }
            _ => {}
        }
    }

    let mut sanitized = match filtered.split_once(DECIMAL_POINT) {
        Some((integer, rest)) => {
            let fraction = rest.split(DECIMAL_POINT).next().unwrap_or_default();
            let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            format!("{integer}{DECIMAL_POINT}{fraction}")
        }
        None => filtered,
    };

    // ASCII only at this point, so byte truncation is char-safe.
    sanitized.truncate(MAX_INPUT_LENGTH);
    sanitized
}

// =============================================================================
// Parser
// =============================================================================

/// Parses text into a non-negative amount, `0.0` when nothing numeric leads.
///
/// Non-numeric characters (minus signs included) are stripped and the first
/// `,` turns into `.`. What remains is read as far as it forms a decimal
/// literal: parsing stops at the second separator.
///
/// ```rust
/// use resto_core::input::parse_currency_string;
///
/// assert_eq!(parse_currency_string("15,50"), 15.5);
/// assert_eq!(parse_currency_string("10.50.25"), 10.5);
/// assert_eq!(parse_currency_string("1,000.50"), 1.0);
/// assert_eq!(parse_currency_string("-42"), 42.0);
/// assert_eq!(parse_currency_string("abc"), 0.0);
/// ```
pub fn parse_currency_string(value: &str) -> f64 {
    let mut cleaned = String::with_capacity(value.len());
    let mut comma_replaced = false;

    for c in value.chars() {
        match c {
            '0'..='9' | DECIMAL_POINT => cleaned.push(c),
            DECIMAL_COMMA if !comma_replaced => {
                comma_replaced = true;
                cleaned.push(DECIMAL_POINT);
            }
            DECIMAL_COMMA => cleaned.push(c),
            _ => {}
        }
    }

    numeric_prefix(&cleaned)
        .and_then(|literal| literal.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Longest `digits[.digits]` prefix, normalised so `str::parse` accepts it.
/// `None` when the prefix holds no digit at all.
fn numeric_prefix(cleaned: &str) -> Option<String> {
    let integer: String = cleaned.chars().take_while(char::is_ascii_digit).collect();
    let rest = &cleaned[integer.len()..];

    let fraction: String = match rest.strip_prefix(DECIMAL_POINT) {
        Some(after_point) => after_point.chars().take_while(char::is_ascii_digit).collect(),
        None => String::new(),
    };

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let integer = if integer.is_empty() { "0" } else { &integer };
    if fraction.is_empty() {
        Some(integer.to_string())
    } else {
        Some(format!("{integer}.{fraction}"))
    }
}

// =============================================================================
// Live Typing Check
// =============================================================================

/// Numeric-only bound check used while typing: finite and within
/// `[0, MAX_AMOUNT]`.
///
/// ```rust
/// use resto_core::input::is_amount_valid;
///
/// assert!(is_amount_valid(99999.99));
/// assert!(!is_amount_valid(100000.0));
/// assert!(!is_amount_valid(f64::NAN));
/// assert!(!is_amount_valid(-1.0));
/// ```
pub fn is_amount_valid(amount: f64) -> bool {
    amount.is_finite() && (0.0..=MAX_AMOUNT).contains(&amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_basic() {
        assert_eq!(sanitize_currency_input(""), "");
        assert_eq!(sanitize_currency_input("123"), "123");
        assert_eq!(sanitize_currency_input("12.34"), "12.34");
        assert_eq!(sanitize_currency_input("12,34"), "12.34");
    }

    #[test]
    fn test_sanitize_strips_noise() {
        assert_eq!(sanitize_currency_input("12abc34"), "1234");
        assert_eq!(sanitize_currency_input("$100"), "100");
        assert_eq!(sanitize_currency_input("€50"), "50");
        assert_eq!(sanitize_currency_input("100лв"), "100");
        assert_eq!(sanitize_currency_input("100!@#"), "100");
        assert_eq!(sanitize_currency_input("100 50"), "10050");
        assert_eq!(sanitize_currency_input("-50"), "50");
        assert_eq!(sanitize_currency_input("+50"), "50");
        // Non-ASCII digits are not decimal digits here.
        assert_eq!(sanitize_currency_input("٣5"), "5");
    }

    #[test]
    fn test_sanitize_clips_fraction() {
        assert_eq!(sanitize_currency_input("12.345"), "12.34");
        assert_eq!(sanitize_currency_input("12.3456789"), "12.34");
        assert_eq!(sanitize_currency_input("12.3"), "12.3");
        assert_eq!(sanitize_currency_input("12."), "12.");
        assert_eq!(sanitize_currency_input(".5"), ".5");
    }

    #[test]
    fn test_sanitize_multiple_separators() {
        assert_eq!(sanitize_currency_input("12.34.56"), "12.34");
        assert_eq!(sanitize_currency_input("12,34,56"), "12.34");
        assert_eq!(sanitize_currency_input("12.34,56"), "12.34");
        assert_eq!(sanitize_currency_input("1,234.56"), "1.23");
        assert_eq!(sanitize_currency_input("1.2.3"), "1.2");
        assert_eq!(sanitize_currency_input("1,2,3"), "1.23");
    }

    #[test]
    fn test_sanitize_length_limit() {
        assert_eq!(sanitize_currency_input("1234567890"), "123456789");
        assert_eq!(sanitize_currency_input("123456789"), "123456789");
        assert_eq!(sanitize_currency_input("123456.789"), "123456.78");
        assert_eq!(sanitize_currency_input("12345678.99"), "12345678.");
    }

    #[test]
    fn test_sanitize_edge_cases() {
        assert_eq!(sanitize_currency_input("."), ".");
        assert_eq!(sanitize_currency_input(","), ".");
        assert_eq!(sanitize_currency_input("0"), "0");
        assert_eq!(sanitize_currency_input("007"), "007");
        assert_eq!(sanitize_currency_input("0.00"), "0.00");
        assert_eq!(sanitize_currency_input("99999.99"), "99999.99");
    }

    #[test]
    fn test_sanitize_real_world() {
        assert_eq!(sanitize_currency_input("50 лв"), "50");
        assert_eq!(sanitize_currency_input("€100.00"), "100.00");
        assert_eq!(sanitize_currency_input("15,50"), "15.50");
        assert_eq!(sanitize_currency_input("1 234,56"), "1234.56");
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse_currency_string("15"), 15.0);
        assert_eq!(parse_currency_string("15.50"), 15.5);
        assert_eq!(parse_currency_string("15,50"), 15.5);
        assert_eq!(parse_currency_string(".5"), 0.5);
        assert_eq!(parse_currency_string("5."), 5.0);
        assert_eq!(parse_currency_string("007"), 7.0);
    }

    #[test]
    fn test_parse_stops_at_second_separator() {
        assert_eq!(parse_currency_string("10.50.25"), 10.5);
        assert_eq!(parse_currency_string("1,000.50"), 1.0);
        assert_eq!(parse_currency_string("1,5,7"), 1.5);
    }

    #[test]
    fn test_parse_strips_noise_and_sign() {
        assert_eq!(parse_currency_string("€ 25.40"), 25.4);
        assert_eq!(parse_currency_string("100 лв"), 100.0);
        assert_eq!(parse_currency_string("-42"), 42.0);
        assert_eq!(parse_currency_string("1e5"), 15.0);
    }

    #[test]
    fn test_parse_without_numeric_prefix() {
        assert_eq!(parse_currency_string(""), 0.0);
        assert_eq!(parse_currency_string("abc"), 0.0);
        assert_eq!(parse_currency_string("."), 0.0);
        assert_eq!(parse_currency_string(","), 0.0);
        assert_eq!(parse_currency_string("..5"), 0.0);
    }

    #[test]
    fn test_is_amount_valid() {
        assert!(is_amount_valid(0.0));
        assert!(is_amount_valid(0.01));
        assert!(is_amount_valid(15.5));
        assert!(is_amount_valid(99999.98));
        assert!(is_amount_valid(MAX_AMOUNT));

        assert!(!is_amount_valid(100000.0));
        assert!(!is_amount_valid(999999999.0));
        assert!(!is_amount_valid(-1.0));
        assert!(!is_amount_valid(f64::NAN));
        assert!(!is_amount_valid(f64::INFINITY));
        assert!(!is_amount_valid(f64::NEG_INFINITY));
    }
}
