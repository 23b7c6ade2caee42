//! # Formatter
//!
//! Display strings for amounts: `1234.5 → "1,234.50"`.
//!
//! Rounding works on the shortest decimal text of the float (what a person
//! would read), not on its binary expansion. So `15.555` shows as `"15.56"`
//! even though the stored double is `15.55499…`. Ties go away from zero.

use crate::currency::Currency;

const GROUP_SEPARATOR: char = ',';
const GROUP_SIZE: usize = 3;

// =============================================================================
// Amounts
// =============================================================================

/// Exactly two decimals with thousands grouping.
///
/// ```rust
/// use resto_core::format::format_amount;
///
/// assert_eq!(format_amount(15.555), "15.56");
/// assert_eq!(format_amount(15.554), "15.55");
/// assert_eq!(format_amount(1000.0), "1,000.00");
/// ```
pub fn format_amount(amount: f64) -> String {
    format_number_with_separators(amount, 2)
}

/// Exactly two decimals, no grouping. This is the text an input field
/// holds, so it parses back to the same value.
///
/// ```rust
/// use resto_core::format::format_input_amount;
/// use resto_core::parse_currency_string;
///
/// assert_eq!(format_input_amount(1000.0), "1000.00");
/// assert_eq!(parse_currency_string(&format_input_amount(1533.88)), 1533.88);
/// ```
pub fn format_input_amount(amount: f64) -> String {
    render(amount, 2, false)
}

/// Amount followed by the currency symbol: `"12.50 лв"`, `"12.50 €"`.
pub fn format_amount_with_currency(amount: f64, currency: Currency) -> String {
    format!("{} {}", format_amount(amount), currency.symbol())
}

/// Fixed `decimals` with thousands grouping of the integer part.
pub fn format_number_with_separators(value: f64, decimals: usize) -> String {
    render(value, decimals, true)
}

/// Two decimals and a percent sign: `"12.50%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", render(value, 2, false))
}

/// Short form for large numbers: `"1.5M"`, `"2.0K"`, otherwise [`format_amount`].
pub fn format_compact_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", render(value / 1_000_000.0, 1, false))
    } else if value >= 1_000.0 {
        format!("{}K", render(value / 1_000.0, 1, false))
    } else {
        format_amount(value)
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn render(value: f64, decimals: usize, grouped: bool) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // `Display` for f64 gives the shortest round-tripping text, never exponents.
    let text = value.abs().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let (integer, fraction) = round_digits(integer, fraction, decimals);

    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
    let mut out = String::with_capacity(integer.len() + decimals + 8);
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    if grouped {
        out.push_str(&group_thousands(&integer));
    } else {
        out.push_str(&integer);
    }
    if decimals > 0 {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Rounds decimal digit strings to `decimals` places, half away from zero.
fn round_digits(integer: &str, fraction: &str, decimals: usize) -> (String, String) {
    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .map(|b| b - b'0')
        .collect();

    let round_up = fraction.as_bytes().get(decimals).is_some_and(|d| *d >= b'5');
    let mut integer_len = integer.len();

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            integer_len += 1;
        }
    }

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let (integer, fraction) = text.split_at(integer_len);
    (integer.to_string(), fraction.to_string())
}

fn group_thousands(integer: &str) -> String {
    let mut out = String::with_capacity(integer.len() + integer.len() / GROUP_SIZE);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % GROUP_SIZE == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
