//! Property-based tests for the currency invariants.
//!
//! - Breakdown sums back to the amount
//! - Conversion round trip drift is bounded
//! - Change of equal amounts is zero; short payments are rejected
//! - Formatting always has two decimals
//! - Sanitized input is short and has one decimal point at most

use proptest::prelude::*;

use crate::breakdown::{get_denomination_breakdown, total_from_breakdown};
use crate::change::calculate_change;
use crate::conversion::{convert_bgn_to_eur, convert_eur_to_bgn};
use crate::currency::Currency;
use crate::error::{AmountError, ChangeError};
use crate::format::format_amount;
use crate::input::{is_amount_valid, sanitize_currency_input};
use crate::validation::validate_amount;
use crate::MAX_INPUT_LENGTH;

/// Amounts that are whole minor units between 0.00 and 99999.99.
fn minor_unit_amount() -> impl Strategy<Value = f64> {
    (0i64..=9_999_999i64).prop_map(|minor| minor as f64 / 100.0)
}

fn positive_amount() -> impl Strategy<Value = f64> {
    (1i64..=9_999_999i64).prop_map(|minor| minor as f64 / 100.0)
}

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Bgn), Just(Currency::Eur)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_breakdown_sums_to_amount(amount in minor_unit_amount(), currency in currency()) {
        let lines = get_denomination_breakdown(amount, currency);
        let total = total_from_breakdown(&lines);
        prop_assert!((total - amount).abs() < 0.01, "{} summed to {}", amount, total);
        prop_assert!(lines.iter().all(|l| l.count > 0));
    }

    #[test]
    fn prop_breakdown_is_strictly_descending(amount in minor_unit_amount(), currency in currency()) {
        let lines = get_denomination_breakdown(amount, currency);
        prop_assert!(lines.windows(2).all(|w| w[0].denomination > w[1].denomination));
    }

    #[test]
    fn prop_round_trip_drift_is_bounded(bgn in minor_unit_amount()) {
        let back = convert_eur_to_bgn(convert_bgn_to_eur(bgn));
        prop_assert!((back - bgn).abs() < 0.1);
    }

    #[test]
    fn prop_equal_amounts_give_zero_change(x in minor_unit_amount()) {
        let result = calculate_change(x, x);
        prop_assert!(result.is_valid);
        prop_assert_eq!(result.bgn, 0.0);
        prop_assert_eq!(result.eur, 0.0);
    }

    #[test]
    fn prop_short_payment_is_insufficient(a in positive_amount(), b in positive_amount()) {
        prop_assume!(a < b);
        let result = calculate_change(a, b);
        prop_assert!(!result.is_valid);
        prop_assert_eq!(result.error, Some(ChangeError::InsufficientAmount));
    }

    #[test]
    fn prop_format_has_two_decimals(n in -1.0e12f64..1.0e12f64) {
        let text = format_amount(n);
        let (_, fraction) = text.rsplit_once('.').expect("decimal point");
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn prop_sanitized_input_shape(text in "\\PC{0,24}") {
        let sanitized = sanitize_currency_input(&text);
        prop_assert!(sanitized.len() <= MAX_INPUT_LENGTH);
        prop_assert!(sanitized.matches('.').count() <= 1);
        prop_assert!(sanitized.chars().all(|c| c.is_ascii_digit() || c == '.'));
    }

    #[test]
    fn prop_sanitized_input_never_has_too_many_decimals(text in "[0-9.,a-z -]{0,16}") {
        let sanitized = sanitize_currency_input(&text);
        let result = validate_amount(&sanitized);
        prop_assert_ne!(result.error, Some(AmountError::too_many_decimals()));
        if result.is_valid {
            prop_assert!(is_amount_valid(result.amount));
        }
    }
}
