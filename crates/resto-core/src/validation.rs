//! # Validation Module
//!
//! Decides whether a typed bill or payment is acceptable.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Amount Validation                                  │
//! │                                                                         │
//! │  validate_amount("15.505")                                              │
//! │       │                                                                 │
//! │       ├── blank?                  → valid, amount 0                     │
//! │       ├── parse (input module)                                          │
//! │       ├── amount < 0?             → NEGATIVE_AMOUNT                     │
//! │       ├── amount > 99999.99?      → AMOUNT_TOO_LARGE                    │
//! │       ├── > 2 digits after '.'?   → TOO_MANY_DECIMALS                   │
//! │       └── OK                      → valid, parsed amount                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The negative branch cannot fire for text: the parser drops `-`. It stays
//! reachable through [`validate_parsed_amount`] for callers that already
//! hold a number.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AmountError;
use crate::input::parse_currency_string;
use crate::{MAX_AMOUNT, MAX_FRACTION_DIGITS};

/// Outcome of validating one amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// The parsed amount; 0 whenever `is_valid` is false.
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<AmountError>,
}

impl ValidationResult {
    /// A passing result carrying `amount`.
    pub const fn valid(amount: f64) -> Self {
        ValidationResult {
            is_valid: true,
            amount,
            error: None,
        }
    }

    /// A failing result; the amount is reset to 0.
    pub const fn invalid(error: AmountError) -> Self {
        ValidationResult {
            is_valid: false,
            amount: 0.0,
            error: Some(error),
        }
    }

    /// Converts into a `Result` for callers that prefer `?`.
    pub fn into_result(self) -> Result<f64, AmountError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.amount),
        }
    }
}

/// Validates raw text from an amount field.
///
/// The digit-count rule looks at the text as typed, before any clipping,
/// and only at the run after a `.`.
///
/// ```rust
/// use resto_core::validation::validate_amount;
/// use resto_core::AmountError;
///
/// assert_eq!(validate_amount("").amount, 0.0);
/// assert_eq!(validate_amount("15.50").amount, 15.5);
/// assert_eq!(validate_amount("15.505").error, Some(AmountError::too_many_decimals()));
/// assert_eq!(validate_amount("100000").error, Some(AmountError::too_large()));
/// ```
pub fn validate_amount(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::valid(0.0);
    }

    let checked = validate_parsed_amount(parse_currency_string(value));
    if !checked.is_valid {
        return checked;
    }

    if let Some(fraction) = value.split('.').nth(1) {
        let digits = fraction.chars().filter(char::is_ascii_digit).count();
        if digits > MAX_FRACTION_DIGITS {
            return ValidationResult::invalid(AmountError::too_many_decimals());
        }
    }

    checked
}

/// Bound checks for an amount that is already a number.
///
/// Non-finite input has nothing to validate against and counts as too large
/// (`NaN` included), so a result is always produced.
pub fn validate_parsed_amount(amount: f64) -> ValidationResult {
    if amount < 0.0 {
        return ValidationResult::invalid(AmountError::Negative);
    }

    if amount > MAX_AMOUNT || !amount.is_finite() {
        return ValidationResult::invalid(AmountError::too_large());
    }

    ValidationResult::valid(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
