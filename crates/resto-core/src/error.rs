//! # Error Types
//!
//! Domain-specific error types for resto-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  resto-core errors (this file)                                          │
//! │  ├── AmountError   - A typed amount fails bound/precision rules         │
//! │  └── ChangeError   - A received/bill pair cannot produce change         │
//! │                                                                         │
//! │  resto-app errors (separate crate)                                      │
//! │  └── ApiError      - What the UI sees (code + message)                  │
//! │                                                                         │
//! │  Flow: AmountError / ChangeError → ApiError → UI translation table      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors Are Values
//! None of these are ever returned through `Err` by the calculation
//! functions. They ride inside [`ValidationResult`](crate::validation::ValidationResult)
//! and [`ChangeResult`](crate::change::ChangeResult) so every function stays
//! total. The UI maps [`AmountError::code`] / [`ChangeError::code`] to its
//! own localized text; the `Display` strings are language-agnostic fallbacks.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::{MAX_AMOUNT, MAX_FRACTION_DIGITS};

// =============================================================================
// Amount Error
// =============================================================================

/// Reasons a typed amount is rejected by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize, TS)]
#[serde(tag = "code")]
#[ts(export)]
pub enum AmountError {
    /// The amount is below zero.
    ///
    /// ## When This Occurs
    /// Only when a caller hands a negative number straight to
    /// [`validate_parsed_amount`](crate::validation::validate_parsed_amount).
    /// The text pipeline strips `-` before parsing, so typed input never
    /// lands here.
    #[error("negative amounts not allowed")]
    #[serde(rename = "NEGATIVE_AMOUNT")]
    Negative,

    /// The amount is above [`MAX_AMOUNT`].
    #[error("maximum amount is {max}")]
    #[serde(rename = "AMOUNT_TOO_LARGE")]
    TooLarge { max: f64 },

    /// More fractional digits were typed than a minor unit allows.
    #[error("at most {max} digits after the decimal point")]
    #[serde(rename = "TOO_MANY_DECIMALS")]
    TooManyDecimals { max: usize },
}

impl AmountError {
    /// `TooLarge` carrying the crate-wide maximum.
    pub const fn too_large() -> Self {
        AmountError::TooLarge { max: MAX_AMOUNT }
    }

    /// `TooManyDecimals` carrying the crate-wide digit limit.
    pub const fn too_many_decimals() -> Self {
        AmountError::TooManyDecimals {
            max: MAX_FRACTION_DIGITS,
        }
    }

    /// Stable machine-readable code, identical to the serialized tag.
    pub const fn code(&self) -> &'static str {
        match self {
            AmountError::Negative => "NEGATIVE_AMOUNT",
            AmountError::TooLarge { .. } => "AMOUNT_TOO_LARGE",
            AmountError::TooManyDecimals { .. } => "TOO_MANY_DECIMALS",
        }
    }
}

// =============================================================================
// Change Error
// =============================================================================

/// Reasons a change calculation is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize, TS)]
#[serde(tag = "code")]
#[ts(export)]
pub enum ChangeError {
    /// Received is positive but smaller than a positive bill.
    ///
    /// ## User Workflow
    /// ```text
    /// Bill: 100.00 лв
    /// Received: 50.00 лв
    ///      │
    ///      ▼
    /// calculate_change(50, 100)
    ///      │
    ///      ▼
    /// InsufficientAmount → UI shows "Недостатъчна сума"
    /// ```
    #[error("insufficient amount")]
    #[serde(rename = "INSUFFICIENT_AMOUNT")]
    InsufficientAmount,

    /// The bill is negative.
    #[error("invalid bill")]
    #[serde(rename = "INVALID_BILL")]
    InvalidBill,
}

impl ChangeError {
    /// Stable machine-readable code, identical to the serialized tag.
    pub const fn code(&self) -> &'static str {
        match self {
            ChangeError::InsufficientAmount => "INSUFFICIENT_AMOUNT",
            ChangeError::InvalidBill => "INVALID_BILL",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_error_messages() {
        assert_eq!(
            AmountError::Negative.to_string(),
            "negative amounts not allowed"
        );
        assert_eq!(
            AmountError::too_large().to_string(),
            "maximum amount is 99999.99"
        );
        assert_eq!(
            AmountError::too_many_decimals().to_string(),
            "at most 2 digits after the decimal point"
        );
    }

    #[test]
    fn test_change_error_messages() {
        assert_eq!(
            ChangeError::InsufficientAmount.to_string(),
            "insufficient amount"
        );
        assert_eq!(ChangeError::InvalidBill.to_string(), "invalid bill");
    }

    #[test]
    fn test_codes_match_serialized_tag() {
        let json = serde_json::to_value(AmountError::too_large()).unwrap();
        assert_eq!(json["code"], AmountError::too_large().code());
        assert_eq!(json["max"], 99999.99);

        let json = serde_json::to_value(ChangeError::InvalidBill).unwrap();
        assert_eq!(json["code"], "INVALID_BILL");
    }
}
