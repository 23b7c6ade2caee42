//! # API Error Types
//!
//! Errors returned by command functions, shaped for the UI.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow to the UI                                 │
//! │                                                                         │
//! │  resto-core              resto-app                   UI                 │
//! │  ──────────              ─────────                   ──                 │
//! │                                                                         │
//! │  AmountError ─────┐                                                     │
//! │  ChangeError ─────┼────► ApiError { code, message } ──► t(code) text    │
//! │  UnknownCurrency ─┤                                                     │
//! │  ConfigError ─────┘                                                     │
//! │                                                                         │
//! │  Serialized as:  { "code": "AMOUNT_TOO_LARGE",                          │
//! │                    "message": "maximum amount is 99999.99" }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use resto_core::currency::UnknownCurrency;
use resto_core::{AmountError, ChangeError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::ConfigError;

/// Error returned to the UI.
///
/// The `code` is what the screen translates; `message` is an English
/// fallback for logs and the command line.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// The amount and change codes are identical to the tags of the core
/// error enums, so the UI keeps a single translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Amount below zero
    NegativeAmount,

    /// Amount above the maximum
    AmountTooLarge,

    /// More than two fractional digits
    TooManyDecimals,

    /// Received less than the bill
    InsufficientAmount,

    /// Bill below zero
    InvalidBill,

    /// Unknown currency code, malformed argument
    InvalidInput,

    /// Bad environment configuration
    ConfigError,
}

impl ErrorCode {
    /// The serialized form, e.g. `"AMOUNT_TOO_LARGE"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NegativeAmount => "NEGATIVE_AMOUNT",
            ErrorCode::AmountTooLarge => "AMOUNT_TOO_LARGE",
            ErrorCode::TooManyDecimals => "TOO_MANY_DECIMALS",
            ErrorCode::InsufficientAmount => "INSUFFICIENT_AMOUNT",
            ErrorCode::InvalidBill => "INVALID_BILL",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidInput, message)
    }
}

impl From<AmountError> for ApiError {
    fn from(err: AmountError) -> Self {
        let code = match err {
            AmountError::Negative => ErrorCode::NegativeAmount,
            AmountError::TooLarge { .. } => ErrorCode::AmountTooLarge,
            AmountError::TooManyDecimals { .. } => ErrorCode::TooManyDecimals,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<ChangeError> for ApiError {
    fn from(err: ChangeError) -> Self {
        let code = match err {
            ChangeError::InsufficientAmount => ErrorCode::InsufficientAmount,
            ChangeError::InvalidBill => ErrorCode::InvalidBill,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<UnknownCurrency> for ApiError {
    fn from(err: UnknownCurrency) -> Self {
        ApiError::invalid_input(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::warn!("Configuration rejected: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_core_tags() {
        let errors: [(ApiError, &str); 5] = [
            (AmountError::Negative.into(), AmountError::Negative.code()),
            (AmountError::too_large().into(), AmountError::too_large().code()),
            (
                AmountError::too_many_decimals().into(),
                AmountError::too_many_decimals().code(),
            ),
            (
                ChangeError::InsufficientAmount.into(),
                ChangeError::InsufficientAmount.code(),
            ),
            (ChangeError::InvalidBill.into(), ChangeError::InvalidBill.code()),
        ];

        for (api, core_code) in errors {
            assert_eq!(api.code.as_str(), core_code);
        }
    }

    #[test]
    fn test_message_comes_from_display() {
        let err = ApiError::from(AmountError::too_large());
        assert_eq!(err.message, "maximum amount is 99999.99");
        assert_eq!(err.to_string(), "maximum amount is 99999.99");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::from(ChangeError::InsufficientAmount);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INSUFFICIENT_AMOUNT");
        assert_eq!(json["message"], "insufficient amount");
    }

    #[test]
    fn test_config_error_conversion() {
        let err = ApiError::from(ConfigError::InvalidValue("RESTO_CURRENCY".to_string()));
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.contains("RESTO_CURRENCY"));
    }
}
