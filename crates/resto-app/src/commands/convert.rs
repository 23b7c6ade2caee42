//! # Conversion Commands
//!
//! One-off conversions for the converter sheet, outside the session.

use resto_core::conversion::convert;
use resto_core::format::format_amount_with_currency;
use resto_core::validation::validate_parsed_amount;
use resto_core::Currency;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

/// Result of converting one amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,

    /// Rounded to minor units
    pub converted: f64,

    /// e.g. `"51.13 €"`
    pub formatted: String,
}

/// Converts `amount` from one currency to the other.
///
/// ## Errors
/// `NEGATIVE_AMOUNT` or `AMOUNT_TOO_LARGE` when the amount is outside what
/// the calculator accepts.
pub fn convert_amount(
    amount: f64,
    from: Currency,
    to: Currency,
) -> Result<ConversionResponse, ApiError> {
    debug!("convert_amount command: {} {} -> {}", amount, from, to);

    let amount = validate_parsed_amount(amount).into_result()?;
    let converted = convert(amount, from, to);

    Ok(ConversionResponse {
        amount,
        from,
        to,
        converted,
        formatted: format_amount_with_currency(converted, to),
    })
}
