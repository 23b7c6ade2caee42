//! # Calculator Commands
//!
//! Commands behind the calculator screen. Every mutating command answers
//! with a fresh [`ChangeResponse`], so the screen redraws from one value.
//!
//! ## Screen Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator Lifecycle                                 │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │  │  Empty   │────►│   Bill   │────►│ Received │────►│  Change  │        │
//! │  │          │     │  typed   │     │  typed   │     │  shown   │        │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘        │
//! │                        │                 │                │             │
//! │                   enter_amount      enter_amount     get_change         │
//! │                   apply_quick_amount                 switch_currency    │
//! │                        │                                  │             │
//! │                        ▼                                  ▼             │
//! │                   clear ◄──────────────────────────── swap_currency     │
//! │                   (back to empty)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use resto_core::format::format_amount_with_currency;
use resto_core::validation::validate_parsed_amount;
use resto_core::{
    calculate_split_change, get_denomination_breakdown, validate_amount, ChangeResult, Currency,
    DenominationLine, SplitPayment, ValidationResult,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{AmountField, Calculator, CalculatorState, ConfigState};

/// Everything the change card needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeResponse {
    /// Currency the fields are typed in
    pub currency: Currency,

    pub received_text: String,
    pub bill_text: String,

    /// Change in leva
    pub bgn: f64,

    /// Change in euro
    pub eur: f64,

    pub is_valid: bool,

    /// Rejected input first, then the change error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    /// e.g. `"12.55 лв"`
    pub formatted_bgn: String,

    /// e.g. `"6.42 €"`
    pub formatted_eur: String,

    /// Either field holds something; the card stays hidden otherwise
    pub has_content: bool,

    /// Banknotes and coins in the typing currency, largest first
    pub breakdown: Vec<DenominationLine>,
}

impl ChangeResponse {
    /// Builds the response for the current session.
    pub fn from_session(calculator: &Calculator, config: &ConfigState) -> Self {
        let mut response = ChangeResponse::from_change(
            calculator.change(),
            calculator.primary_currency,
            config,
        );
        response.received_text = calculator.received_text.clone();
        response.bill_text = calculator.bill_text.clone();
        response.has_content = calculator.has_content();
        if let Some(err) = calculator.last_error {
            response.error = Some(err.into());
        }
        response
    }

    /// Builds the response for a bare change result.
    ///
    /// The breakdown is only filled for a positive change, and only when
    /// the configuration asks for it.
    pub fn from_change(change: ChangeResult, currency: Currency, config: &ConfigState) -> Self {
        let breakdown = if config.show_breakdown && change.has_change() {
            get_denomination_breakdown(change.amount_in(currency), currency)
        } else {
            Vec::new()
        };

        ChangeResponse {
            currency,
            received_text: String::new(),
            bill_text: String::new(),
            bgn: change.bgn,
            eur: change.eur,
            is_valid: change.is_valid,
            error: change.error.map(ApiError::from),
            formatted_bgn: format_amount_with_currency(change.bgn, Currency::Bgn),
            formatted_eur: format_amount_with_currency(change.eur, Currency::Eur),
            has_content: true,
            breakdown,
        }
    }

    /// The change in the typing currency, with its symbol.
    pub fn formatted_primary(&self) -> &str {
        match self.currency {
            Currency::Bgn => &self.formatted_bgn,
            Currency::Eur => &self.formatted_eur,
        }
    }
}

/// Gets the change for what is currently typed.
pub fn get_change(calculator: &CalculatorState, config: &ConfigState) -> ChangeResponse {
    debug!("get_change command");
    calculator.with_calculator(|calc| ChangeResponse::from_session(calc, config))
}

/// Takes raw keyboard text for one field.
///
/// ## Returns
/// - `Ok(ChangeResponse)` with the updated session
/// - `Err(ApiError)` with `AMOUNT_TOO_LARGE` when the text was rejected;
///   the field keeps its previous text
pub fn enter_amount(
    calculator: &CalculatorState,
    config: &ConfigState,
    field: AmountField,
    text: &str,
) -> Result<ChangeResponse, ApiError> {
    debug!("enter_amount command: field={:?}, text={:?}", field, text);

    calculator.with_calculator_mut(|calc| -> Result<ChangeResponse, ApiError> {
        calc.enter(field, text)?;
        Ok(ChangeResponse::from_session(calc, config))
    })
}

/// Fills one field from a quick amount button.
pub fn apply_quick_amount(
    calculator: &CalculatorState,
    config: &ConfigState,
    field: AmountField,
    amount: f64,
) -> Result<ChangeResponse, ApiError> {
    debug!("apply_quick_amount command: field={:?}, amount={}", field, amount);

    let amount = validate_parsed_amount(amount).into_result()?;
    Ok(calculator.with_calculator_mut(|calc| {
        calc.apply_quick_amount(field, amount);
        ChangeResponse::from_session(calc, config)
    }))
}

/// Switches the typing currency.
pub fn switch_currency(
    calculator: &CalculatorState,
    config: &ConfigState,
    currency: Currency,
) -> ChangeResponse {
    info!("Switching calculator to {}", currency);
    calculator.with_calculator_mut(|calc| {
        calc.switch_currency(currency);
        ChangeResponse::from_session(calc, config)
    })
}

/// Toggles between leva and euro.
pub fn swap_currency(calculator: &CalculatorState, config: &ConfigState) -> ChangeResponse {
    debug!("swap_currency command");
    calculator.with_calculator_mut(|calc| {
        calc.swap_currency();
        ChangeResponse::from_session(calc, config)
    })
}

/// Empties both fields.
pub fn clear(calculator: &CalculatorState, config: &ConfigState) -> ChangeResponse {
    debug!("clear command");
    calculator.with_calculator_mut(|calc| {
        calc.clear();
        ChangeResponse::from_session(calc, config)
    })
}

/// Checks a piece of text without touching the session.
pub fn validate_input(text: &str) -> ValidationResult {
    debug!("validate_input command: text={:?}", text);
    validate_amount(text)
}

/// Change for a payment made partly in leva and partly in euro, against a
/// bill in leva. Does not touch the session.
pub fn get_split_change(
    config: &ConfigState,
    bgn_text: &str,
    eur_text: &str,
    bill_text: &str,
) -> Result<ChangeResponse, ApiError> {
    debug!(
        "get_split_change command: bgn={:?}, eur={:?}, bill={:?}",
        bgn_text, eur_text, bill_text
    );

    let payment = SplitPayment::new(
        validate_amount(bgn_text).into_result()?,
        validate_amount(eur_text).into_result()?,
    );
    let bill = validate_amount(bill_text).into_result()?;

    let mut response =
        ChangeResponse::from_change(calculate_split_change(payment, bill), Currency::Bgn, config);
    response.received_text = resto_core::format_amount(payment.total_bgn());
    response.bill_text = resto_core::format_amount(bill);
    Ok(response)
}
