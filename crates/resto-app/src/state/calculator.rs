//! # Calculator State
//!
//! What the cashier has typed, and in which currency.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>`: several commands read and
//! modify it, and only one may modify it at a time.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator Session Operations                        │
//! │                                                                         │
//! │  UI Action               Command                  Session Change        │
//! │  ─────────               ───────                  ──────────────        │
//! │                                                                         │
//! │  Type in a field ───────► enter_amount() ───────► text + amount (BGN)   │
//! │                                                                         │
//! │  Tap quick amount ──────► apply_quick_amount() ─► "20.00" + amount      │
//! │                                                                         │
//! │  Tap BGN / EUR ─────────► switch_currency() ────► fields re-rendered    │
//! │                                                                         │
//! │  Tap ⇄ ─────────────────► swap_currency() ──────► other currency        │
//! │                                                                         │
//! │  Tap Clear ─────────────► clear() ──────────────► everything empty      │
//! │                                                                         │
//! │  Any of the above ──────► get_change() ─────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Views of Each Amount
//! Every field keeps the text as typed *and* its value in leva. Leva are
//! the common unit, so switching currency re-renders the text from the
//! stored leva instead of converting the text twice, and the change is
//! always computed from the leva values. Field text is never grouped
//! (`"1000.00"`, not `"1,000.00"`) so it can be typed into again.

use std::sync::{Arc, Mutex, PoisonError};

use resto_core::format::format_input_amount;
use resto_core::{
    calculate_change, convert_bgn_to_eur, convert_eur_to_bgn, is_amount_valid,
    parse_currency_string, sanitize_currency_input, AmountError, ChangeResult, Currency,
};
use serde::{Deserialize, Serialize};

/// One of the two amount fields on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountField {
    /// Money handed over by the customer.
    Received,
    /// Amount due.
    Bill,
}

/// The calculator session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculator {
    /// Currency both fields are typed in
    pub primary_currency: Currency,

    /// Sanitized text of the received field
    pub received_text: String,

    /// Sanitized text of the bill field
    pub bill_text: String,

    /// Received amount in leva
    pub received_bgn: f64,

    /// Bill amount in leva
    pub bill_bgn: f64,

    /// Why the most recent input was rejected, until the next accepted one
    pub last_error: Option<AmountError>,
}

impl Calculator {
    /// Creates an empty session typed in `currency`.
    pub fn new(currency: Currency) -> Self {
        Calculator {
            primary_currency: currency,
            ..Default::default()
        }
    }

    /// Text of `field`.
    pub fn text(&self, field: AmountField) -> &str {
        match field {
            AmountField::Received => &self.received_text,
            AmountField::Bill => &self.bill_text,
        }
    }

    /// Value of `field` in leva.
    pub fn amount_bgn(&self, field: AmountField) -> f64 {
        match field {
            AmountField::Received => self.received_bgn,
            AmountField::Bill => self.bill_bgn,
        }
    }

    /// Either field holds something besides whitespace.
    pub fn has_content(&self) -> bool {
        !self.received_text.trim().is_empty() || !self.bill_text.trim().is_empty()
    }

    /// Takes raw keyboard text for `field`.
    ///
    /// ## Steps
    /// 1. Sanitize (`"12,505"` → `"12.50"`)
    /// 2. Parse the sanitized text
    /// 3. Reject anything above the maximum: the field keeps its previous
    ///    text and `last_error` is set
    /// 4. Store the text and the value in leva
    pub fn enter(&mut self, field: AmountField, raw: &str) -> Result<f64, AmountError> {
        let text = sanitize_currency_input(raw);
        let amount = parse_currency_string(&text);

        if !is_amount_valid(amount) {
            self.last_error = Some(AmountError::too_large());
            return Err(AmountError::too_large());
        }

        self.store(field, text, amount);
        Ok(amount)
    }

    /// Shortcut for [`Calculator::enter`] on the received field.
    pub fn enter_received(&mut self, raw: &str) -> Result<f64, AmountError> {
        self.enter(AmountField::Received, raw)
    }

    /// Shortcut for [`Calculator::enter`] on the bill field.
    pub fn enter_bill(&mut self, raw: &str) -> Result<f64, AmountError> {
        self.enter(AmountField::Bill, raw)
    }

    /// Fills `field` from a quick amount button, shown as `"20.00"`.
    pub fn apply_quick_amount(&mut self, field: AmountField, amount: f64) {
        self.store(field, format_input_amount(amount), amount);
    }

    /// Changes the typing currency, re-rendering each filled field.
    ///
    /// Fields are re-rendered from their leva value, so a round trip
    /// BGN → EUR → BGN restores the original figures.
    pub fn switch_currency(&mut self, to: Currency) {
        if to == self.primary_currency {
            return;
        }

        let render = |bgn: f64| match to {
            Currency::Eur => format_input_amount(convert_bgn_to_eur(bgn)),
            Currency::Bgn => format_input_amount(bgn),
        };

        if self.received_bgn > 0.0 {
            self.received_text = render(self.received_bgn);
        }
        if self.bill_bgn > 0.0 {
            self.bill_text = render(self.bill_bgn);
        }

        self.primary_currency = to;
        self.last_error = None;
    }

    /// Switches to the other currency.
    pub fn swap_currency(&mut self) {
        self.switch_currency(self.primary_currency.other());
    }

    /// Empties both fields. The currency stays.
    pub fn clear(&mut self) {
        *self = Calculator::new(self.primary_currency);
    }

    /// Change owed for the current fields, from their leva values.
    ///
    /// A switch to euro and back does not move the result: the re-rendered
    /// text is only for display, the leva stay as entered.
    pub fn change(&self) -> ChangeResult {
        calculate_change(self.received_bgn, self.bill_bgn)
    }

    fn store(&mut self, field: AmountField, text: String, amount: f64) {
        let bgn = match self.primary_currency {
            Currency::Bgn => amount,
            Currency::Eur => convert_eur_to_bgn(amount),
        };

        match field {
            AmountField::Received => {
                self.received_text = text;
                self.received_bgn = bgn;
            }
            AmountField::Bill => {
                self.bill_text = text;
                self.bill_bgn = bgn;
            }
        }
        self.last_error = None;
    }
}

// =============================================================================
// Calculator State (thread-safe wrapper)
// =============================================================================

/// Thread-safe session shared by the command functions.
#[derive(Debug, Clone, Default)]
pub struct CalculatorState {
    calculator: Arc<Mutex<Calculator>>,
}

impl CalculatorState {
    /// Creates an empty session typed in `currency`.
    pub fn new(currency: Currency) -> Self {
        CalculatorState {
            calculator: Arc::new(Mutex::new(Calculator::new(currency))),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust
    /// use resto_app::state::CalculatorState;
    /// use resto_core::Currency;
    ///
    /// let state = CalculatorState::new(Currency::Bgn);
    /// let change = state.with_calculator(|calc| calc.change());
    /// assert!(change.is_valid);
    /// ```
    pub fn with_calculator<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Calculator) -> R,
    {
        // Every mutation leaves the session consistent, so a poisoned lock
        // still holds usable data.
        let calculator = self.calculator.lock().unwrap_or_else(PoisonError::into_inner);
        f(&calculator)
    }

    /// Executes a function with write access to the session.
    pub fn with_calculator_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Calculator) -> R,
    {
        let mut calculator = self.calculator.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut calculator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resto_core::ChangeError;

    #[test]
    fn test_enter_sanitizes_and_stores() {
        let mut calc = Calculator::new(Currency::Bgn);
        assert_eq!(calc.enter_received("12,505"), Ok(12.5));
        assert_eq!(calc.received_text, "12.50");
        assert_eq!(calc.received_bgn, 12.5);
        assert!(calc.has_content());
    }

    #[test]
    fn test_enter_rejects_too_large_and_keeps_text() {
        let mut calc = Calculator::new(Currency::Bgn);
        calc.enter_bill("500").unwrap();

        assert_eq!(calc.enter_bill("100000"), Err(AmountError::too_large()));
        assert_eq!(calc.bill_text, "500");
        assert_eq!(calc.bill_bgn, 500.0);
        assert_eq!(calc.last_error, Some(AmountError::too_large()));

        calc.enter_bill("600").unwrap();
        assert_eq!(calc.last_error, None);
    }

    #[test]
    fn test_euro_input_is_stored_in_leva() {
        let mut calc = Calculator::new(Currency::Eur);
        calc.enter_received("10").unwrap();
        assert_eq!(calc.received_text, "10");
        assert_eq!(calc.received_bgn, 19.56);
    }

    #[test]
    fn test_quick_amount_is_formatted() {
        let mut calc = Calculator::new(Currency::Bgn);
        calc.apply_quick_amount(AmountField::Received, 20.0);
        assert_eq!(calc.received_text, "20.00");
        assert_eq!(calc.received_bgn, 20.0);
    }

    #[test]
    fn test_change_in_leva() {
        let mut calc = Calculator::new(Currency::Bgn);
        calc.enter_received("50").unwrap();
        calc.enter_bill("37.45").unwrap();

        let change = calc.change();
        assert!(change.is_valid);
        assert_eq!(change.bgn, 12.55);
        assert_eq!(change.eur, 6.42);
    }

    #[test]
    fn test_change_in_euro() {
        let mut calc = Calculator::new(Currency::Eur);
        calc.enter_received("20").unwrap();
        calc.enter_bill("15.30").unwrap();

        let change = calc.change();
        assert_eq!(change.bgn, 9.2);
        assert_eq!(change.eur, 4.7);
    }

    #[test]
    fn test_large_euro_quick_amount() {
        let mut calc = Calculator::new(Currency::Eur);
        calc.enter_bill("900").unwrap();
        calc.apply_quick_amount(AmountField::Received, 1000.0);

        assert_eq!(calc.received_text, "1000.00");
        assert_eq!(calc.received_bgn, 1955.83);

        let change = calc.change();
        assert!(change.is_valid);
        assert_eq!(change.bgn, 195.58);
        assert_eq!(change.eur, 100.0);
    }

    #[test]
    fn test_switch_to_euro_keeps_large_change() {
        let mut calc = Calculator::new(Currency::Bgn);
        calc.enter_received("3000").unwrap();
        calc.enter_bill("2500").unwrap();
        assert_eq!(calc.change().bgn, 500.0);

        calc.switch_currency(Currency::Eur);
        assert_eq!(calc.received_text, "1533.88");
        assert_eq!(calc.bill_text, "1278.23");

        let change = calc.change();
        assert!(change.is_valid);
        assert_eq!(change.bgn, 500.0);
        assert_eq!(change.eur, 255.65);

        // The re-rendered text can be typed into and still parses whole
        calc.enter_bill(&format!("{}0", calc.bill_text)).unwrap();
        assert_eq!(calc.bill_text, "1278.23");
        assert_eq!(calc.bill_bgn, 2500.0);
    }

    #[test]
    fn test_switch_currency_rerenders_filled_fields() {
        let mut calc = Calculator::new(Currency::Bgn);
        calc.enter_received("100").unwrap();

        calc.switch_currency(Currency::Eur);
        assert_eq!(calc.primary_currency, Currency::Eur);
        assert_eq!(calc.received_text, "51.13");
        assert_eq!(calc.bill_text, "");
        assert_eq!(calc.received_bgn, 100.0);

        calc.switch_currency(Currency::Bgn);
        assert_eq!(calc.received_text, "100.00");
    }

    #[test]
    fn test_switch_to_same_currency_is_noop() {
        let mut calc = Calculator::new(Currency::Bgn);
        calc.enter_received("7").unwrap();
        calc.switch_currency(Currency::Bgn);
        assert_eq!(calc.received_text, "7");
    }

    #[test]
    fn test_swap_and_clear() {
        let mut calc = Calculator::new(Currency::Bgn);
        calc.enter_received("10").unwrap();
        calc.swap_currency();
        assert_eq!(calc.primary_currency, Currency::Eur);

        calc.clear();
        assert_eq!(calc, Calculator::new(Currency::Eur));
        assert!(!calc.has_content());
    }

    #[test]
    fn test_insufficient_amount() {
        let mut calc = Calculator::new(Currency::Bgn);
        calc.enter_received("20").unwrap();
        calc.enter_bill("30").unwrap();
        assert_eq!(calc.change().error, Some(ChangeError::InsufficientAmount));
    }

    #[test]
    fn test_state_wrapper() {
        let state = CalculatorState::new(Currency::Bgn);
        state.with_calculator_mut(|calc| calc.enter_received("5")).unwrap();

        let shared = state.clone();
        assert_eq!(shared.with_calculator(|calc| calc.received_bgn), 5.0);
    }
}
