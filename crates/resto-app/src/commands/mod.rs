//! # Commands Module
//!
//! All commands the calculator UI (and the `resto` binary) call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── calculator.rs  ◄─── Typing, quick amounts, currency, change
//! ├── convert.rs     ◄─── One-off conversions
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Read-only
//! fn get_config(config: &ConfigState)
//!
//! // Session plus config (breakdown toggle)
//! fn get_change(calculator: &CalculatorState, config: &ConfigState)
//!
//! // Stateless
//! fn convert_amount(amount: f64, from: Currency, to: Currency)
//! ```

mod calculator;
mod config;
mod convert;

pub use calculator::{
    apply_quick_amount, clear, enter_amount, get_change, get_split_change, swap_currency,
    switch_currency, validate_input, ChangeResponse,
};
pub use config::{get_config, quick_amount_labels};
pub use convert::{convert_amount, ConversionResponse};
