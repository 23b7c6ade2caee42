//! # State Module
//!
//! Session and configuration state for the calculator.
//!
//! ## Why Separate State Types?
//! Commands declare exactly what they need: a read-only [`ConfigState`],
//! the mutable [`CalculatorState`], or both.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         State Types                                     │
//! │                                                                         │
//! │  ┌──────────────────────────────┐      ┌──────────────────────────┐     │
//! │  │  CalculatorState             │      │  ConfigState             │     │
//! │  │  Arc<Mutex<Calculator>>      │      │  read-only after startup │     │
//! │  │  texts, leva amounts,        │      │  (RESTO_* variables)     │     │
//! │  │  currency, last error        │      │                          │     │
//! │  └──────────────────────────────┘      └──────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;

pub use calculator::{AmountField, Calculator, CalculatorState};
pub use config::{ConfigError, ConfigState, ENV_CURRENCY, ENV_QUICK_AMOUNTS, ENV_SHOW_BREAKDOWN};
