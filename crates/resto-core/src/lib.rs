//! # resto-core: Pure Currency Logic for the Lev → Euro Transition
//!
//! Everything the change calculator decides numerically lives here, as
//! pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Resto Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │              Mobile UI (React Native, external)                 │    │
//! │  │    Bill field ──► Received field ──► Change card ──► Breakdown  │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ text / numbers                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                resto-app (session, config, commands)            │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ resto-core (THIS CRATE) ★                       │    │
//! │  │                                                                 │    │
//! │  │   input ─► validation ─► conversion/change ─► breakdown         │    │
//! │  │                                   └──────────► format           │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS        │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`currency`] - Currency enum, denomination tables, banknote predicates
//! - [`money`] - Minor-unit `Money` type and rounding helpers
//! - [`input`] - Sanitizing and parsing typed text
//! - [`validation`] - Bound and precision rules for amounts
//! - [`conversion`] - BGN ↔ EUR at 1.95583
//! - [`change`] - Change owed, including split payments
//! - [`breakdown`] - Greedy banknote/coin breakdown
//! - [`format`] - Display strings
//! - [`error`] - Error values carried inside results
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, safe from any thread
//! 2. **Total Functions**: every input yields a result value, never a panic
//! 3. **Round Every Step**: amounts are rounded to minor units after each operation
//!
//! ## Example Usage
//!
//! ```rust
//! use resto_core::{calculate_change, get_denomination_breakdown, format_amount, Currency};
//!
//! let change = calculate_change(100.0, 75.0);
//! assert!(change.is_valid);
//! assert_eq!(format_amount(change.bgn), "25.00");
//! assert_eq!(format_amount(change.eur), "12.78");
//!
//! let notes = get_denomination_breakdown(change.eur, Currency::Eur);
//! assert_eq!(notes[0].denomination, 10.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod change;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod format;
pub mod input;
pub mod money;
pub mod validation;

#[cfg(test)]
mod props;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use breakdown::{get_denomination_breakdown, DenominationKind, DenominationLine};
pub use change::{
    calculate_change, calculate_change_in, calculate_split_change, ChangeResult, SplitPayment,
};
pub use conversion::{convert_bgn_to_eur, convert_eur_to_bgn, ExchangeRate, BGN_PER_EUR};
pub use currency::{Currency, DenominationSet};
pub use error::{AmountError, ChangeError};
pub use format::format_amount;
pub use input::{is_amount_valid, parse_currency_string, sanitize_currency_input};
pub use money::Money;
pub use validation::{validate_amount, ValidationResult};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest amount accepted for a bill or a payment.
pub const MAX_AMOUNT: f64 = 99999.99;

/// Digits allowed after the decimal point (one minor unit).
pub const MAX_FRACTION_DIGITS: usize = 2;

/// Longest sanitized input, decimal point included.
pub const MAX_INPUT_LENGTH: usize = 9;
