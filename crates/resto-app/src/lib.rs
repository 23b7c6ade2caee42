//! # Resto App Library
//!
//! Session, configuration and command layer of the change calculator.
//! The screens (or the `resto` binary) call [`commands`]; the numbers come
//! from `resto-core`.
//!
//! ## Module Organization
//! ```text
//! resto_app/
//! ├── lib.rs             ◄─── You are here (tracing setup, exports)
//! ├── main.rs            ◄─── `resto` command-line binary
//! ├── state/
//! │   ├── mod.rs         ◄─── State type exports
//! │   ├── calculator.rs  ◄─── Typed fields, currency, Arc<Mutex> wrapper
//! │   └── config.rs      ◄─── RESTO_* configuration
//! ├── commands/
//! │   ├── mod.rs         ◄─── Command exports
//! │   ├── calculator.rs  ◄─── Typing, currency, change + breakdown
//! │   ├── convert.rs     ◄─── One-off conversions
//! │   └── config.rs      ◄─── Configuration retrieval
//! └── error.rs           ◄─── API error type for commands
//! ```
//!
//! ## Example
//! ```rust
//! use resto_app::commands::{enter_amount, get_change};
//! use resto_app::state::{AmountField, CalculatorState, ConfigState};
//! use resto_core::Currency;
//!
//! let config = ConfigState::default();
//! let calculator = CalculatorState::new(Currency::Bgn);
//!
//! enter_amount(&calculator, &config, AmountField::Bill, "37.45").unwrap();
//! enter_amount(&calculator, &config, AmountField::Received, "50").unwrap();
//!
//! let change = get_change(&calculator, &config);
//! assert_eq!(change.formatted_bgn, "12.55 лв");
//! assert_eq!(change.formatted_eur, "6.42 €");
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ErrorCode};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,resto=debug";

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - Otherwise `info` everywhere, `debug` for the resto crates
///
/// ## Usage
/// ```bash
/// RUST_LOG=resto_app=trace resto 50 37.45
/// ```
///
/// Call once, at startup.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
