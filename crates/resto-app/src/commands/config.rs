//! # Config Commands
//!
//! Commands for retrieving calculator configuration.

use resto_core::Currency;
use tracing::debug;

use crate::state::ConfigState;

/// Gets the current configuration.
///
/// ## When Used
/// - App startup (opening currency, quick amount buttons)
/// - Deciding whether to draw the breakdown
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Quick amount buttons as labels, e.g. `"20 €"`.
pub fn quick_amount_labels(config: &ConfigState, currency: Currency) -> Vec<String> {
    debug!("quick_amount_labels command: {}", currency);
    config
        .quick_amounts
        .iter()
        .map(|amount| format!("{} {}", amount, currency.symbol()))
        .collect()
}
