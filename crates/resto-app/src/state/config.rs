//! # Configuration State
//!
//! Calculator settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RESTO_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use resto_core::{is_amount_valid, Currency};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Env var naming the currency the calculator opens in.
pub const ENV_CURRENCY: &str = "RESTO_CURRENCY";

/// Env var toggling the denomination breakdown.
pub const ENV_SHOW_BREAKDOWN: &str = "RESTO_SHOW_BREAKDOWN";

/// Env var with comma-separated quick amount buttons.
pub const ENV_QUICK_AMOUNTS: &str = "RESTO_QUICK_AMOUNTS";

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency the calculator opens in
    pub default_currency: Currency,

    /// Show the banknote/coin breakdown under the change
    pub show_breakdown: bool,

    /// Values offered as one-tap buttons under each field
    pub quick_amounts: Vec<f64>,
}

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

impl Default for ConfigState {
    /// Leva first, breakdown on, quick amounts 5 / 10 / 20 / 50 / 100.
    fn default() -> Self {
        ConfigState {
            default_currency: Currency::Bgn,
            show_breakdown: true,
            quick_amounts: vec![5.0, 10.0, 20.0, 50.0, 100.0],
        }
    }
}

impl ConfigState {
    /// Reads the `RESTO_*` variables over the defaults.
    ///
    /// ## Errors
    /// `ConfigError::InvalidValue(var)` for the first variable that is set
    /// but cannot be understood.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ConfigState::load`], but a bad variable only logs a warning and
    /// the defaults are used instead.
    pub fn from_env() -> Self {
        Self::load().unwrap_or_else(|err| {
            warn!("{}, falling back to default configuration", err);
            ConfigState::default()
        })
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(value) = lookup(ENV_CURRENCY) {
            config.default_currency = value
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_CURRENCY.to_string()))?;
        }

        if let Some(value) = lookup(ENV_SHOW_BREAKDOWN) {
            config.show_breakdown = parse_flag(&value)
                .ok_or_else(|| ConfigError::InvalidValue(ENV_SHOW_BREAKDOWN.to_string()))?;
        }

        if let Some(value) = lookup(ENV_QUICK_AMOUNTS) {
            config.quick_amounts = parse_quick_amounts(&value)
                .ok_or_else(|| ConfigError::InvalidValue(ENV_QUICK_AMOUNTS.to_string()))?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Every entry must be a positive amount the calculator would accept.
fn parse_quick_amounts(value: &str) -> Option<Vec<f64>> {
    let amounts = value
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;

    let usable = !amounts.is_empty() && amounts.iter().all(|a| *a > 0.0 && is_amount_valid(*a));
    usable.then_some(amounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.default_currency, Currency::Bgn);
        assert!(config.show_breakdown);
        assert_eq!(config.quick_amounts, vec![5.0, 10.0, 20.0, 50.0, 100.0]);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            (ENV_CURRENCY, "eur"),
            (ENV_SHOW_BREAKDOWN, "false"),
            (ENV_QUICK_AMOUNTS, "2, 5.5 ,10"),
        ]))
        .unwrap();

        assert_eq!(config.default_currency, Currency::Eur);
        assert!(!config.show_breakdown);
        assert_eq!(config.quick_amounts, vec![2.0, 5.5, 10.0]);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        assert_eq!(
            ConfigState::from_lookup(lookup(&[(ENV_CURRENCY, "USD")])),
            Err(ConfigError::InvalidValue(ENV_CURRENCY.to_string()))
        );
        assert_eq!(
            ConfigState::from_lookup(lookup(&[(ENV_SHOW_BREAKDOWN, "maybe")])),
            Err(ConfigError::InvalidValue(ENV_SHOW_BREAKDOWN.to_string()))
        );
    }

    #[test]
    fn test_quick_amounts_rejects_bad_lists() {
        assert_eq!(parse_quick_amounts(""), None);
        assert_eq!(parse_quick_amounts("5,,10"), None);
        assert_eq!(parse_quick_amounts("5,-10"), None);
        assert_eq!(parse_quick_amounts("0"), None);
        assert_eq!(parse_quick_amounts("100000"), None);
        assert_eq!(parse_quick_amounts("20"), Some(vec![20.0]));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["defaultCurrency"], "BGN");
        assert_eq!(json["showBreakdown"], true);
        assert_eq!(json["quickAmounts"][0], 5.0);
    }
}
