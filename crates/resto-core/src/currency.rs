//! # Currency Table
//!
//! The two currencies of the transition and their physical denominations.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Denomination Sets                                  │
//! │                                                                         │
//! │  BGN  banknotes: 100  50  20  10   5   2                                │
//! │       coins:       2   1  0.50  0.20  0.10  0.05  0.02  0.01            │
//! │                    ▲                                                    │
//! │                    └── 2 lev exists as a note AND a coin                │
//! │                                                                         │
//! │  EUR  banknotes: 200 100  50  20  10   5                                │
//! │       coins:       2   1  0.50  0.20  0.10  0.05  0.02  0.01            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two "is it a banknote" predicates exist on purpose:
//! [`is_banknote`] looks at magnitude only (what the breakdown displays),
//! [`is_denomination_banknote`] looks at set membership.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Currency
// =============================================================================

/// A currency of the lev → euro transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Currency {
    /// Bulgarian lev.
    #[default]
    Bgn,
    /// Euro.
    Eur,
}

impl Currency {
    /// Both currencies, lev first.
    pub const ALL: [Currency; 2] = [Currency::Bgn, Currency::Eur];

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Bgn => "BGN",
            Currency::Eur => "EUR",
        }
    }

    /// Symbol shown after an amount.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Bgn => "лв",
            Currency::Eur => "€",
        }
    }

    /// The other currency.
    pub const fn other(&self) -> Currency {
        match self {
            Currency::Bgn => Currency::Eur,
            Currency::Eur => Currency::Bgn,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string names neither BGN nor EUR.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

/// Case-insensitive ISO code parsing.
impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BGN" => Ok(Currency::Bgn),
            "EUR" => Ok(Currency::Eur),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

// =============================================================================
// Denomination Tables
// =============================================================================

/// Banknotes and coins of one currency, each list strictly descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenominationSet {
    pub banknotes: &'static [Money],
    pub coins: &'static [Money],
}

/// Coins shared by both currencies: 2, 1, 0.50, 0.20, 0.10, 0.05, 0.02, 0.01.
const COINS: &[Money] = &[
    Money::from_minor(200),
    Money::from_minor(100),
    Money::from_minor(50),
    Money::from_minor(20),
    Money::from_minor(10),
    Money::from_minor(5),
    Money::from_minor(2),
    Money::from_minor(1),
];

/// Lev denominations.
pub const BGN_DENOMINATIONS: DenominationSet = DenominationSet {
    banknotes: &[
        Money::from_minor(10_000),
        Money::from_minor(5_000),
        Money::from_minor(2_000),
        Money::from_minor(1_000),
        Money::from_minor(500),
        Money::from_minor(200),
    ],
    coins: COINS,
};

/// Euro denominations.
pub const EUR_DENOMINATIONS: DenominationSet = DenominationSet {
    banknotes: &[
        Money::from_minor(20_000),
        Money::from_minor(10_000),
        Money::from_minor(5_000),
        Money::from_minor(2_000),
        Money::from_minor(1_000),
        Money::from_minor(500),
    ],
    coins: COINS,
};

/// Anything at or above this value is displayed as a banknote.
pub const BANKNOTE_THRESHOLD: f64 = 5.0;

/// Returns the static denomination set of `currency`.
pub const fn denominations_of(currency: Currency) -> DenominationSet {
    match currency {
        Currency::Bgn => BGN_DENOMINATIONS,
        Currency::Eur => EUR_DENOMINATIONS,
    }
}

/// Banknotes then coins, sorted descending. Duplicates are kept: BGN yields
/// 14 entries with `2.00` listed twice.
pub fn all_denominations_descending(currency: Currency) -> Vec<Money> {
    let set = denominations_of(currency);
    let mut all: Vec<Money> = set.banknotes.iter().chain(set.coins).copied().collect();
    all.sort_by(|a, b| b.cmp(a));
    all
}

/// Banknote values of `currency` as amounts, descending.
pub fn banknotes(currency: Currency) -> Vec<f64> {
    denominations_of(currency)
        .banknotes
        .iter()
        .map(Money::to_amount)
        .collect()
}

/// Coin values of `currency` as amounts, descending.
pub fn coins(currency: Currency) -> Vec<f64> {
    denominations_of(currency)
        .coins
        .iter()
        .map(Money::to_amount)
        .collect()
}

// =============================================================================
// Predicates & Lookups
// =============================================================================

/// Magnitude-based classification: `value >= 5`, whatever the currency.
///
/// This is the predicate the breakdown uses, so the 2-lev note shows up
/// as a coin.
pub fn is_banknote(value: f64, _currency: Currency) -> bool {
    value >= BANKNOTE_THRESHOLD
}

/// Set-membership classification: `value` is in the banknote list of `currency`.
pub fn is_denomination_banknote(value: f64, currency: Currency) -> bool {
    let value = Money::from_amount(value);
    denominations_of(currency).banknotes.contains(&value)
}

/// `value` is some banknote or coin of `currency`.
pub fn is_valid_denomination(value: f64, currency: Currency) -> bool {
    let set = denominations_of(currency);
    let value = Money::from_amount(value);
    set.banknotes.contains(&value) || set.coins.contains(&value)
}

/// Smallest denomination strictly greater than `value`.
pub fn next_higher_denomination(value: f64, currency: Currency) -> Option<f64> {
    let value = Money::from_amount(value);
    all_denominations_descending(currency)
        .into_iter()
        .rev()
        .find(|d| *d > value)
        .map(|d| d.to_amount())
}

/// Largest denomination strictly smaller than `value`.
pub fn next_lower_denomination(value: f64, currency: Currency) -> Option<f64> {
    let value = Money::from_amount(value);
    all_denominations_descending(currency)
        .into_iter()
        .find(|d| *d < value)
        .map(|d| d.to_amount())
}

// =============================================================================
// Unit Tests
// =============================================================================
