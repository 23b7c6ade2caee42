//! # Denomination Breakdown
//!
//! Which banknotes and coins to hand back for an amount.
//!
//! ## Greedy, Largest First
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_denomination_breakdown(14.36, BGN)                                 │
//! │                                                                         │
//! │  remaining 1436 ─► 100 50 20 ✗   10 ×1 ─► 436                           │
//! │                    5 ✗           2 ×2  ─► 36   (the second 2 finds 0)   │
//! │                    1 0.50 ✗      0.20 ×1 ─► 16                          │
//! │                    0.10 ×1 ─► 6  0.05 ×1 ─► 1  0.02 ✗  0.01 ×1 ─► 0     │
//! │                                                                         │
//! │  10 banknote · 2×2 coin · 0.20 · 0.10 · 0.05 · 0.01                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pass runs in whole minor units, so subtracting a denomination can
//! never leave drift behind. A remainder after the pass is only possible
//! for a table without a one-unit coin. The pass has already tried every
//! coin by then, so the one-coin fallback finds nothing and the remainder
//! is left out of the breakdown.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::{all_denominations_descending, denominations_of, is_banknote, Currency};
use crate::money::Money;

// =============================================================================
// Types
// =============================================================================

/// Physical form of a denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DenominationKind {
    Banknote,
    Coin,
}

/// One line of a breakdown: `count` pieces of `denomination`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DenominationLine {
    pub denomination: f64,
    #[ts(type = "number")]
    pub count: u64,
    #[serde(rename = "type")]
    pub kind: DenominationKind,
}

impl DenominationLine {
    /// `denomination * count`, rounded to minor units.
    pub fn subtotal(&self) -> f64 {
        (Money::from_amount(self.denomination) * self.count as i64).to_amount()
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// Splits `amount` into banknotes and coins of `currency`, largest first.
///
/// Zero, negative and sub-minor-unit amounts (e.g. `0.001`) give an empty
/// breakdown. The line kind comes from [`is_banknote`], so values below 5
/// are always coins.
///
/// ```rust
/// use resto_core::breakdown::{get_denomination_breakdown, total_from_breakdown};
/// use resto_core::Currency;
///
/// let lines = get_denomination_breakdown(14.36, Currency::Bgn);
/// assert_eq!(lines[0].denomination, 10.0);
/// assert_eq!(lines[0].count, 1);
/// assert_eq!(total_from_breakdown(&lines), 14.36);
/// ```
pub fn get_denomination_breakdown(amount: f64, currency: Currency) -> Vec<DenominationLine> {
    greedy_pass(
        Money::from_amount(amount),
        &all_denominations_descending(currency),
        denominations_of(currency).coins,
        currency,
    )
}

/// One largest-first pass over `descending`, then at most one `coins` entry
/// for whatever is left.
fn greedy_pass(
    mut remaining: Money,
    descending: &[Money],
    coins: &[Money],
    currency: Currency,
) -> Vec<DenominationLine> {
    let mut lines = Vec::new();

    if !remaining.is_positive() {
        return lines;
    }

    for &denomination in descending {
        let count = remaining.count_of(denomination);
        if count > 0 {
            lines.push(line(denomination, count, currency));
            remaining -= denomination * count;
        }
    }

    if remaining.is_positive() {
        if let Some(coin) = coins.iter().find(|coin| **coin <= remaining) {
            lines.push(line(*coin, 1, currency));
        }
    }

    lines
}

fn line(denomination: Money, count: i64, currency: Currency) -> DenominationLine {
    let value = denomination.to_amount();
    DenominationLine {
        denomination: value,
        count: count as u64,
        kind: if is_banknote(value, currency) {
            DenominationKind::Banknote
        } else {
            DenominationKind::Coin
        },
    }
}

/// Sum of `denomination * count` over all lines.
pub fn total_from_breakdown(lines: &[DenominationLine]) -> f64 {
    lines
        .iter()
        .fold(Money::zero(), |acc, l| acc + Money::from_amount(l.denomination) * l.count as i64)
        .to_amount()
}

/// True when the greedy pass alone leaves nothing over.
pub fn can_breakdown_exactly(amount: f64, currency: Currency) -> bool {
    let mut remaining = Money::from_amount(amount);
    for denomination in all_denominations_descending(currency) {
        let count = remaining.count_of(denomination);
        if count > 0 {
            remaining -= denomination * count;
        }
    }
    remaining.is_zero()
}

/// Groups loose denomination values into `(value, count)` pairs, largest first.
///
/// ```rust
/// use resto_core::breakdown::group_denominations;
///
/// let grouped = group_denominations(&[0.5, 10.0, 0.5, 2.0, 10.0, 0.5]);
/// assert_eq!(grouped, vec![(10.0, 2), (2.0, 1), (0.5, 3)]);
/// ```
pub fn group_denominations(values: &[f64]) -> Vec<(f64, u64)> {
    let mut minor: Vec<Money> = values.iter().copied().map(Money::from_amount).collect();
    minor.sort_by(|a, b| b.cmp(a));

    let mut grouped: Vec<(Money, u64)> = Vec::new();
    for value in minor {
        match grouped.last_mut() {
            Some((last, count)) if *last == value => *count += 1,
            _ => grouped.push((value, 1)),
        }
    }

    grouped
        .into_iter()
        .map(|(value, count)| (value.to_amount(), count))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
