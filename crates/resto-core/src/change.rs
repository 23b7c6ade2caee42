//! # Change Calculator
//!
//! The single authoritative answer to "how much change is owed".
//!
//! ## Decision Tree
//! ```text
//! calculate_change(received, bill)        (both already in leva)
//!      │
//!      ├── received == 0 && bill == 0          → valid, 0 / 0
//!      ├── bill > 0 && 0 < received < bill     → INSUFFICIENT_AMOUNT
//!      ├── bill < 0                            → INVALID_BILL
//!      └── change = round2(received - bill)
//!             ├── change == 0                  → valid, 0 / 0
//!             └── otherwise                    → valid, change / to_eur(change)
//! ```
//!
//! ## Known Quirk
//! An empty received field (0) with a positive bill skips the insufficiency
//! guard and yields a *negative*, valid change. Callers show a result only
//! once both fields hold something.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::conversion::{convert_bgn_to_eur, convert_eur_to_bgn};
use crate::currency::Currency;
use crate::error::ChangeError;
use crate::money::round_to_minor;

// =============================================================================
// Change Result
// =============================================================================

/// Change owed, in both currencies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChangeResult {
    pub bgn: f64,
    pub eur: f64,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<ChangeError>,
}

impl ChangeResult {
    /// Valid result with no change.
    pub const fn zero() -> Self {
        ChangeResult {
            bgn: 0.0,
            eur: 0.0,
            is_valid: true,
            error: None,
        }
    }

    const fn valid(bgn: f64, eur: f64) -> Self {
        ChangeResult {
            bgn,
            eur,
            is_valid: true,
            error: None,
        }
    }

    const fn invalid(error: ChangeError) -> Self {
        ChangeResult {
            bgn: 0.0,
            eur: 0.0,
            is_valid: false,
            error: Some(error),
        }
    }

    /// The change expressed in `currency`.
    pub const fn amount_in(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Bgn => self.bgn,
            Currency::Eur => self.eur,
        }
    }

    /// Valid and strictly positive: there is something to hand back.
    pub fn has_change(&self) -> bool {
        self.is_valid && self.bgn > 0.0
    }
}

// =============================================================================
// Calculation
// =============================================================================

/// Computes change for a received/bill pair in leva.
///
/// Never fails outright: problems come back as `is_valid == false` plus an
/// [`ChangeError`].
///
/// ```rust
/// use resto_core::change::calculate_change;
/// use resto_core::ChangeError;
///
/// let change = calculate_change(100.0, 75.0);
/// assert_eq!(change.bgn, 25.0);
/// assert_eq!(change.eur, 12.78);
///
/// let short = calculate_change(50.0, 100.0);
/// assert_eq!(short.error, Some(ChangeError::InsufficientAmount));
/// ```
pub fn calculate_change(received: f64, bill: f64) -> ChangeResult {
    if received == 0.0 && bill == 0.0 {
        return ChangeResult::zero();
    }

    if bill > 0.0 && received > 0.0 && received < bill {
        return ChangeResult::invalid(ChangeError::InsufficientAmount);
    }

    if bill < 0.0 {
        return ChangeResult::invalid(ChangeError::InvalidBill);
    }

    let change_bgn = round_to_minor(received - bill);
    if change_bgn == 0.0 {
        return ChangeResult::zero();
    }

    ChangeResult::valid(change_bgn, convert_bgn_to_eur(change_bgn))
}

/// Change for amounts typed in `currency`. Euro amounts are converted to
/// leva first, each rounded on its own, before the pair is compared.
pub fn calculate_change_in(received: f64, bill: f64, currency: Currency) -> ChangeResult {
    match currency {
        Currency::Bgn => calculate_change(received, bill),
        Currency::Eur => calculate_change(convert_eur_to_bgn(received), convert_eur_to_bgn(bill)),
    }
}

// =============================================================================
// Split Payments
// =============================================================================

/// A payment handed over partly in leva and partly in euro.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SplitPayment {
    pub bgn: f64,
    pub eur: f64,
}

impl SplitPayment {
    pub const fn new(bgn: f64, eur: f64) -> Self {
        SplitPayment { bgn, eur }
    }

    /// Whole payment in leva: `round2(bgn + to_bgn(eur))`.
    pub fn total_bgn(&self) -> f64 {
        round_to_minor(self.bgn + convert_eur_to_bgn(self.eur))
    }
}

/// Change for a split payment against a bill in leva.
pub fn calculate_split_change(payment: SplitPayment, bill_bgn: f64) -> ChangeResult {
    calculate_change(payment.total_bgn(), bill_bgn)
}

// =============================================================================
// Unit Tests
// =============================================================================
