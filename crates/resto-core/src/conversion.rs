//! # Currency Converter
//!
//! BGN ↔ EUR at the fixed official rate, 1 EUR = 1.95583 BGN.
//!
//! Every result is rounded to whole stotinki/cents straight away, so the
//! two directions are not exact inverses: a round trip may drift by one
//! minor unit. That is expected.
//!
//! ```rust
//! use resto_core::conversion::{convert_bgn_to_eur, convert_eur_to_bgn};
//!
//! assert_eq!(convert_eur_to_bgn(1.0), 1.96);
//! assert_eq!(convert_bgn_to_eur(1.95583), 1.0);
//! ```

use crate::currency::Currency;
use crate::money::round_to_minor;

/// Leva per euro.
pub const BGN_PER_EUR: f64 = 1.95583;

/// Euro per lev.
pub const EUR_PER_BGN: f64 = 1.0 / BGN_PER_EUR;

// =============================================================================
// Exchange Rate
// =============================================================================

/// Exchange rate expressed as leva per euro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    /// The irrevocably fixed conversion rate.
    pub const OFFICIAL: ExchangeRate = ExchangeRate(BGN_PER_EUR);

    #[inline]
    pub const fn bgn_per_eur(&self) -> f64 {
        self.0
    }

    /// Leva → euro, rounded to cents. Divides by the rate rather than
    /// multiplying by the reciprocal, so `1.95583 → 1.00` exactly.
    pub fn bgn_to_eur(&self, bgn: f64) -> f64 {
        round_to_minor(bgn / self.0)
    }

    /// Euro → leva, rounded to stotinki.
    pub fn eur_to_bgn(&self, eur: f64) -> f64 {
        round_to_minor(eur * self.0)
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        ExchangeRate::OFFICIAL
    }
}

// =============================================================================
// Conversion Functions
// =============================================================================

/// `round(bgn / 1.95583 * 100) / 100`.
pub fn convert_bgn_to_eur(bgn: f64) -> f64 {
    ExchangeRate::OFFICIAL.bgn_to_eur(bgn)
}

/// `round(eur * 1.95583 * 100) / 100`.
pub fn convert_eur_to_bgn(eur: f64) -> f64 {
    ExchangeRate::OFFICIAL.eur_to_bgn(eur)
}

/// Converts between any two currencies. Same-currency conversion only rounds.
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    match (from, to) {
        (Currency::Bgn, Currency::Eur) => convert_bgn_to_eur(amount),
        (Currency::Eur, Currency::Bgn) => convert_eur_to_bgn(amount),
        _ => round_to_minor(amount),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
