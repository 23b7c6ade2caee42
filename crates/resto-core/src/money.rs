//! # Money Module
//!
//! Provides the `Money` type for minor-unit arithmetic and the rounding
//! helpers every float-facing function goes through.
//!
//! ## Two Representations, One Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The UI hands us numbers like 14.36 (really 14.359999999999999431)      │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  OUR SOLUTION                                                           │
//! │    • Float API: round to the minor unit after EVERY operation           │
//! │      (round_to_minor)                                                   │
//! │    • Denominations and breakdowns: integer minor units (Money)          │
//! │      1436 stotinki - 1000 stotinki = 436 stotinki, exactly              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use resto_core::money::{Money, round_to_minor};
//!
//! let note = Money::from_minor(1000);          // 10.00
//! let paid = Money::from_amount(14.36);        // 1436 minor units
//! assert_eq!((paid - note).minor(), 436);
//!
//! assert_eq!(round_to_minor(0.1 + 0.2), 0.3);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Minor units in one major unit (stotinki per lev, cents per euro).
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds to the nearest integer with ties going toward +∞.
///
/// This is JavaScript's `Math.round`: `2.5 → 3`, `-2.5 → -2`. For the
/// non-negative amounts the calculator deals in, it coincides with
/// round-half-away-from-zero. `f64::round` would send `-2.5` to `-3`.
///
/// ```rust
/// use resto_core::money::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// assert_eq!(round_half_up(2.4999), 2.0);
/// ```
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds an amount to whole minor units: `round_half_up(x * 100) / 100`.
///
/// The `.xx5` boundary is decided on the binary value of `x * 100`, so
/// `0.125` (exact in binary) rounds to `0.13` while `1.005`
/// (`100.49999…` after scaling) rounds to `1.0`.
pub fn round_to_minor(value: f64) -> f64 {
    round_half_up(value * MINOR_PER_MAJOR as f64) / MINOR_PER_MAJOR as f64
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value counted in minor units (stotinki for BGN, cents for EUR).
///
/// ## Design Decisions
/// - **i64 (signed)**: change can legitimately be negative (see
///   [`calculate_change`](crate::change::calculate_change))
/// - **No currency tag**: the same number of minor units means the same
///   thing for lev and euro; the caller knows which one it holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use resto_core::money::Money;
    ///
    /// let fifty_stotinki = Money::from_minor(50);
    /// assert_eq!(fifty_stotinki.to_amount(), 0.5);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Converts a float amount to minor units, rounding half up.
    ///
    /// `NaN` becomes zero and infinities saturate, mirroring the `as` cast.
    ///
    /// ```rust
    /// use resto_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(14.36).minor(), 1436);
    /// assert_eq!(Money::from_amount(0.001).minor(), 0);
    /// assert_eq!(Money::from_amount(f64::NAN).minor(), 0);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        Money(round_half_up(amount * MINOR_PER_MAJOR as f64) as i64)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns the value as a float amount with two implied decimals.
    #[inline]
    pub fn to_amount(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// How many whole `unit`s fit into this value. Zero for non-positive units.
    ///
    /// ```rust
    /// use resto_core::money::Money;
    ///
    /// let remaining = Money::from_minor(436);
    /// assert_eq!(remaining.count_of(Money::from_minor(200)), 2);
    /// ```
    #[inline]
    pub const fn count_of(&self, unit: Money) -> i64 {
        if unit.0 <= 0 {
            0
        } else {
            self.0 / unit.0
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering without grouping or symbol ("-5.50").
///
/// UI text goes through [`format_amount`](crate::format::format_amount).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a count (notes of one denomination).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_from_amount_rounds_half_up() {
        assert_eq!(Money::from_amount(14.36).minor(), 1436);
        assert_eq!(Money::from_amount(0.125).minor(), 13);
        assert_eq!(Money::from_amount(99999.99).minor(), 9_999_999);
        assert_eq!(Money::from_amount(-0.125).minor(), -12);
    }

    #[test]
    fn test_from_amount_non_finite() {
        assert_eq!(Money::from_amount(f64::NAN), Money::zero());
        assert_eq!(Money::from_amount(f64::INFINITY).minor(), i64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1099).to_string(), "10.99");
        assert_eq!(Money::from_minor(500).to_string(), "5.00");
        assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
        assert_eq!(Money::from_minor(0).to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((a * 3).minor(), 3000);

        let mut c = a;
        c -= b;
        c += Money::from_minor(1);
        assert_eq!(c.minor(), 501);
    }

    #[test]
    fn test_count_of() {
        let remaining = Money::from_minor(1436);
        assert_eq!(remaining.count_of(Money::from_minor(1000)), 1);
        assert_eq!(remaining.count_of(Money::from_minor(5000)), 0);
        assert_eq!(remaining.count_of(Money::zero()), 0);
    }

    #[test]
    fn test_round_half_up_matches_math_round() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
    }

    /// The `.xx5` boundary is decided on the binary value after scaling.
    #[test]
    fn test_round_to_minor_boundary() {
        assert_eq!(round_to_minor(0.125), 0.13);
        assert_eq!(round_to_minor(0.375), 0.38);
        assert_eq!(round_to_minor(-0.125), -0.12);
        // 1.005 * 100 == 100.49999999999999
        assert_eq!(round_to_minor(1.005), 1.0);
        assert_eq!(round_to_minor(0.1 + 0.2), 0.3);
    }
}
