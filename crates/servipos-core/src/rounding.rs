//! # Rounding Policy
//!
//! The single currency-rounding primitive used by every calculator.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Raw costs (cents) ──► Decimal math (unrounded) ──► round2 ──► Money    │
//! │                                                                         │
//! │  Intermediates stay exact. A value is rounded once, at the moment it    │
//! │  is reported: a breakdown field, a discount, a subtotal, a total.       │
//! │  Sums of rounded parts may differ from a rounded total by one cent.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Midpoints round away from zero: `0.125 → 0.13`, `-0.125 → -0.13`.

use rust_decimal::prelude::*;

/// Number of minor-unit decimal places (cents).
pub const MINOR_UNIT_PLACES: u32 = 2;

/// Tolerance for comparing a sum of rounded parts with a rounded whole.
pub const ONE_MINOR_UNIT: Decimal = Decimal::from_parts(1, 0, 0, false, MINOR_UNIT_PLACES);

/// Rounds an amount to two decimal places, half away from zero.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use servipos_core::rounding::round2;
///
/// assert_eq!(round2(Decimal::new(10005, 3)), Decimal::new(1001, 2)); // 10.005 → 10.01
/// assert_eq!(round2(Decimal::new(-10005, 3)), Decimal::new(-1001, 2));
/// ```
#[inline]
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MINOR_UNIT_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Float variant of [`round2`] for callers that still hold `f64` amounts.
///
/// `f64::round` already rounds half away from zero, so this is
/// `round(x * 100) / 100`.
#[inline]
pub fn round2_f64(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
