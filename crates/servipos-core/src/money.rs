//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Summing a cart of 200 repair lines in floats drifts by cents.         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents at the edges, exact Decimal inside         │
//! │    Every reported amount is an i64 count of cents.                     │
//! │    Division (tax extraction, discount ratios) runs on Decimal and      │
//! │    comes back through `rounding::round2` exactly once.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use servipos_core::money::Money;
//!
//! let labor = Money::from_cents(11_000_000);      // 110000.00
//! let parts: Money = "220000".parse().unwrap();   // major units
//!
//! assert_eq!((labor + parts).cents(), 33_000_000);
//! ```

use rust_decimal::prelude::*;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::rounding::{round2, MINOR_UNIT_PLACES};
use crate::types::TaxRate;

/// Minor units per major unit.
const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are representable; the calculators
///   clamp where a negative result makes no sense
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized in major units**: payloads carry `1100.5`, converted to
///   cents exactly at the boundary
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  labor_cost ─┐                                                          │
/// │              ├──► RepairCalculationResult ──► CartRepairItem ─┐         │
/// │  parts_cost ─┘                                                │         │
/// │                                                               ▼         │
/// │  product subtotal ──► CalculationResult ──────────────► MixedCartTotals │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use servipos_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a whole number of major units.
    ///
    /// ## Example
    /// ```rust
    /// use servipos_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(110_000).cents(), 11_000_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * CENTS_PER_UNIT)
    }

    /// Converts an exact decimal amount (in major units) to Money,
    /// applying [`round2`] on the way.
    ///
    /// This is the only place where a calculation result re-enters
    /// integer cents.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use servipos_core::money::Money;
    ///
    /// // 100 / 1.1 = 90.909090... → 90.91
    /// let subtotal = Money::from_decimal(Decimal::from(100) / Decimal::new(11, 1));
    /// assert_eq!(subtotal.cents(), 9091);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Self {
        let cents = round2(amount) * Decimal::from(CENTS_PER_UNIT);
        // Out of range only for amounts far beyond any till; saturate.
        Money(cents.to_i64().unwrap_or(if cents.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        }))
    }

    /// Converts an exact decimal amount (in major units) to Money without
    /// rounding.
    ///
    /// Rejects more than two decimal places and amounts outside the `i64`
    /// range of cents.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use servipos_core::money::Money;
    ///
    /// let price = Money::try_from_decimal("price", Decimal::new(10995, 2)).unwrap();
    /// assert_eq!(price.cents(), 10995);
    /// assert!(Money::try_from_decimal("price", Decimal::new(10995, 3)).is_err());
    /// ```
    pub fn try_from_decimal(field: &str, amount: Decimal) -> Result<Self, ValidationError> {
        if amount.normalize().scale() > MINOR_UNIT_PLACES {
            return Err(ValidationError::TooManyDecimals {
                field: field.to_string(),
                max: MINOR_UNIT_PLACES,
            });
        }

        amount
            .checked_mul(Decimal::from(CENTS_PER_UNIT))
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: field.to_string(),
                min: i64::MIN / CENTS_PER_UNIT,
                max: i64::MAX / CENTS_PER_UNIT,
            })
    }

    /// Returns the exact decimal value in major units.
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, MINOR_UNIT_PLACES)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Clamps negative amounts to zero.
    ///
    /// ## Example
    /// ```rust
    /// use servipos_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-550).clamp_non_negative(), Money::zero());
    /// assert_eq!(Money::from_cents(550).clamp_non_negative().cents(), 550);
    /// ```
    #[inline]
    pub const fn clamp_non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// Calculates tax on this (tax-exclusive) amount.
    ///
    /// `round2(amount × rate)`, half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use servipos_core::money::Money;
    /// use servipos_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(1000); // 10.00
    /// let rate = TaxRate::from_bps(825);   // 8.25%
    ///
    /// // 10.00 × 8.25% = 0.825 → 0.83
    /// assert_eq!(price.calculate_tax(rate).cents(), 83);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money::from_decimal(self.to_decimal() * rate.fraction())
    }

    /// Returns `round2(amount × bps / 10000)`.
    ///
    /// Used to turn a percentage discount into an amount.
    ///
    /// ## Example
    /// ```rust
    /// use servipos_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(10000); // 100.00
    /// assert_eq!(subtotal.percentage(1000).cents(), 1000); // 10% = 10.00
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        Money::from_decimal(self.to_decimal() * bps_fraction(bps))
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use servipos_core::money::Money;
    ///
    /// let unit_cost = Money::from_cents(299);
    /// assert_eq!(unit_cost.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

/// Converts basis points to an exact fraction (1000 → 0.1000).
#[inline]
pub(crate) fn bps_fraction(bps: u32) -> Decimal {
    Decimal::new(i64::from(bps), 4)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount in major units with two decimals, without a currency
/// symbol. The currency symbol belongs to the caller's configuration.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Parses a major-unit decimal string such as `"1099.5"` or `"-5.50"`.
///
/// More than two decimal places is rejected rather than silently rounded.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let amount = Decimal::from_str(trimmed).map_err(|e| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: e.to_string(),
        })?;

        Money::try_from_decimal("amount", amount)
    }
}

/// Written as a major-unit number (`1100.5`), never as cents.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.to_decimal(), serializer)
    }
}

/// Read from a major-unit number; more than two decimals is an error.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Money::try_from_decimal("amount", amount).map_err(de::Error::custom)
    }
}

/// Default money is zero.
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

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
