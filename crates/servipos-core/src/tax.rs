//! # Tax Extraction
//!
//! Splits a price into pre-tax subtotal and tax, in both directions.
//!
//! ## Inclusive vs. Exclusive
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INCLUSIVE (extract_tax)          │  EXCLUSIVE (add_tax)                │
//! │  ───────────────────────          │  ───────────────────                │
//! │  price 110.00 already has tax     │  price 100.00 has no tax            │
//! │  subtotal = 110.00 / 1.10 = 100   │  subtotal = 100.00                  │
//! │  tax      = 110.00 - 100  = 10    │  tax      = 100.00 × 0.10 = 10      │
//! │                                   │                                     │
//! │  DIVISION, rounded once           │  MULTIPLICATION, rounded once       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In the inclusive direction the tax is the remainder, so
//! `subtotal + tax == price` always holds exactly.

use rust_decimal::Decimal;

use crate::money::Money;
use crate::types::{TaxRate, TaxSplit};

/// Recovers the pre-tax subtotal and the tax from a tax-inclusive price.
///
/// `subtotal = round2(price / (1 + rate))`, `tax = price - subtotal`.
///
/// ## Guarantees
/// - zero price → zero subtotal and zero tax, at any rate
/// - zero rate → subtotal equals the price, tax is zero
///
/// ## Example
/// ```rust
/// use servipos_core::money::Money;
/// use servipos_core::tax::extract_tax;
/// use servipos_core::types::TaxRate;
///
/// let split = extract_tax(Money::from_major(110_000), TaxRate::from_bps(1000));
/// assert_eq!(split.subtotal, Money::from_major(100_000));
/// assert_eq!(split.tax_amount, Money::from_major(10_000));
/// ```
pub fn extract_tax(inclusive_price: Money, rate: TaxRate) -> TaxSplit {
    let divisor = Decimal::ONE + rate.fraction();
    let subtotal = Money::from_decimal(inclusive_price.to_decimal() / divisor);

    TaxSplit {
        subtotal,
        tax_amount: inclusive_price - subtotal,
    }
}

/// Adds tax on top of a tax-exclusive price.
///
/// `subtotal = price`, `tax = round2(price × rate)`.
///
/// ## Example
/// ```rust
/// use servipos_core::money::Money;
/// use servipos_core::tax::add_tax;
/// use servipos_core::types::TaxRate;
///
/// let split = add_tax(Money::from_major(100), TaxRate::from_bps(1000));
/// assert_eq!(split.gross(), Money::from_major(110));
/// ```
pub fn add_tax(exclusive_price: Money, rate: TaxRate) -> TaxSplit {
    TaxSplit {
        subtotal: exclusive_price,
        tax_amount: exclusive_price.calculate_tax(rate),
    }
}

/// Splits a price according to its mode.
#[inline]
pub fn split_price(price: Money, rate: TaxRate, prices_include_tax: bool) -> TaxSplit {
    if prices_include_tax {
        extract_tax(price, rate)
    } else {
        add_tax(price, rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN_PERCENT: TaxRate = TaxRate::from_bps(1000);

    #[test]
    fn test_extract_round_numbers() {
        let split = extract_tax(Money::from_major(220_000), TEN_PERCENT);
        assert_eq!(split.subtotal, Money::from_major(200_000));
        assert_eq!(split.tax_amount, Money::from_major(20_000));
    }

    #[test]
    fn test_extract_zero_price_any_rate() {
        for bps in [0, 1000, 1600, 10_000] {
            let split = extract_tax(Money::zero(), TaxRate::from_bps(bps));
            assert_eq!(split, TaxSplit::default());
        }
    }

    #[test]
    fn test_extract_zero_rate_is_identity() {
        let price = Money::from_cents(12_345);
        let split = extract_tax(price, TaxRate::zero());
        assert_eq!(split.subtotal, price);
        assert!(split.tax_amount.is_zero());
    }

    #[test]
    fn test_extract_rounds_subtotal_then_takes_remainder() {
        // 100.00 / 1.1 = 90.9090... → 90.91, tax 9.09
        let split = extract_tax(Money::from_major(100), TEN_PERCENT);
        assert_eq!(split.subtotal.cents(), 9091);
        assert_eq!(split.tax_amount.cents(), 909);
        assert_eq!(split.gross(), Money::from_major(100));
    }

    #[test]
    fn test_extract_one_cent() {
        // 0.01 / 1.21 = 0.00826 → 0.01, tax 0.00
        let split = extract_tax(Money::from_cents(1), TaxRate::from_bps(2100));
        assert_eq!(split.subtotal.cents(), 1);
        assert!(split.tax_amount.is_zero());
    }

    #[test]
    fn test_extract_fractional_rate() {
        // 10.83 / 1.0825 = 10.0046... → 10.00, tax 0.83
        let split = extract_tax(Money::from_cents(1083), TaxRate::from_bps(825));
        assert_eq!(split.subtotal.cents(), 1000);
        assert_eq!(split.tax_amount.cents(), 83);
    }

    #[test]
    fn test_add_tax() {
        let split = add_tax(Money::from_major(300_000), TEN_PERCENT);
        assert_eq!(split.subtotal, Money::from_major(300_000));
        assert_eq!(split.tax_amount, Money::from_major(30_000));
    }

    #[test]
    fn test_split_price_by_mode() {
        let price = Money::from_major(110);
        assert_eq!(split_price(price, TEN_PERCENT, true).subtotal, Money::from_major(100));
        assert_eq!(split_price(price, TEN_PERCENT, false).subtotal, price);
    }
}
