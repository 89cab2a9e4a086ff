//! # Line Item Calculator
//!
//! Prices one flat-rate line: subtotal → discount → tax → total.
//!
//! ## Pipeline
//! ```text
//! subtotal (tax-exclusive)
//!      │
//!      ▼
//! discount = discount_amount  ─or─  round2(subtotal × pct)  ─or─  0
//!      │
//!      ▼
//! net = max(0, subtotal - discount)
//!      │
//!      ▼
//! tax = round2(net × rate)
//!      │
//!      ▼
//! total = net + tax
//! ```

use tracing::trace;

use crate::money::Money;
use crate::types::{CalculationInput, CalculationResult, ProductLine};

/// Resolves the discount for a line.
///
/// A fixed amount is taken verbatim and wins over a percentage; a
/// percentage is measured against `base`.
pub(crate) fn resolve_discount(
    base: Money,
    percentage_bps: Option<u32>,
    amount: Option<Money>,
) -> Money {
    match (amount, percentage_bps) {
        (Some(amount), _) => amount,
        (None, Some(bps)) => base.percentage(bps),
        (None, None) => Money::zero(),
    }
}

/// Prices one flat-rate line.
///
/// `input.subtotal` is taken as tax-exclusive. The tax rate defaults to
/// zero. A discount larger than the subtotal clamps the taxable amount
/// to zero rather than going negative.
///
/// ## Example
/// ```rust
/// use servipos_core::line_item::calculate_total;
/// use servipos_core::money::Money;
/// use servipos_core::types::{CalculationInput, TaxRate};
///
/// let input = CalculationInput::new(Money::from_major(100))
///     .with_tax_rate(TaxRate::from_bps(1000))
///     .with_discount_percentage(1000);
///
/// let result = calculate_total(&input);
/// assert_eq!(result.discount_amount, Money::from_major(10));
/// assert_eq!(result.tax_amount, Money::from_major(9));
/// assert_eq!(result.total, Money::from_major(99));
/// ```
pub fn calculate_total(input: &CalculationInput) -> CalculationResult {
    let rate = input.tax_rate.unwrap_or_default();
    let discount = resolve_discount(
        input.subtotal,
        input.discount_percentage_bps,
        input.discount_amount,
    );

    let net = (input.subtotal - discount).clamp_non_negative();
    let tax = net.calculate_tax(rate);

    trace!(
        subtotal = input.subtotal.cents(),
        discount = discount.cents(),
        tax = tax.cents(),
        rate_bps = rate.bps(),
        "Line priced"
    );

    CalculationResult {
        subtotal: input.subtotal,
        tax_amount: tax,
        discount_amount: discount,
        total: net + tax,
    }
}

impl ProductLine {
    /// Creates an untaxed, undiscounted product line.
    pub fn new(unit_price: Money, quantity: i64) -> Self {
        ProductLine {
            unit_price,
            quantity,
            tax_rate: None,
            discount_percentage_bps: None,
            discount_amount: None,
        }
    }

    /// `unit_price × quantity`.
    #[inline]
    pub fn line_subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Builds the flat-rate input for this line.
    pub fn to_input(&self) -> CalculationInput {
        CalculationInput {
            subtotal: self.line_subtotal(),
            tax_rate: self.tax_rate,
            discount_percentage_bps: self.discount_percentage_bps,
            discount_amount: self.discount_amount,
        }
    }

    /// Prices the line through [`calculate_total`].
    pub fn calculate(&self) -> CalculationResult {
        calculate_total(&self.to_input())
    }
}
