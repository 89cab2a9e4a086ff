//! # Cart Aggregator
//!
//! Combines product lines and repair lines into one cart total.
//!
//! ## Aggregation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  product lines ──► Σ subtotal, Σ tax ───────────────┐                   │
//! │                                                     ├──► totals         │
//! │  repair lines  ──► Σ stored subtotal, Σ stored tax ─┘                   │
//! │        │                                                                │
//! │        └──► re-price each (labor, parts, rate, inclusive, no discount)  │
//! │             ──► Σ breakdown ──► repair_tax_breakdown (reporting)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals come from the values frozen on each line. Only the labor/parts
//! breakdown is rederived, because cart items don't carry it.

use tracing::debug;

use crate::money::Money;
use crate::repair::calculate_repair_total;
use crate::types::{
    CartRepairItem, MixedCartTotals, ProductLineTotals, RepairCalculationInput,
    RepairTaxBreakdown,
};

impl CartRepairItem {
    /// Input used to rederive this line's labor/parts breakdown.
    ///
    /// Always tax-inclusive and without discount, whatever mode and
    /// discount the item was created with.
    pub fn breakdown_input(&self) -> RepairCalculationInput {
        RepairCalculationInput::new(self.labor_cost, self.parts_cost)
            .with_tax_rate(self.tax_rate)
            .with_prices_include_tax(true)
    }
}

/// Totals a cart of product lines and repair lines.
///
/// `total = product subtotal + repair subtotal + product tax + repair tax`.
/// An empty cart yields all zeros.
///
/// ## Example
/// ```rust
/// use servipos_core::cart::calculate_mixed_cart_total;
/// use servipos_core::money::Money;
/// use servipos_core::repair::create_repair_cart_item;
/// use servipos_core::types::{ProductLineTotals, RepairPart, TaxRate};
///
/// let products = [ProductLineTotals {
///     subtotal: Money::from_major(150_000),
///     tax_amount: Money::from_major(15_000),
/// }];
/// let repairs = [create_repair_cart_item(
///     "repair-1",
///     Money::from_major(110_000),
///     &[RepairPart::new(Money::from_major(220_000), 1)],
///     TaxRate::from_bps(1000),
///     None,
///     None,
///     None,
/// )];
///
/// let totals = calculate_mixed_cart_total(&products, &repairs);
/// assert_eq!(totals.total, Money::from_major(495_000));
/// ```
pub fn calculate_mixed_cart_total(
    product_lines: &[ProductLineTotals],
    repair_lines: &[CartRepairItem],
) -> MixedCartTotals {
    let product_subtotal: Money = product_lines.iter().map(|line| line.subtotal).sum();
    let product_tax: Money = product_lines.iter().map(|line| line.tax_amount).sum();

    let repair_subtotal: Money = repair_lines.iter().map(|item| item.subtotal).sum();
    let repair_tax: Money = repair_lines.iter().map(|item| item.tax_amount).sum();

    let mut breakdown = RepairTaxBreakdown::default();
    for item in repair_lines {
        breakdown += calculate_repair_total(&item.breakdown_input()).breakdown;
    }

    let totals = MixedCartTotals {
        subtotal: product_subtotal + repair_subtotal,
        total_tax: product_tax + repair_tax,
        total: product_subtotal + repair_subtotal + product_tax + repair_tax,
        repair_tax_breakdown: breakdown,
    };

    debug!(
        product_lines = product_lines.len(),
        repair_lines = repair_lines.len(),
        subtotal = totals.subtotal.cents(),
        total_tax = totals.total_tax.cents(),
        total = totals.total.cents(),
        "Cart totals calculated"
    );

    totals
}
