//! # Repair Line Calculator
//!
//! Prices a repair made of labor and parts, with tax extraction (or
//! addition) and a discount shared proportionally between both sides.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  labor_cost ──► split ──► labor_subtotal, labor_tax ─┐                  │
//! │  parts_cost ──► split ──► parts_subtotal, parts_tax ─┤                  │
//! │                 (extract if inclusive, add if not)   │                  │
//! │                                                      ▼                  │
//! │                          subtotal_before == 0 ? ──► all zeros           │
//! │                                                      │                  │
//! │  discount (against labor_cost + parts_cost, the sticker price)          │
//! │  ratio = discount / (labor_cost + parts_cost)        │                  │
//! │                                                      ▼                  │
//! │  each of the four amounts: x' = max(0, x - x × ratio)  (unrounded)     │
//! │                                                      │                  │
//! │  subtotal = Σ subtotals'   tax = Σ taxes'   total = subtotal + tax      │
//! │  every reported field rounded once, at return                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Order of Operations Matters
//! The ratio is computed once and applied to all four amounts
//! independently. Discounting the subtotal and re-deriving tax from it
//! gives different cents after rounding.

use rust_decimal::Decimal;
use tracing::debug;

use crate::line_item::resolve_discount;
use crate::money::Money;
use crate::tax::split_price;
use crate::types::{
    CartRepairItem, RepairCalculationInput, RepairCalculationResult, RepairPart,
    RepairTaxBreakdown, TaxRate,
};

/// Prices a repair.
///
/// ## Example
/// ```rust
/// use servipos_core::money::Money;
/// use servipos_core::repair::calculate_repair_total;
/// use servipos_core::types::{RepairCalculationInput, TaxRate};
///
/// let input = RepairCalculationInput::new(Money::from_major(110_000), Money::from_major(220_000))
///     .with_tax_rate(TaxRate::from_bps(1000))
///     .with_discount_percentage(1000);
///
/// let result = calculate_repair_total(&input);
/// assert_eq!(result.discount_amount, Money::from_major(33_000));
/// assert_eq!(result.subtotal, Money::from_major(270_000));
/// assert_eq!(result.tax_amount, Money::from_major(27_000));
/// assert_eq!(result.total, Money::from_major(297_000));
/// ```
pub fn calculate_repair_total(input: &RepairCalculationInput) -> RepairCalculationResult {
    let rate = input.tax_rate.unwrap_or_default();
    let include_tax = input.prices_include_tax();

    let labor = split_price(input.labor_cost, rate, include_tax);
    let parts = split_price(input.parts_cost, rate, include_tax);

    if (labor.subtotal + parts.subtotal).is_zero() {
        debug!(
            labor_cost = input.labor_cost.cents(),
            parts_cost = input.parts_cost.cents(),
            "Zero-cost repair, discount ignored"
        );
        return RepairCalculationResult::default();
    }

    let original_total = input.original_total();
    let discount = resolve_discount(
        original_total,
        input.discount_percentage_bps,
        input.discount_amount,
    );
    let ratio = discount_ratio(discount, original_total);

    let labor_subtotal = apply_ratio(labor.subtotal, ratio);
    let parts_subtotal = apply_ratio(parts.subtotal, ratio);
    let labor_tax = apply_ratio(labor.tax_amount, ratio);
    let parts_tax = apply_ratio(parts.tax_amount, ratio);

    let subtotal = labor_subtotal + parts_subtotal;
    let tax = labor_tax + parts_tax;

    let result = RepairCalculationResult {
        labor_cost: input.labor_cost,
        parts_cost: input.parts_cost,
        subtotal: Money::from_decimal(subtotal),
        tax_amount: Money::from_decimal(tax),
        discount_amount: discount,
        total: Money::from_decimal(subtotal + tax),
        breakdown: RepairTaxBreakdown {
            labor_tax: Money::from_decimal(labor_tax),
            parts_tax: Money::from_decimal(parts_tax),
            labor_subtotal: Money::from_decimal(labor_subtotal),
            parts_subtotal: Money::from_decimal(parts_subtotal),
        },
    };

    debug!(
        labor_cost = input.labor_cost.cents(),
        parts_cost = input.parts_cost.cents(),
        rate_bps = rate.bps(),
        include_tax,
        discount = discount.cents(),
        total = result.total.cents(),
        "Repair priced"
    );

    result
}

/// Share of the sticker price taken off by the discount.
///
/// Zero when there is no sticker price to measure against.
fn discount_ratio(discount: Money, original_total: Money) -> Decimal {
    if original_total.is_zero() {
        return Decimal::ZERO;
    }
    discount.to_decimal() / original_total.to_decimal()
}

/// `max(0, x - x × ratio)`, left unrounded.
fn apply_ratio(amount: Money, ratio: Decimal) -> Decimal {
    let amount = amount.to_decimal();
    (amount - amount * ratio).max(Decimal::ZERO)
}

/// Total cost of the parts used on a repair: `Σ cost × quantity`.
pub fn parts_cost(parts: &[RepairPart]) -> Money {
    parts.iter().map(RepairPart::line_cost).sum()
}

/// Materializes a repair into a cart line.
///
/// The parts cost is summed from `parts`, then the repair is priced
/// with [`calculate_repair_total`]. `prices_include_tax` defaults to
/// `true`. The returned item is a frozen snapshot.
///
/// ## Example
/// ```rust
/// use servipos_core::money::Money;
/// use servipos_core::repair::create_repair_cart_item;
/// use servipos_core::types::{RepairPart, TaxRate};
///
/// let parts = [RepairPart::new(Money::from_major(110_000), 2)];
/// let item = create_repair_cart_item(
///     "9b2f6c1e-4f0a-4d8e-9c59-1f1b0c6f7a10",
///     Money::from_major(110_000),
///     &parts,
///     TaxRate::from_bps(1000),
///     None,
///     None,
///     None,
/// );
/// assert_eq!(item.parts_cost, Money::from_major(220_000));
/// assert_eq!(item.total, Money::from_major(330_000));
/// ```
pub fn create_repair_cart_item(
    repair_id: impl Into<String>,
    labor_cost: Money,
    parts: &[RepairPart],
    tax_rate: TaxRate,
    discount_percentage_bps: Option<u32>,
    discount_amount: Option<Money>,
    prices_include_tax: Option<bool>,
) -> CartRepairItem {
    let input = RepairCalculationInput {
        labor_cost,
        parts_cost: parts_cost(parts),
        tax_rate: Some(tax_rate),
        discount_percentage_bps,
        discount_amount,
        prices_include_tax,
    };
    let result = calculate_repair_total(&input);

    CartRepairItem {
        repair_id: repair_id.into(),
        labor_cost: input.labor_cost,
        parts_cost: input.parts_cost,
        tax_rate,
        prices_include_tax: input.prices_include_tax(),
        discount_amount: result.discount_amount,
        subtotal: result.subtotal,
        tax_amount: result.tax_amount,
        total: result.total,
    }
}
