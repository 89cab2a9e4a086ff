//! # Strict Calculation Wrappers
//!
//! Same calculations as [`crate::line_item`], [`crate::repair`] and
//! [`crate::cart`], but inputs outside the documented domain are
//! rejected with [`CoreError::InvalidArgument`] before any arithmetic
//! runs, and amounts whose totals would not fit in cents are rejected
//! with [`CoreError::AmountOverflow`]. The wrapped functions are called
//! unchanged.
//!
//! ```rust
//! use servipos_core::money::Money;
//! use servipos_core::types::RepairCalculationInput;
//! use servipos_core::{validated, CoreError};
//!
//! let input = RepairCalculationInput::new(Money::from_cents(-1), Money::zero());
//! assert!(matches!(
//!     validated::calculate_repair_total(&input),
//!     Err(CoreError::InvalidArgument(_))
//! ));
//! ```

use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{
    CalculationInput, CalculationResult, CartRepairItem, MixedCartTotals, ProductLine,
    ProductLineTotals, RepairCalculationInput, RepairCalculationResult, RepairPart, TaxRate,
};
use crate::validation::{
    validate_amount, validate_cart_size, validate_discount_percentage, validate_optional_amount,
    validate_quantity, validate_repair_id, validate_tax_rate,
};
use crate::{cart, line_item, repair};

/// Logs the rejection and lifts it into a [`CoreError`].
fn rejected(err: crate::error::ValidationError) -> CoreError {
    warn!(error = %err, "Pricing input rejected");
    CoreError::from(err)
}

fn overflow(field: &str) -> CoreError {
    warn!(field, "Pricing amount overflow");
    CoreError::AmountOverflow {
        field: field.to_string(),
    }
}

/// `total + amount`, or [`CoreError::AmountOverflow`].
fn checked_sum(field: &str, total: Money, amount: Money) -> CoreResult<Money> {
    total.checked_add(amount).ok_or_else(|| overflow(field))
}

/// Tax is at most 100% of the taxed amount, so `amount` plus its tax
/// fits whenever `2 × amount` does.
fn ensure_tax_headroom(field: &str, amount: Money) -> CoreResult<()> {
    checked_sum(field, amount, amount).map(|_| ())
}

/// `labor_cost + parts_cost` with room for tax on top.
fn ensure_repair_headroom(labor_cost: Money, parts_cost: Money) -> CoreResult<()> {
    let sticker = checked_sum("repair total", labor_cost, parts_cost)?;
    ensure_tax_headroom("repair total", sticker)
}

/// Strict [`line_item::calculate_total`].
pub fn calculate_total(input: &CalculationInput) -> CoreResult<CalculationResult> {
    validate_amount("subtotal", input.subtotal).map_err(rejected)?;
    validate_optional_amount("discount_amount", input.discount_amount).map_err(rejected)?;
    validate_discount_percentage(input.discount_percentage_bps).map_err(rejected)?;
    if let Some(rate) = input.tax_rate {
        validate_tax_rate(rate).map_err(rejected)?;
    }
    ensure_tax_headroom("line total", input.subtotal)?;

    Ok(line_item::calculate_total(input))
}

/// Strict [`ProductLine::calculate`].
///
/// `unit_price × quantity` is computed with overflow checks before the
/// line goes through [`calculate_total`].
pub fn calculate_product_line(line: &ProductLine) -> CoreResult<CalculationResult> {
    validate_amount("unit_price", line.unit_price).map_err(rejected)?;
    validate_quantity(line.quantity).map_err(rejected)?;
    let subtotal = line
        .unit_price
        .checked_multiply_quantity(line.quantity)
        .ok_or_else(|| overflow("line subtotal"))?;

    calculate_total(&CalculationInput {
        subtotal,
        tax_rate: line.tax_rate,
        discount_percentage_bps: line.discount_percentage_bps,
        discount_amount: line.discount_amount,
    })
}

/// Strict [`repair::calculate_repair_total`].
pub fn calculate_repair_total(
    input: &RepairCalculationInput,
) -> CoreResult<RepairCalculationResult> {
    validate_amount("labor_cost", input.labor_cost).map_err(rejected)?;
    validate_amount("parts_cost", input.parts_cost).map_err(rejected)?;
    validate_optional_amount("discount_amount", input.discount_amount).map_err(rejected)?;
    validate_discount_percentage(input.discount_percentage_bps).map_err(rejected)?;
    if let Some(rate) = input.tax_rate {
        validate_tax_rate(rate).map_err(rejected)?;
    }
    ensure_repair_headroom(input.labor_cost, input.parts_cost)?;

    Ok(repair::calculate_repair_total(input))
}

/// Strict [`repair::create_repair_cart_item`].
///
/// Additionally requires a UUID repair id, positive part quantities and
/// a parts total that fits in an `i64` of cents.
/// Labor plus parts must also leave room for tax on top.
pub fn create_repair_cart_item(
    repair_id: &str,
    labor_cost: Money,
    parts: &[RepairPart],
    tax_rate: TaxRate,
    discount_percentage_bps: Option<u32>,
    discount_amount: Option<Money>,
    prices_include_tax: Option<bool>,
) -> CoreResult<CartRepairItem> {
    validate_repair_id(repair_id).map_err(rejected)?;
    validate_amount("labor_cost", labor_cost).map_err(rejected)?;
    validate_tax_rate(tax_rate).map_err(rejected)?;
    validate_discount_percentage(discount_percentage_bps).map_err(rejected)?;
    validate_optional_amount("discount_amount", discount_amount).map_err(rejected)?;

    let mut parts_cost = Money::zero();
    for part in parts {
        validate_amount("part cost", part.cost).map_err(rejected)?;
        validate_quantity(part.quantity).map_err(rejected)?;
        parts_cost = part
            .cost
            .checked_multiply_quantity(part.quantity)
            .and_then(|line| parts_cost.checked_add(line))
            .ok_or_else(|| CoreError::PartsOverflow {
                repair_id: repair_id.to_string(),
            })?;
    }
    labor_cost
        .checked_add(parts_cost)
        .ok_or_else(|| CoreError::PartsOverflow {
            repair_id: repair_id.to_string(),
        })?;
    ensure_repair_headroom(labor_cost, parts_cost)?;

    Ok(repair::create_repair_cart_item(
        repair_id,
        labor_cost,
        parts,
        tax_rate,
        discount_percentage_bps,
        discount_amount,
        prices_include_tax,
    ))
}

/// Strict [`cart::calculate_mixed_cart_total`].
///
/// Rejects carts above the line limit and lines with negative amounts.
/// Running sums, including the labor and parts the breakdown is
/// rederived from, must fit in cents.
pub fn calculate_mixed_cart_total(
    product_lines: &[ProductLineTotals],
    repair_lines: &[CartRepairItem],
) -> CoreResult<MixedCartTotals> {
    validate_cart_size(product_lines.len()).map_err(rejected)?;
    validate_cart_size(repair_lines.len()).map_err(rejected)?;

    let mut subtotal = Money::zero();
    let mut tax = Money::zero();
    let mut repair_cost = Money::zero();

    for line in product_lines {
        validate_amount("product subtotal", line.subtotal).map_err(rejected)?;
        validate_amount("product tax", line.tax_amount).map_err(rejected)?;
        subtotal = checked_sum("cart subtotal", subtotal, line.subtotal)?;
        tax = checked_sum("cart tax", tax, line.tax_amount)?;
    }
    for item in repair_lines {
        validate_amount("labor_cost", item.labor_cost).map_err(rejected)?;
        validate_amount("parts_cost", item.parts_cost).map_err(rejected)?;
        validate_amount("repair subtotal", item.subtotal).map_err(rejected)?;
        validate_amount("repair tax", item.tax_amount).map_err(rejected)?;
        validate_tax_rate(item.tax_rate).map_err(rejected)?;
        subtotal = checked_sum("cart subtotal", subtotal, item.subtotal)?;
        tax = checked_sum("cart tax", tax, item.tax_amount)?;

        let sticker = checked_sum("repair total", item.labor_cost, item.parts_cost)?;
        repair_cost = checked_sum("repair breakdown", repair_cost, sticker)?;
    }
    checked_sum("cart total", subtotal, tax)?;

    Ok(cart::calculate_mixed_cart_total(product_lines, repair_lines))
}
