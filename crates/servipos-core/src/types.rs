//! # Domain Types
//!
//! Value objects flowing through the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌───────────────────────┐                      │
//! │  │ CalculationInput │──►│  CalculationResult    │──► ProductLineTotals │
//! │  │  subtotal        │   │  subtotal, taxAmount  │          │           │
//! │  │  taxRate?        │   │  discountAmount,total │          │           │
//! │  └──────────────────┘   └───────────────────────┘          │           │
//! │                                                             ▼           │
//! │  ┌──────────────────┐   ┌───────────────────────┐   ┌────────────────┐ │
//! │  │ RepairCalc.Input │──►│ RepairCalc.Result     │   │MixedCartTotals │ │
//! │  │  laborCost       │   │  + breakdown          │   │ subtotal       │ │
//! │  │  partsCost       │   └───────────────────────┘   │ totalTax,total │ │
//! │  │  pricesIncl.Tax? │              │                │ repairTaxBrkdn │ │
//! │  └──────────────────┘              ▼                └────────────────┘ │
//! │                          ┌───────────────────────┐          ▲           │
//! │                          │   CartRepairItem      │──────────┘           │
//! │                          └───────────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every type here is created fresh per call and never mutated afterwards.
//! Field names serialize in camelCase; these are the request/response
//! payload shapes.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::{bps_fraction, Money};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (a common IVA / VAT rate)
///
/// Unsigned, so a negative rate cannot reach a calculation and
/// `1 + rate` is never zero.
///
/// Payloads carry the percent (`10` for 10%), not basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[ts(export)]
pub struct TaxRate(#[ts(type = "number")] u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (1000 bps → 0.1).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        bps_fraction(self.0)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Shows the rate as a percentage, e.g. `8.25%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

/// Parses a percentage string such as `"10"`, `"8.25"` or `"16%"`.
impl FromStr for TaxRate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_percentage_bps(s, "tax_rate").map(TaxRate)
    }
}

/// Parses a percentage string into basis points.
///
/// Shared by tax rates and discount percentages: at most two decimals,
/// never negative.
pub fn parse_percentage_bps(s: &str, field: &str) -> Result<u32, ValidationError> {
    let trimmed = s.trim().trim_end_matches('%').trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let pct = Decimal::from_str(trimmed).map_err(|e| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: e.to_string(),
    })?;

    percentage_to_bps(pct, field)
}

/// Converts an exact percentage (`8.25`) into basis points (`825`).
///
/// At most two decimals, never negative.
pub fn percentage_to_bps(pct: Decimal, field: &str) -> Result<u32, ValidationError> {
    if pct.is_sign_negative() && !pct.is_zero() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    if pct.normalize().scale() > 2 {
        return Err(ValidationError::TooManyDecimals {
            field: field.to_string(),
            max: 2,
        });
    }

    pct.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|bps| bps.to_u32())
        .ok_or_else(|| ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::from(u32::MAX),
        })
}

/// Writes basis points as a percent number (`825` → `8.25`).
fn serialize_percent<S: Serializer>(bps: u32, serializer: S) -> Result<S::Ok, S::Error> {
    rust_decimal::serde::float::serialize(&Decimal::new(i64::from(bps), 2), serializer)
}

/// Reads a percent number into basis points.
fn deserialize_percent<'de, D: Deserializer<'de>>(
    deserializer: D,
    field: &str,
) -> Result<u32, D::Error> {
    let pct = rust_decimal::serde::float::deserialize(deserializer)?;
    percentage_to_bps(pct, field).map_err(de::Error::custom)
}

impl Serialize for TaxRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_percent(self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for TaxRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_percent(deserializer, "taxRate").map(TaxRate)
    }
}

/// `#[serde(with = ...)]` adapter for an optional discount held in
/// basis points and sent as a percent.
pub mod discount_percentage {
    use super::*;

    struct Percent(u32);

    impl Serialize for Percent {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize_percent(self.0, serializer)
        }
    }

    impl<'de> Deserialize<'de> for Percent {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserialize_percent(deserializer, "discountPercentage").map(Percent)
        }
    }

    pub fn serialize<S: Serializer>(bps: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
        bps.map(Percent).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u32>, D::Error> {
        Ok(Option::<Percent>::deserialize(deserializer)?.map(|pct| pct.0))
    }
}

// =============================================================================
// Tax Mode
// =============================================================================

/// How configured prices relate to tax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TaxMode {
    /// Price already contains tax (IVA / VAT model).
    /// Display: 110.00 (includes 10.00 tax)
    #[default]
    Inclusive,

    /// Tax is added on top of the price (legacy model).
    /// Display: 100.00 + 10.00 tax = 110.00
    Exclusive,
}

impl TaxMode {
    /// Maps the mode onto the `pricesIncludeTax` flag of repair inputs.
    #[inline]
    pub const fn prices_include_tax(&self) -> bool {
        matches!(self, TaxMode::Inclusive)
    }

}

impl fmt::Display for TaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxMode::Inclusive => write!(f, "inclusive"),
            TaxMode::Exclusive => write!(f, "exclusive"),
        }
    }
}

impl FromStr for TaxMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inclusive" | "included" => Ok(TaxMode::Inclusive),
            "exclusive" | "excluded" | "legacy" => Ok(TaxMode::Exclusive),
            other => Err(ValidationError::InvalidFormat {
                field: "tax_mode".to_string(),
                reason: format!("unknown mode '{}', expected inclusive or exclusive", other),
            }),
        }
    }
}

// =============================================================================
// Tax Split
// =============================================================================

/// A price separated into its pre-tax subtotal and its tax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxSplit {
    pub subtotal: Money,
    pub tax_amount: Money,
}

impl TaxSplit {
    /// The price the split was taken from.
    #[inline]
    pub fn gross(&self) -> Money {
        self.subtotal + self.tax_amount
    }
}

// =============================================================================
// Flat-rate Line
// =============================================================================

/// One flat-rate line (e.g. a product) to be priced.
///
/// `subtotal` is tax-exclusive. When both discounts are given,
/// `discount_amount` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalculationInput {
    pub subtotal: Money,
    #[serde(default)]
    pub tax_rate: Option<TaxRate>,
    /// Percentage discount in basis points (1000 = 10%); a percent
    /// (`discountPercentage`) on the wire.
    #[serde(
        rename = "discountPercentage",
        default,
        with = "discount_percentage"
    )]
    #[ts(type = "number | null")]
    pub discount_percentage_bps: Option<u32>,
    #[serde(default)]
    pub discount_amount: Option<Money>,
}

impl CalculationInput {
    /// Creates an input with no tax and no discount.
    pub fn new(subtotal: Money) -> Self {
        CalculationInput {
            subtotal,
            ..Default::default()
        }
    }

    pub fn with_tax_rate(mut self, rate: TaxRate) -> Self {
        self.tax_rate = Some(rate);
        self
    }

    pub fn with_discount_percentage(mut self, bps: u32) -> Self {
        self.discount_percentage_bps = Some(bps);
        self
    }

    pub fn with_discount_amount(mut self, amount: Money) -> Self {
        self.discount_amount = Some(amount);
        self
    }
}

/// Priced flat-rate line.
///
/// ## Invariant
/// `total == max(0, subtotal - discount_amount) + tax_amount`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Pre-discount subtotal, as given.
    pub subtotal: Money,
    pub tax_amount: Money,
    pub discount_amount: Money,
    pub total: Money,
}

impl CalculationResult {
    /// Subtotal after the discount, never negative.
    #[inline]
    pub fn net_subtotal(&self) -> Money {
        (self.subtotal - self.discount_amount).clamp_non_negative()
    }
}

/// A product sold by unit price and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductLine {
    pub unit_price: Money,
    pub quantity: i64,
    #[serde(default)]
    pub tax_rate: Option<TaxRate>,
    #[serde(
        rename = "discountPercentage",
        default,
        with = "discount_percentage"
    )]
    #[ts(type = "number | null")]
    pub discount_percentage_bps: Option<u32>,
    #[serde(default)]
    pub discount_amount: Option<Money>,
}

/// What the cart aggregator needs from a product line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductLineTotals {
    /// Tax-exclusive subtotal after discount.
    pub subtotal: Money,
    pub tax_amount: Money,
}

impl From<&CalculationResult> for ProductLineTotals {
    fn from(result: &CalculationResult) -> Self {
        ProductLineTotals {
            subtotal: result.net_subtotal(),
            tax_amount: result.tax_amount,
        }
    }
}

// =============================================================================
// Repair Line
// =============================================================================

/// A repair to be priced: labor plus parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RepairCalculationInput {
    pub labor_cost: Money,
    pub parts_cost: Money,
    #[serde(default)]
    pub tax_rate: Option<TaxRate>,
    /// Percentage discount in basis points (a percent on the wire),
    /// measured against
    /// `labor_cost + parts_cost`.
    #[serde(
        rename = "discountPercentage",
        default,
        with = "discount_percentage"
    )]
    #[ts(type = "number | null")]
    pub discount_percentage_bps: Option<u32>,
    #[serde(default)]
    pub discount_amount: Option<Money>,
    /// Defaults to `true`: costs already contain tax.
    #[serde(default)]
    pub prices_include_tax: Option<bool>,
}

impl RepairCalculationInput {
    /// Creates a tax-inclusive input with no tax rate and no discount.
    pub fn new(labor_cost: Money, parts_cost: Money) -> Self {
        RepairCalculationInput {
            labor_cost,
            parts_cost,
            ..Default::default()
        }
    }

    pub fn with_tax_rate(mut self, rate: TaxRate) -> Self {
        self.tax_rate = Some(rate);
        self
    }

    pub fn with_discount_percentage(mut self, bps: u32) -> Self {
        self.discount_percentage_bps = Some(bps);
        self
    }

    pub fn with_discount_amount(mut self, amount: Money) -> Self {
        self.discount_amount = Some(amount);
        self
    }

    pub fn with_prices_include_tax(mut self, include: bool) -> Self {
        self.prices_include_tax = Some(include);
        self
    }

    /// Resolved inclusive/exclusive flag.
    #[inline]
    pub fn prices_include_tax(&self) -> bool {
        self.prices_include_tax.unwrap_or(true)
    }

    /// Sticker total the discount is measured against.
    #[inline]
    pub fn original_total(&self) -> Money {
        self.labor_cost + self.parts_cost
    }
}

/// Labor/parts split of a priced repair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RepairTaxBreakdown {
    pub labor_tax: Money,
    pub parts_tax: Money,
    pub labor_subtotal: Money,
    pub parts_subtotal: Money,
}

impl RepairTaxBreakdown {
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.labor_subtotal + self.parts_subtotal
    }

    #[inline]
    pub fn tax(&self) -> Money {
        self.labor_tax + self.parts_tax
    }
}

impl AddAssign for RepairTaxBreakdown {
    fn add_assign(&mut self, other: Self) {
        self.labor_tax += other.labor_tax;
        self.parts_tax += other.parts_tax;
        self.labor_subtotal += other.labor_subtotal;
        self.parts_subtotal += other.parts_subtotal;
    }
}

/// Priced repair.
///
/// ## Invariants
/// - `subtotal == breakdown.labor_subtotal + breakdown.parts_subtotal` (±1 cent)
/// - `tax_amount == breakdown.labor_tax + breakdown.parts_tax` (±1 cent)
/// - `total == subtotal + tax_amount` (±1 cent)
/// - all fields zero when labor and parts are both zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RepairCalculationResult {
    pub labor_cost: Money,
    pub parts_cost: Money,
    pub subtotal: Money,
    pub tax_amount: Money,
    pub discount_amount: Money,
    pub total: Money,
    pub breakdown: RepairTaxBreakdown,
}

/// A part consumed by a repair order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RepairPart {
    /// Unit cost.
    pub cost: Money,
    pub quantity: i64,
}

impl RepairPart {
    pub fn new(cost: Money, quantity: i64) -> Self {
        RepairPart { cost, quantity }
    }

    /// `cost × quantity`.
    #[inline]
    pub fn line_cost(&self) -> Money {
        self.cost.multiply_quantity(self.quantity)
    }
}

/// A repair line materialized into a cart.
///
/// ## Snapshot Pattern
/// Costs, rate and mode are frozen when the item is created. A change
/// to the repair order means building a new item through
/// [`crate::repair::create_repair_cart_item`], never editing this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartRepairItem {
    /// Repair order this line belongs to.
    pub repair_id: String,
    pub labor_cost: Money,
    pub parts_cost: Money,
    pub tax_rate: TaxRate,
    pub prices_include_tax: bool,
    pub discount_amount: Money,
    pub subtotal: Money,
    pub tax_amount: Money,
    pub total: Money,
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Totals of a cart mixing product lines and repair lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MixedCartTotals {
    pub subtotal: Money,
    pub total_tax: Money,
    pub total: Money,
    /// Labor/parts split across all repair lines, for reporting.
    pub repair_tax_breakdown: RepairTaxBreakdown,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert_eq!(rate.fraction(), Decimal::new(825, 4));
    }

    #[test]
    fn test_tax_rate_parse() {
        assert_eq!("10".parse::<TaxRate>().unwrap().bps(), 1000);
        assert_eq!("8.25".parse::<TaxRate>().unwrap().bps(), 825);
        assert_eq!(" 16% ".parse::<TaxRate>().unwrap().bps(), 1600);
        assert_eq!("0".parse::<TaxRate>().unwrap(), TaxRate::zero());

        assert!(matches!(
            "-1".parse::<TaxRate>(),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
        assert!(matches!(
            "8.255".parse::<TaxRate>(),
            Err(ValidationError::TooManyDecimals { .. })
        ));
        assert!(matches!(
            "abc".parse::<TaxRate>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "%".parse::<TaxRate>(),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(1000).to_string(), "10%");
        assert_eq!(TaxRate::from_bps(825).to_string(), "8.25%");
        assert_eq!(TaxRate::from_bps(5).to_string(), "0.05%");
    }

    #[test]
    fn test_tax_mode() {
        assert_eq!(TaxMode::default(), TaxMode::Inclusive);
        assert!(TaxMode::Inclusive.prices_include_tax());
        assert!(!TaxMode::Exclusive.prices_include_tax());
        assert_eq!("Exclusive".parse::<TaxMode>().unwrap(), TaxMode::Exclusive);
        assert_eq!("legacy".parse::<TaxMode>().unwrap(), TaxMode::Exclusive);
        assert!("sometimes".parse::<TaxMode>().is_err());
    }

    #[test]
    fn test_repair_input_defaults_to_inclusive() {
        let input = RepairCalculationInput::new(Money::from_cents(100), Money::from_cents(200));
        assert!(input.prices_include_tax());
        assert_eq!(input.original_total().cents(), 300);
        assert!(!input.with_prices_include_tax(false).prices_include_tax());
    }

    #[test]
    fn test_payload_uses_currency_units_and_percents() {
        let json = r#"{"laborCost": 110000, "partsCost": 220000, "taxRate": 10,
                       "discountPercentage": 10, "pricesIncludeTax": true}"#;
        let input: RepairCalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.labor_cost, Money::from_major(110_000));
        assert_eq!(input.parts_cost, Money::from_major(220_000));
        assert_eq!(input.tax_rate, Some(TaxRate::from_bps(1000)));
        assert_eq!(input.discount_percentage_bps, Some(1000));
        assert_eq!(input.discount_amount, None);
        assert!(input.prices_include_tax());

        let result = crate::repair::calculate_repair_total(&input);
        assert_eq!(result.discount_amount, Money::from_major(33_000));
        assert_eq!(result.subtotal, Money::from_major(270_000));
        assert_eq!(result.tax_amount, Money::from_major(27_000));
        assert_eq!(result.total, Money::from_major(297_000));

        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["total"], 297000.0);
        assert_eq!(value["breakdown"]["laborSubtotal"], 90000.0);

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["laborCost"], 110000.0);
        assert_eq!(value["taxRate"], 10.0);
        assert_eq!(value["discountPercentage"], 10.0);
    }

    #[test]
    fn test_payload_percent_with_decimals() {
        let json = r#"{"subtotal": 19.99, "taxRate": 8.25, "discountPercentage": 2.5}"#;
        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.subtotal.cents(), 1999);
        assert_eq!(input.tax_rate, Some(TaxRate::from_bps(825)));
        assert_eq!(input.discount_percentage_bps, Some(250));

        let bare: CalculationInput = serde_json::from_str(r#"{"subtotal": 5}"#).unwrap();
        assert_eq!(bare, CalculationInput::new(Money::from_major(5)));
    }

    #[test]
    fn test_payload_rejects_unknown_and_invalid_fields() {
        // Old basis-point field name
        let renamed = r#"{"laborCost": 1, "partsCost": 2, "discountPercentageBps": 1000}"#;
        assert!(serde_json::from_str::<RepairCalculationInput>(renamed).is_err());

        assert!(serde_json::from_str::<CalculationInput>(r#"{"subtotal": 1, "taxRate": -10}"#)
            .is_err());
        assert!(serde_json::from_str::<CalculationInput>(r#"{"subtotal": 1, "taxRate": 8.255}"#)
            .is_err());
        assert!(serde_json::from_str::<ProductLine>(
            r#"{"unitPrice": 1, "quantity": 1, "sku": "A-1"}"#
        )
        .is_err());
    }

    #[test]
    fn test_result_shapes_are_camel_case() {
        let totals = MixedCartTotals::default();
        let value = serde_json::to_value(totals).unwrap();
        assert!(value.get("totalTax").is_some());
        assert!(value["repairTaxBreakdown"].get("laborSubtotal").is_some());
    }

    #[test]
    fn test_product_line_totals_use_net_subtotal() {
        let result = CalculationResult {
            subtotal: Money::from_cents(1000),
            tax_amount: Money::from_cents(90),
            discount_amount: Money::from_cents(100),
            total: Money::from_cents(990),
        };
        let totals = ProductLineTotals::from(&result);
        assert_eq!(totals.subtotal.cents(), 900);
        assert_eq!(totals.tax_amount.cents(), 90);
    }

    #[test]
    fn test_breakdown_add_assign() {
        let mut sum = RepairTaxBreakdown::default();
        let part = RepairTaxBreakdown {
            labor_tax: Money::from_cents(1),
            parts_tax: Money::from_cents(2),
            labor_subtotal: Money::from_cents(10),
            parts_subtotal: Money::from_cents(20),
        };
        sum += part;
        sum += part;
        assert_eq!(sum.subtotal().cents(), 60);
        assert_eq!(sum.tax().cents(), 6);
    }

    #[test]
    fn test_repair_part_line_cost() {
        let part = RepairPart::new(Money::from_cents(2500), 4);
        assert_eq!(part.line_cost().cents(), 10_000);
    }
}
