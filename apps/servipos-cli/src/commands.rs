//! # Command Handlers
//!
//! Each handler takes the loaded [`CliConfig`] and already-parsed
//! arguments, fills in configured defaults, and calls the strict
//! wrappers in `servipos_core::validated`. No I/O happens here.
//!
//! ## Cart Request
//! ```json
//! {
//!   "productLines": [
//!     { "unitPrice": 150000, "quantity": 1, "taxRate": 10 }
//!   ],
//!   "repairs": [
//!     {
//!       "repairId": "550e8400-e29b-41d4-a716-446655440000",
//!       "laborCost": 110000,
//!       "parts": [{ "cost": 220000, "quantity": 1 }],
//!       "discountPercentage": 10
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use servipos_core::tax::extract_tax;
use servipos_core::types::discount_percentage;
use servipos_core::validation::{validate_amount, validate_tax_rate};
use servipos_core::{
    validated, CalculationInput, CalculationResult, CartRepairItem, MixedCartTotals, Money,
    ProductLine, ProductLineTotals, RepairCalculationInput, RepairCalculationResult, RepairPart,
    TaxRate, TaxSplit,
};

use crate::cli::DiscountArgs;
use crate::config::CliConfig;
use crate::error::CliResult;

// =============================================================================
// extract
// =============================================================================

/// Splits a tax-inclusive price.
pub fn extract(
    config: &CliConfig,
    price: Money,
    tax_rate: Option<TaxRate>,
) -> CliResult<TaxSplit> {
    let rate = tax_rate.unwrap_or_else(|| config.tax_rate());
    validate_amount("price", price)?;
    validate_tax_rate(rate)?;

    Ok(extract_tax(price, rate))
}

// =============================================================================
// line
// =============================================================================

/// Prices a flat-rate line.
pub fn line(
    config: &CliConfig,
    subtotal: Money,
    tax_rate: Option<TaxRate>,
    discount: DiscountArgs,
) -> CliResult<CalculationResult> {
    let input = CalculationInput {
        subtotal,
        tax_rate,
        discount_percentage_bps: discount.discount_percent,
        discount_amount: discount.discount_amount,
    };
    let input = config.pricing().apply_to_line(input);

    Ok(validated::calculate_total(&input)?)
}

// =============================================================================
// repair
// =============================================================================

/// Prices a repair. Mode comes from `--exclusive`, else from config.
pub fn repair(
    config: &CliConfig,
    labor_cost: Money,
    parts_cost: Money,
    tax_rate: Option<TaxRate>,
    discount: DiscountArgs,
    exclusive: bool,
) -> CliResult<RepairCalculationResult> {
    let input = RepairCalculationInput {
        labor_cost,
        parts_cost,
        tax_rate,
        discount_percentage_bps: discount.discount_percent,
        discount_amount: discount.discount_amount,
        prices_include_tax: exclusive.then_some(false),
    };
    let input = config.pricing().apply_to_repair(input);

    Ok(validated::calculate_repair_total(&input)?)
}

// =============================================================================
// cart
// =============================================================================

/// A repair as submitted in a cart request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RepairRequest {
    /// Generated when absent.
    #[serde(default)]
    pub repair_id: Option<String>,
    pub labor_cost: Money,
    #[serde(default)]
    pub parts: Vec<RepairPart>,
    #[serde(default)]
    pub tax_rate: Option<TaxRate>,
    /// Basis points; `discountPercentage` percent on the wire.
    #[serde(
        rename = "discountPercentage",
        default,
        with = "discount_percentage"
    )]
    pub discount_percentage_bps: Option<u32>,
    #[serde(default)]
    pub discount_amount: Option<Money>,
    #[serde(default)]
    pub prices_include_tax: Option<bool>,
}

/// Body of `servipos cart`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CartRequest {
    #[serde(default)]
    pub product_lines: Vec<ProductLine>,
    #[serde(default)]
    pub repairs: Vec<RepairRequest>,
}

impl CartRequest {
    pub fn from_json(body: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Priced cart: every line plus the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub product_lines: Vec<CalculationResult>,
    pub repairs: Vec<CartRepairItem>,
    pub totals: MixedCartTotals,
}

/// Prices every line of a cart request and totals the cart.
pub fn cart(config: &CliConfig, request: &CartRequest) -> CliResult<CartResponse> {
    let pricing = config.pricing();

    let mut product_lines = Vec::with_capacity(request.product_lines.len());
    for line in &request.product_lines {
        let mut line = line.clone();
        line.tax_rate = line.tax_rate.or(Some(pricing.default_tax_rate));
        product_lines.push(validated::calculate_product_line(&line)?);
    }

    let mut repairs = Vec::with_capacity(request.repairs.len());
    for repair in &request.repairs {
        let repair_id = match &repair.repair_id {
            Some(id) => id.clone(),
            None => {
                let id = Uuid::new_v4().to_string();
                debug!(repair_id = %id, "Generated repair id");
                id
            }
        };

        let item = validated::create_repair_cart_item(
            &repair_id,
            repair.labor_cost,
            &repair.parts,
            repair.tax_rate.unwrap_or(pricing.default_tax_rate),
            repair.discount_percentage_bps,
            repair.discount_amount,
            Some(
                repair
                    .prices_include_tax
                    .unwrap_or_else(|| pricing.prices_include_tax()),
            ),
        )?;
        repairs.push(item);
    }

    let line_totals: Vec<ProductLineTotals> =
        product_lines.iter().map(ProductLineTotals::from).collect();
    let totals = validated::calculate_mixed_cart_total(&line_totals, &repairs)?;

    info!(
        product_lines = product_lines.len(),
        repairs = repairs.len(),
        total = totals.total.cents(),
        "Cart priced"
    );

    Ok(CartResponse {
        product_lines,
        repairs,
        totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use servipos_core::{CoreError, TaxMode};

    const REPAIR_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn no_discount() -> DiscountArgs {
        DiscountArgs::default()
    }

    #[test]
    fn test_extract_uses_configured_rate() {
        let config = CliConfig::default();
        let split = extract(&config, Money::from_major(110_000), None).unwrap();
        assert_eq!(split.subtotal, Money::from_major(100_000));
        assert_eq!(split.tax_amount, Money::from_major(10_000));

        let split = extract(&config, Money::from_major(110), Some(TaxRate::zero())).unwrap();
        assert_eq!(split.subtotal, Money::from_major(110));
    }

    #[test]
    fn test_line_with_discount() {
        let config = CliConfig::default();
        let discount = DiscountArgs {
            discount_percent: Some(1000),
            discount_amount: None,
        };
        let result = line(&config, Money::from_major(100), None, discount).unwrap();
        assert_eq!(result.discount_amount, Money::from_major(10));
        assert_eq!(result.tax_amount, Money::from_major(9));
        assert_eq!(result.total, Money::from_major(99));
    }

    #[test]
    fn test_repair_inclusive_discount() {
        let config = CliConfig::default();
        let discount = DiscountArgs {
            discount_percent: Some(1000),
            discount_amount: None,
        };
        let result = repair(
            &config,
            Money::from_major(110_000),
            Money::from_major(220_000),
            None,
            discount,
            false,
        )
        .unwrap();

        assert_eq!(result.discount_amount, Money::from_major(33_000));
        assert_eq!(result.subtotal, Money::from_major(270_000));
        assert_eq!(result.tax_amount, Money::from_major(27_000));
        assert_eq!(result.total, Money::from_major(297_000));
    }

    #[test]
    fn test_repair_exclusive_from_flag_and_config() {
        let labor = Money::from_major(100_000);
        let parts = Money::from_major(200_000);

        let by_flag =
            repair(&CliConfig::default(), labor, parts, None, no_discount(), true).unwrap();
        assert_eq!(by_flag.total, Money::from_major(330_000));

        let mut config = CliConfig::default();
        config.pricing.tax_mode = TaxMode::Exclusive;
        let by_config = repair(&config, labor, parts, None, no_discount(), false).unwrap();
        assert_eq!(by_config, by_flag);
    }

    #[test]
    fn test_repair_rejects_negative_labor() {
        let result = repair(
            &CliConfig::default(),
            Money::from_cents(-1),
            Money::zero(),
            None,
            no_discount(),
            false,
        );
        assert!(matches!(
            result,
            Err(CliError::Core(CoreError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_cart_request_parsing() {
        let request = CartRequest::from_json(
            r#"{
                "productLines": [{ "unitPrice": 1500.50, "quantity": 1, "taxRate": 8.25 }],
                "repairs": [{
                    "repairId": "550e8400-e29b-41d4-a716-446655440000",
                    "laborCost": 110000,
                    "parts": [{ "cost": 220000, "quantity": 1 }],
                    "discountPercentage": 10
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(request.product_lines[0].unit_price, Money::from_cents(150_050));
        assert_eq!(request.product_lines[0].tax_rate, Some(TaxRate::from_bps(825)));
        assert_eq!(request.repairs[0].labor_cost, Money::from_major(110_000));
        assert_eq!(request.repairs[0].discount_percentage_bps, Some(1000));
        assert_eq!(request.repairs[0].prices_include_tax, None);

        assert!(CartRequest::from_json("{").is_err());
        assert_eq!(CartRequest::from_json("{}").unwrap(), CartRequest::default());
    }

    #[test]
    fn test_cart_request_rejects_unknown_fields() {
        let bps_field = r#"{"repairs": [{"laborCost": 10, "discountPercentageBps": 1000}]}"#;
        assert!(CartRequest::from_json(bps_field).is_err());
        assert!(CartRequest::from_json(r#"{"lines": []}"#).is_err());
    }

    #[test]
    fn test_cart_quantity_overflow_is_an_error() {
        let request = CartRequest {
            product_lines: vec![ProductLine::new(Money::from_cents(i64::MAX / 2), 3)],
            repairs: vec![],
        };
        assert!(matches!(
            cart(&CliConfig::default(), &request),
            Err(CliError::Core(CoreError::AmountOverflow { .. }))
        ));

        let negative = CartRequest {
            product_lines: vec![ProductLine::new(Money::from_cents(-100), 1)],
            repairs: vec![],
        };
        assert!(matches!(
            cart(&CliConfig::default(), &negative),
            Err(CliError::Core(CoreError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_cart_keeps_explicit_line_rate() {
        let mut line = ProductLine::new(Money::from_major(100), 2);
        line.tax_rate = Some(TaxRate::zero());
        let request = CartRequest {
            product_lines: vec![line],
            repairs: vec![],
        };
        let response = cart(&CliConfig::default(), &request).unwrap();
        assert_eq!(response.product_lines[0].subtotal, Money::from_major(200));
        assert_eq!(response.product_lines[0].tax_amount, Money::zero());
    }

    #[test]
    fn test_mixed_cart() {
        let request = CartRequest {
            product_lines: vec![ProductLine::new(Money::from_major(150_000), 1)],
            repairs: vec![RepairRequest {
                repair_id: Some(REPAIR_ID.to_string()),
                labor_cost: Money::from_major(110_000),
                parts: vec![RepairPart::new(Money::from_major(220_000), 1)],
                tax_rate: None,
                discount_percentage_bps: None,
                discount_amount: None,
                prices_include_tax: None,
            }],
        };

        let response = cart(&CliConfig::default(), &request).unwrap();

        // Product line picks up the configured 10% on top of its price
        assert_eq!(response.product_lines[0].tax_amount, Money::from_major(15_000));
        assert_eq!(response.repairs[0].repair_id, REPAIR_ID);

        let totals = response.totals;
        assert_eq!(totals.subtotal, Money::from_major(450_000));
        assert_eq!(totals.total_tax, Money::from_major(45_000));
        assert_eq!(totals.total, Money::from_major(495_000));
        assert_eq!(
            totals.repair_tax_breakdown.labor_subtotal,
            Money::from_major(100_000)
        );
    }

    #[test]
    fn test_cart_generates_repair_id() {
        let request = CartRequest {
            product_lines: vec![],
            repairs: vec![RepairRequest {
                repair_id: None,
                labor_cost: Money::from_major(10),
                parts: vec![],
                tax_rate: None,
                discount_percentage_bps: None,
                discount_amount: None,
                prices_include_tax: None,
            }],
        };
        let response = cart(&CliConfig::default(), &request).unwrap();
        assert!(Uuid::parse_str(&response.repairs[0].repair_id).is_ok());
    }

    #[test]
    fn test_cart_rejects_bad_lines() {
        let zero_qty = CartRequest {
            product_lines: vec![ProductLine::new(Money::from_major(1), 0)],
            repairs: vec![],
        };
        assert!(cart(&CliConfig::default(), &zero_qty).is_err());

        let bad_id = CartRequest {
            product_lines: vec![],
            repairs: vec![RepairRequest {
                repair_id: Some("R-1".to_string()),
                labor_cost: Money::from_major(10),
                parts: vec![],
                tax_rate: None,
                discount_percentage_bps: None,
                discount_amount: None,
                prices_include_tax: None,
            }],
        };
        assert!(cart(&CliConfig::default(), &bad_id).is_err());
    }
}
