//! # Pricing Configuration
//!
//! The immutable settings snapshot a caller reads once and passes into
//! calculations. The core never looks up settings on its own; two
//! concurrent calculations with different snapshots can't interfere.
//!
//! Loading the snapshot (files, environment) is the application's job.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{CalculationInput, RepairCalculationInput, TaxMode, TaxRate};
use crate::validation::validate_tax_rate;

/// Default IVA / VAT rate: 10%.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1000;

/// Process-wide pricing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Rate applied when a line doesn't carry its own.
    #[serde(default = "default_tax_rate")]
    pub default_tax_rate: TaxRate,

    /// Whether configured prices already include tax.
    #[serde(default)]
    pub tax_mode: TaxMode,
}

fn default_tax_rate() -> TaxRate {
    TaxRate::from_bps(DEFAULT_TAX_RATE_BPS)
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            default_tax_rate: default_tax_rate(),
            tax_mode: TaxMode::default(),
        }
    }
}

impl PricingConfig {
    pub fn new(default_tax_rate: TaxRate, tax_mode: TaxMode) -> Self {
        PricingConfig {
            default_tax_rate,
            tax_mode,
        }
    }

    /// Checks the snapshot before it is handed out.
    pub fn validate(&self) -> CoreResult<()> {
        validate_tax_rate(self.default_tax_rate)?;
        Ok(())
    }

    #[inline]
    pub fn prices_include_tax(&self) -> bool {
        self.tax_mode.prices_include_tax()
    }

    /// Flat-rate input carrying the default rate.
    pub fn line_input(&self, subtotal: Money) -> CalculationInput {
        CalculationInput::new(subtotal).with_tax_rate(self.default_tax_rate)
    }

    /// Repair input carrying the default rate and tax mode.
    pub fn repair_input(&self, labor_cost: Money, parts_cost: Money) -> RepairCalculationInput {
        RepairCalculationInput::new(labor_cost, parts_cost)
            .with_tax_rate(self.default_tax_rate)
            .with_prices_include_tax(self.prices_include_tax())
    }

    /// Fills in the default rate on an input that has none.
    pub fn apply_to_line(&self, mut input: CalculationInput) -> CalculationInput {
        input.tax_rate.get_or_insert(self.default_tax_rate);
        input
    }

    /// Fills in the default rate and mode on a repair input that has none.
    pub fn apply_to_repair(&self, mut input: RepairCalculationInput) -> RepairCalculationInput {
        input.tax_rate.get_or_insert(self.default_tax_rate);
        input
            .prices_include_tax
            .get_or_insert(self.prices_include_tax());
        input
    }
}
