//! # Output Rendering
//!
//! JSON (camelCase, amounts in major units) for machines, aligned text
//! for people.

use serde::Serialize;

use servipos_core::{CalculationResult, Money, RepairCalculationResult, TaxSplit};

use crate::cli::OutputFormat;
use crate::commands::CartResponse;
use crate::config::CliConfig;
use crate::error::CliResult;

/// A command result that can be shown as text.
pub trait Render: Serialize {
    fn render_text(&self, config: &CliConfig) -> String;
}

/// Renders a result in the requested format.
pub fn render<T: Render>(value: &T, format: OutputFormat, config: &CliConfig) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(value.render_text(config)),
    }
}

/// Appends one `label  amount` row.
fn row(out: &mut String, config: &CliConfig, label: &str, amount: Money) {
    out.push_str(&format!(
        "{:<16}{:>18}\n",
        label,
        config.format_currency(amount)
    ));
}

impl Render for TaxSplit {
    fn render_text(&self, config: &CliConfig) -> String {
        let mut out = String::new();
        row(&mut out, config, "Subtotal", self.subtotal);
        row(&mut out, config, "Tax", self.tax_amount);
        row(&mut out, config, "Total", self.gross());
        out
    }
}

impl Render for CalculationResult {
    fn render_text(&self, config: &CliConfig) -> String {
        let mut out = String::new();
        row(&mut out, config, "Subtotal", self.subtotal);
        row(&mut out, config, "Discount", self.discount_amount);
        row(&mut out, config, "Tax", self.tax_amount);
        row(&mut out, config, "Total", self.total);
        out
    }
}

impl Render for RepairCalculationResult {
    fn render_text(&self, config: &CliConfig) -> String {
        let mut out = String::new();
        row(&mut out, config, "Labor", self.labor_cost);
        row(&mut out, config, "Parts", self.parts_cost);
        row(&mut out, config, "Discount", self.discount_amount);
        row(&mut out, config, "Subtotal", self.subtotal);
        row(&mut out, config, "Tax", self.tax_amount);
        row(&mut out, config, "Total", self.total);
        out.push('\n');
        row(&mut out, config, "Labor subtotal", self.breakdown.labor_subtotal);
        row(&mut out, config, "Labor tax", self.breakdown.labor_tax);
        row(&mut out, config, "Parts subtotal", self.breakdown.parts_subtotal);
        row(&mut out, config, "Parts tax", self.breakdown.parts_tax);
        out
    }
}

impl Render for CartResponse {
    fn render_text(&self, config: &CliConfig) -> String {
        let mut out = String::new();

        for (i, line) in self.product_lines.iter().enumerate() {
            let label = format!("Product {}", i + 1);
            row(&mut out, config, &label, line.total);
        }
        for item in &self.repairs {
            let short_id: String = item.repair_id.chars().take(8).collect();
            let label = format!("Repair {}", short_id);
            row(&mut out, config, &label, item.total);
        }
        if !self.product_lines.is_empty() || !self.repairs.is_empty() {
            out.push('\n');
        }

        row(&mut out, config, "Subtotal", self.totals.subtotal);
        row(&mut out, config, "Tax", self.totals.total_tax);
        row(&mut out, config, "Total", self.totals.total);
        out
    }
}
