//! # Command Line Arguments
//!
//! Amounts are major-unit decimal strings (`1100.50`), rates and
//! percentages are percents (`10`, `8.25`, `16%`). JSON requests and
//! responses use the same units as plain numbers.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use servipos_core::types::parse_percentage_bps;
use servipos_core::{Money, TaxRate, ValidationError};

/// Servi POS pricing engine.
#[derive(Debug, Parser)]
#[command(name = "servipos", version, about, long_about = None)]
pub struct Cli {
    /// Path to pricing.toml (defaults to the platform config directory)
    #[arg(long, global = true, env = "SERVIPOS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a tax-inclusive price into subtotal and tax
    Extract {
        /// Tax-inclusive price
        #[arg(long)]
        price: Money,

        /// Tax rate in percent (defaults to the configured rate)
        #[arg(long)]
        tax_rate: Option<TaxRate>,
    },

    /// Price a flat-rate line: discount, then tax on top
    Line {
        /// Line subtotal before discount
        #[arg(long)]
        subtotal: Money,

        /// Tax rate in percent (defaults to the configured rate)
        #[arg(long)]
        tax_rate: Option<TaxRate>,

        #[command(flatten)]
        discount: DiscountArgs,
    },

    /// Price a repair made of labor and parts
    Repair {
        /// Labor cost
        #[arg(long)]
        labor: Money,

        /// Total parts cost
        #[arg(long)]
        parts: Money,

        /// Tax rate in percent (defaults to the configured rate)
        #[arg(long)]
        tax_rate: Option<TaxRate>,

        #[command(flatten)]
        discount: DiscountArgs,

        /// Treat labor and parts as tax-exclusive
        #[arg(long)]
        exclusive: bool,
    },

    /// Total a JSON cart of product lines and repairs
    Cart {
        /// Request file; `-` or absent reads stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

/// A discount given either as a percentage or as a fixed amount.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct DiscountArgs {
    /// Discount in percent of the sticker price
    #[arg(long, value_parser = parse_discount_percent, conflicts_with = "discount_amount")]
    pub discount_percent: Option<u32>,

    /// Fixed discount amount
    #[arg(long)]
    pub discount_amount: Option<Money>,
}

fn parse_discount_percent(s: &str) -> Result<u32, ValidationError> {
    parse_percentage_bps(s, "discount_percent")
}
