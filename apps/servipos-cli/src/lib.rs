//! # servipos-cli: Command Line for the Servi POS Pricing Engine
//!
//! Thin orchestration over `servipos-core`.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  argv ──► Cli (clap) ──► CliConfig::load ──► commands::* ──► output     │
//! │                          (toml + env)        (validated)     (stdout)   │
//! │                                                                         │
//! │  logs ──► tracing-subscriber ──► stderr                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::cli::{Cli, Command};
use crate::commands::CartRequest;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::render;

/// Runs one invocation and returns what should go to stdout.
pub fn run(cli: Cli) -> CliResult<String> {
    let config = CliConfig::load(cli.config)?;
    debug!(
        tax_rate = %config.tax_rate(),
        tax_mode = %config.pricing.tax_mode,
        "Pricing config loaded"
    );

    match cli.command {
        Command::Extract { price, tax_rate } => {
            let split = commands::extract(&config, price, tax_rate)?;
            render(&split, cli.format, &config)
        }
        Command::Line {
            subtotal,
            tax_rate,
            discount,
        } => {
            let result = commands::line(&config, subtotal, tax_rate, discount)?;
            render(&result, cli.format, &config)
        }
        Command::Repair {
            labor,
            parts,
            tax_rate,
            discount,
            exclusive,
        } => {
            let result = commands::repair(&config, labor, parts, tax_rate, discount, exclusive)?;
            render(&result, cli.format, &config)
        }
        Command::Cart { input } => {
            let body = read_request(input.as_deref())?;
            let request = CartRequest::from_json(&body)?;
            let response = commands::cart(&config, &request)?;
            render(&response, cli.format, &config)
        }
    }
}

/// Reads a request body from a file, or stdin for `-` / no path.
fn read_request(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;

    #[test]
    fn test_missing_request_file() {
        let result = read_request(Some(Path::new("/nonexistent/servipos/cart.json")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_run_with_missing_config_fails() {
        let cli = Cli::try_parse_from([
            "servipos",
            "--config",
            "/nonexistent/servipos/pricing.toml",
            "extract",
            "--price",
            "110",
        ])
        .unwrap();
        assert!(matches!(run(cli), Err(CliError::InvalidConfig(_))));
    }
}
