//! # CLI Configuration
//!
//! Loads the pricing settings snapshot handed to every calculation.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SERVIPOS_TAX_RATE=16          (percent)                            │
//! │     SERVIPOS_TAX_MODE=exclusive                                        │
//! │     SERVIPOS_CURRENCY_SYMBOL=₲                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, otherwise                                         │
//! │     ~/.config/servipos/pricing.toml (Linux)                            │
//! │     ~/Library/Application Support/com.servi.servipos/pricing.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     10% tax, prices include tax, "$" with 2 decimals                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # pricing.toml
//! [pricing]
//! tax_rate_bps = 1000        # 10%
//! tax_mode = "inclusive"     # inclusive | exclusive
//!
//! [currency]
//! symbol = "$"
//! decimals = 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use servipos_core::config::DEFAULT_TAX_RATE_BPS;
use servipos_core::validation::validate_tax_rate;
use servipos_core::{Money, PricingConfig, TaxMode, TaxRate};

use crate::error::{CliError, CliResult};

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "pricing.toml";

// =============================================================================
// Pricing Settings
// =============================================================================

/// `[pricing]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Default tax rate in basis points (1000 = 10%).
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,

    /// Whether prices already include tax.
    #[serde(default)]
    pub tax_mode: TaxMode,
}

fn default_tax_rate_bps() -> u32 {
    DEFAULT_TAX_RATE_BPS
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            tax_rate_bps: default_tax_rate_bps(),
            tax_mode: TaxMode::default(),
        }
    }
}

// =============================================================================
// Currency Settings
// =============================================================================

/// `[currency]` section. Display only; amounts are always held in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Decimal places shown (0 to 2).
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_decimals() -> u8 {
    2
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            symbol: default_symbol(),
            decimals: default_decimals(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub currency: CurrencySettings,
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (pricing.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that doesn't exist is an error; a missing
    /// default file just means defaults.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading pricing config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else if explicit {
                return Err(CliError::InvalidConfig(format!(
                    "config file not found: {}",
                    path.display()
                )));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file body.
    pub fn from_toml(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        validate_tax_rate(self.tax_rate())?;

        if self.currency.decimals > 2 {
            return Err(CliError::InvalidConfig(format!(
                "currency.decimals must be between 0 and 2, got {}",
                self.currency.decimals
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    ///
    /// Unparseable values are logged and skipped.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(rate) = var("SERVIPOS_TAX_RATE") {
            match rate.parse::<TaxRate>() {
                Ok(parsed) => {
                    debug!(rate = %parsed, "Overriding tax rate from environment");
                    self.pricing.tax_rate_bps = parsed.bps();
                }
                Err(e) => warn!(rate = %rate, error = %e, "Ignoring invalid SERVIPOS_TAX_RATE"),
            }
        }

        if let Some(mode) = var("SERVIPOS_TAX_MODE") {
            match mode.parse::<TaxMode>() {
                Ok(parsed) => {
                    debug!(mode = %parsed, "Overriding tax mode from environment");
                    self.pricing.tax_mode = parsed;
                }
                Err(_) => warn!(mode = %mode, "Unknown tax mode in environment"),
            }
        }

        if let Some(symbol) = var("SERVIPOS_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "servi", "servipos")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the default tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.pricing.tax_rate_bps)
    }

    /// The immutable snapshot passed into the pricing engine.
    pub fn pricing(&self) -> PricingConfig {
        PricingConfig::new(self.tax_rate(), self.pricing.tax_mode)
    }

    /// Formats an amount for display.
    ///
    /// Amounts are rounded half away from zero to the configured number
    /// of decimals.
    ///
    /// ## Example
    /// ```rust
    /// use servipos_cli::config::CliConfig;
    /// use servipos_core::Money;
    ///
    /// let config = CliConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let decimals = u32::from(self.currency.decimals.min(2));
        let step = 10_u64.pow(2 - decimals);
        let cents = amount.cents();

        // Half away from zero, on the magnitude
        let units = (cents.unsigned_abs() + step / 2) / step;
        let divisor = 10_u64.pow(decimals);
        let whole = units / divisor;
        let frac = units % divisor;

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency.symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole, frac, width = decimals as usize)
            } else {
                whole.to_string()
            }
        )
    }
}
