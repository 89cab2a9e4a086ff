//! # CLI Error Type
//!
//! Unified error type for the command line.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pricing.toml unreadable? ──── std::io::Error ─────┐                    │
//! │  pricing.toml malformed?  ──── toml::de::Error ────┤                    │
//! │  cart request malformed?  ──── serde_json::Error ──┼──► CliError        │
//! │  input rejected?          ──── CoreError ──────────┤       │            │
//! │  bad setting value?       ──── InvalidConfig ──────┘       ▼            │
//! │                                                   stderr + exit 1      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use servipos_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors surfaced by the `servipos` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the config file or the request failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`crate::config::CliConfig`].
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A setting parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The cart request is not valid JSON, or the output could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The pricing engine rejected the input.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Core(CoreError::from(err))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
