//! # Error Types
//!
//! Domain-specific error types for servipos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  servipos-core errors (this file)                                      │
//! │  ├── CoreError        - Rejected calculation requests                  │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  servipos-cli errors (app crate)                                       │
//! │  └── CliError         - Config, I/O and payload failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit status            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Errors Come From
//! The calculators themselves never fail: edge values are clamped or
//! short-circuited to zero, and inputs are assumed to fit in cents.
//! Errors only come from the strict layer in [`crate::validated`] and
//! from parsing amounts and rates out of text.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the strict calculation wrappers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An input was outside the documented domain.
    ///
    /// ## When This Occurs
    /// - Tax rate above 100%
    /// - Negative labor, parts, subtotal or discount amount
    /// - Part quantity of zero or above the per-item maximum
    /// - Repair id that is not a UUID
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Summing `cost × quantity` over a repair's parts overflowed.
    #[error("Parts cost overflow for repair {repair_id}")]
    PartsOverflow { repair_id: String },

    /// An amount, or a total built from it, does not fit in an `i64` of
    /// cents.
    ///
    /// ## When This Occurs
    /// - `unit_price × quantity` on a product line
    /// - A line or repair whose price plus tax exceeds the range
    /// - Running cart sums
    #[error("Amount overflow in {field}")]
    AmountOverflow { field: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before any calculation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or positive.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., invalid UUID, unparseable amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// More decimal places than the field supports.
    #[error("{field} must have at most {max} decimal places")]
    TooManyDecimals { field: String, max: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PartsOverflow {
            repair_id: "R-1".to_string(),
        };
        assert_eq!(err.to_string(), "Parts cost overflow for repair R-1");

        let err = CoreError::AmountOverflow {
            field: "line subtotal".to_string(),
        };
        assert_eq!(err.to_string(), "Amount overflow in line subtotal");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        };
        assert_eq!(err.to_string(), "tax_rate must be between 0 and 10000");

        let err = ValidationError::MustNotBeNegative {
            field: "labor_cost".to_string(),
        };
        assert_eq!(err.to_string(), "labor_cost must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "repair_id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidArgument(_)));
        assert_eq!(core_err.to_string(), "Invalid argument: repair_id is required");
    }
}
