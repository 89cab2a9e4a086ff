//! # Validation Module
//!
//! Input validation for pricing requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (UI / CLI)                                            │
//! │  ├── Parsing amounts and percentages from text                         │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: crate::validated                                             │
//! │  └── THIS MODULE: domain checks before any arithmetic                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculators                                                  │
//! │  └── No checks; clamp and short-circuit only                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use servipos_core::money::Money;
//! use servipos_core::validation::{validate_amount, validate_quantity};
//!
//! assert!(validate_amount("labor_cost", Money::from_cents(1099)).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::TaxRate;
use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// 100% in basis points.
const MAX_BPS: u32 = 10_000;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a monetary amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free labor, no parts)
///
/// ## Example
/// ```rust
/// use servipos_core::money::Money;
/// use servipos_core::validation::validate_amount;
///
/// assert!(validate_amount("parts_cost", Money::zero()).is_ok());
/// assert!(validate_amount("parts_cost", Money::from_cents(-1)).is_err());
/// ```
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an optional monetary amount (absent is fine).
pub fn validate_optional_amount(field: &str, amount: Option<Money>) -> ValidationResult<()> {
    match amount {
        Some(amount) => validate_amount(field, amount),
        None => Ok(()),
    }
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Repair order: add part                                                 │
/// │                                                                         │
/// │  Technician enters quantity: 5                                          │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       ├── qty > 999? → Error: "quantity must be between 1 and 999"     │
/// │       │                                                                 │
/// │       └── OK → parts cost = Σ cost × quantity                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a tax rate.
///
/// ## Rules
/// - Must be between 0 and 10000 bps (0% to 100%)
pub fn validate_tax_rate(rate: TaxRate) -> ValidationResult<()> {
    validate_bps("tax_rate", rate.bps())
}

/// Validates a percentage discount in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 bps (0% to 100%)
pub fn validate_discount_percentage(bps: Option<u32>) -> ValidationResult<()> {
    match bps {
        Some(bps) => validate_bps("discount_percentage", bps),
        None => Ok(()),
    }
}

fn validate_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > MAX_BPS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::from(MAX_BPS),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size (number of lines of one kind).
///
/// ## Rules
/// - Must not exceed MAX_CART_LINES (100)
pub fn validate_cart_size(lines: usize) -> ValidationResult<()> {
    if lines > MAX_CART_LINES {
        return Err(ValidationError::OutOfRange {
            field: "cart lines".to_string(),
            min: 0,
            max: MAX_CART_LINES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a repair order id.
///
/// ## Rules
/// - Must be a valid UUID: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
///
/// ## Example
/// ```rust
/// use servipos_core::validation::validate_repair_id;
///
/// assert!(validate_repair_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_repair_id("not-a-uuid").is_err());
/// ```
pub fn validate_repair_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "repair_id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "repair_id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("labor_cost", Money::zero()).is_ok());
        assert!(validate_amount("labor_cost", Money::from_cents(1099)).is_ok());
        assert_eq!(
            validate_amount("labor_cost", Money::from_cents(-100)),
            Err(ValidationError::MustNotBeNegative {
                field: "labor_cost".to_string()
            })
        );
    }

    #[test]
    fn test_validate_optional_amount() {
        assert!(validate_optional_amount("discount_amount", None).is_ok());
        assert!(validate_optional_amount("discount_amount", Some(Money::from_cents(-1))).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate(TaxRate::zero()).is_ok());
        assert!(validate_tax_rate(TaxRate::from_bps(825)).is_ok());
        assert!(validate_tax_rate(TaxRate::from_bps(10_000)).is_ok());
        assert!(validate_tax_rate(TaxRate::from_bps(10_001)).is_err());
    }

    #[test]
    fn test_validate_discount_percentage() {
        assert!(validate_discount_percentage(None).is_ok());
        assert!(validate_discount_percentage(Some(10_000)).is_ok());
        assert!(validate_discount_percentage(Some(10_001)).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_LINES).is_ok());
        assert!(validate_cart_size(MAX_CART_LINES + 1).is_err());
    }

    #[test]
    fn test_validate_repair_id() {
        assert!(validate_repair_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_repair_id("").is_err());
        assert!(validate_repair_id("not-a-uuid").is_err());
        assert!(validate_repair_id("123").is_err());
    }
}
