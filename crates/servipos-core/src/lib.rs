//! # servipos-core: Pricing Engine for Servi POS
//!
//! Pure functions that turn raw line costs into subtotal, tax, discount
//! and total, for product lines and for repair lines (labor + parts),
//! and aggregate both kinds into one cart total.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Servi POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Callers (cart UI, repair desk, servipos-cli)         │   │
//! │  │     read PricingConfig once, pass it into every calculation     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ servipos-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   rounding ──► money ──► tax ──┬──► line_item ──┐               │   │
//! │  │                                └──► repair ─────┴──► cart       │   │
//! │  │                                                                 │   │
//! │  │   validation ──► validated (strict wrappers)                    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`rounding`] - The one rounding policy (2 places, half away from zero)
//! - [`money`] - Money type in integer cents
//! - [`types`] - Inputs, results and cart line shapes
//! - [`tax`] - Tax extraction (inclusive) and addition (exclusive)
//! - [`line_item`] - Flat-rate line pricing
//! - [`repair`] - Labor + parts pricing with proportional discount
//! - [`cart`] - Mixed cart aggregation
//! - [`validation`] / [`validated`] - Optional strict input checks
//! - [`config`] - Immutable pricing settings snapshot
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, safe from any thread
//! 2. **Integer Money**: every reported amount is whole cents (i64)
//! 3. **Exact Intermediates**: division runs on `Decimal`, rounded once
//! 4. **No Failures in the Math**: edge values clamp or short-circuit;
//!    only the strict wrappers return errors
//!
//! ## Example Usage
//!
//! ```rust
//! use servipos_core::money::Money;
//! use servipos_core::repair::calculate_repair_total;
//! use servipos_core::types::{RepairCalculationInput, TaxRate};
//!
//! // Labor 110000 and parts 220000, both including 10% IVA
//! let input = RepairCalculationInput::new(Money::from_major(110_000), Money::from_major(220_000))
//!     .with_tax_rate(TaxRate::from_bps(1000));
//!
//! let result = calculate_repair_total(&input);
//! assert_eq!(result.subtotal, Money::from_major(300_000));
//! assert_eq!(result.tax_amount, Money::from_major(30_000));
//! assert_eq!(result.total, Money::from_major(330_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod config;
pub mod error;
pub mod line_item;
pub mod money;
pub mod repair;
pub mod rounding;
pub mod tax;
pub mod types;
pub mod validated;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::calculate_mixed_cart_total;
pub use config::PricingConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use line_item::calculate_total;
pub use money::Money;
pub use repair::{calculate_repair_total, create_repair_cart_item};
pub use rounding::{round2, round2_f64};
pub use tax::{add_tax, extract_tax};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines of one kind (products or repairs) in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps transactions a reasonable size.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single part on a repair, or product on a line.
///
/// ## Business Reason
/// Catches typing 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: i64 = 999;
