//! # turo-core: Pure Business Logic for Turo POS
//!
//! This crate is the **heart** of Turo POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Turo POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal (stdin/stdout)                        │   │
//! │  │    Menu screen ──► Cart table ──► Purchase summary              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Register Commands (turo-register)               │   │
//! │  │    add_to_cart, clear_cart, cart_view, checkout                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ turo-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │  Catalog  │  │  TaxRate  │  │ CartLine  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO CONFIG FILES • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Sellable items and the validated catalog
//! - [`cart`] - The active order and its derived totals
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Terminal, file system and clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use turo_core::cart::Cart;
//! use turo_core::catalog::{Catalog, Category, Item};
//! use turo_core::money::Money;
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("Burger", Money::from_pesos(80), Category::Food),
//!     Item::new("Coke", Money::from_pesos(30), Category::Drink),
//! ])
//! .unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(catalog.get("Burger").unwrap());
//! cart.add_item(catalog.get("Coke").unwrap());
//! cart.add_item(catalog.get("Burger").unwrap());
//!
//! // ₱190.00 + 12% VAT = ₱212.80
//! assert_eq!(cart.total().centavos(), 21280);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use turo_core::Money` instead of
// `use turo_core::money::Money`

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Category, Item};
pub use error::ValidationError;
pub use money::{Money, TaxRate};
pub use validation::ValidationResult;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The VAT rate applied to every order: 12%.
///
/// ## Why a constant?
/// The register runs in one jurisdiction with one flat rate. Baking the
/// rate in keeps totals reproducible everywhere the crate is used.
/// Per-store rates would move this into the register configuration.
pub const VAT_RATE: TaxRate = TaxRate::from_bps(1200);
