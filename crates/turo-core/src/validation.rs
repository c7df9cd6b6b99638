//! # Validation Module
//!
//! Input validation utilities for Turo POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Config deserialization (register app)                        │
//! │  ├── Type checks (string prices rejected by serde)                     │
//! │  └── Unknown categories rejected                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (catalog construction)                           │
//! │  ├── Names present and non-blank                                       │
//! │  └── Prices non-negative                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog invariants                                           │
//! │  └── Name uniqueness across the whole menu                             │
//! │                                                                         │
//! │  Everything past the catalog boundary can assume well-formed items     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use turo_core::money::Money;
//! use turo_core::validation::{validate_item_name, validate_unit_price};
//!
//! assert!(validate_item_name("Burger").is_ok());
//! assert!(validate_unit_price(Money::from_pesos(80)).is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Example
/// ```rust
/// use turo_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Iced Tea").is_ok());
/// assert!(validate_item_name("").is_err());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use turo_core::money::Money;
/// use turo_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_centavos(8000)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_centavos(-100)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Burger").is_ok());
        assert!(validate_item_name("Iced Tea").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::from_centavos(8000)).is_ok());
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_centavos(-100)).is_err());
    }
}
