//! # Error Types
//!
//! Domain-specific error types for turo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  turo-core errors (this file)                                           │
//! │  └── ValidationError  - Catalog construction failures                   │
//! │                                                                         │
//! │  Register errors (in app)                                               │
//! │  └── RegisterError    - What the terminal session sees                  │
//! │                                                                         │
//! │  Flow: ValidationError → RegisterError → Terminal notice                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog validation errors.
///
/// These errors occur when a menu definition does not meet requirements.
/// The catalog rejects bad definitions up front so the cart can rely on
/// every item being well formed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Duplicate value (e.g., duplicate item name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "item name".to_string(),
        };
        assert_eq!(err.to_string(), "item name is required");

        let err = ValidationError::MustBeNonNegative {
            field: "unit price".to_string(),
        };
        assert_eq!(err.to_string(), "unit price must not be negative");

        let err = ValidationError::Duplicate {
            field: "item name".to_string(),
            value: "Burger".to_string(),
        };
        assert_eq!(err.to_string(), "item name 'Burger' already exists");
    }
}
