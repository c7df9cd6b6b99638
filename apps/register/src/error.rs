//! # Register Error Types
//!
//! Error types for register operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Register Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │ Operator Notice │  │  Configuration  │  │       Terminal          │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  UnknownItem    │  │  InvalidMenu    │  │  Io                     │ │
//! │  │  EmptyCart      │  │  InvalidConfig  │  │                         │ │
//! │  │                 │  │  ConfigLoad     │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Notices are shown at the prompt and the session continues.            │
//! │  Configuration errors fall back to the built-in menu (with a warn).    │
//! │  Terminal errors end the session.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use turo_core::ValidationError;

/// Result type alias for register operations.
pub type RegisterResult<T> = Result<T, RegisterError>;

/// Register error type covering all command and session failures.
///
/// ## Design Principles
/// - Each variant includes enough context for the operator or the log
/// - Notices are ordinary variants, not a separate channel
/// - Display strings are exactly what the terminal prints
#[derive(Debug, Error)]
pub enum RegisterError {
    // =========================================================================
    // Operator Notices
    // =========================================================================
    /// The requested item is not on the menu.
    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty!")]
    EmptyCart,

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// The configured menu failed catalog validation.
    #[error("Invalid menu: {0}")]
    InvalidMenu(#[from] ValidationError),

    /// The register configuration is unusable for another reason.
    #[error("Invalid register configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Terminal Errors
    // =========================================================================
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for RegisterError {
    fn from(err: toml::de::Error) -> Self {
        RegisterError::ConfigLoadFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl RegisterError {
    /// Returns true if this error is an operator notice.
    ///
    /// Notices are printed at the prompt and the session keeps running.
    /// Everything else aborts the session.
    pub fn is_notice(&self) -> bool {
        matches!(
            self,
            RegisterError::UnknownItem(_) | RegisterError::EmptyCart
        )
    }

    /// Returns true if this error indicates a configuration problem.
    ///
    /// Configuration problems are non-fatal at startup: the register
    /// logs them and falls back to the built-in menu.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RegisterError::InvalidMenu(_)
                | RegisterError::InvalidConfig(_)
                | RegisterError::ConfigLoadFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_errors() {
        assert!(RegisterError::UnknownItem("Sushi".into()).is_notice());
        assert!(RegisterError::EmptyCart.is_notice());

        assert!(!RegisterError::InvalidConfig("empty menu".into()).is_notice());
        assert!(!RegisterError::ConfigLoadFailed("bad toml".into()).is_notice());
    }

    #[test]
    fn test_config_errors() {
        assert!(RegisterError::InvalidConfig("empty menu".into()).is_config_error());
        assert!(RegisterError::ConfigLoadFailed("bad toml".into()).is_config_error());

        assert!(!RegisterError::EmptyCart.is_config_error());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(RegisterError::EmptyCart.to_string(), "Cart is empty!");

        let err = RegisterError::UnknownItem("Sushi".into());
        assert_eq!(err.to_string(), "Unknown menu item: Sushi");
    }
}
