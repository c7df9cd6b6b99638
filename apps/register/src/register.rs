//! # Register Commands
//!
//! The command layer between the terminal and the core cart.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                    │
//! │  │  Empty   │────►│ In Cart  │────►│   Purchase   │                    │
//! │  │  Cart    │     │          │     │   Summary    │                    │
//! │  └──────────┘     └──────────┘     └──────────────┘                    │
//! │       ▲                │                  │                             │
//! │       │           add_to_cart         checkout                          │
//! │       │                │            (cart untouched)                    │
//! │       │                ▼                  │                             │
//! │       └─────────── clear_cart ◄───────────┘                             │
//! │                  (operator decides)                                     │
//! │                                                                         │
//! │  checkout() reads the cart, it never drains it. Starting the next      │
//! │  order is an explicit clear_cart().                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns a fresh [`CartView`] (or a [`PurchaseSummary`])
//! so the caller re-renders from scratch instead of patching its screen.

use chrono::Utc;
use tracing::{debug, info};

use turo_core::{Cart, Catalog};

use crate::config::StoreSettings;
use crate::error::{RegisterError, RegisterResult};
use crate::view::{CartView, PurchaseSummary};

/// A running register: one catalog, one store, one active cart.
///
/// ## Ownership
/// The register owns the cart outright and commands take `&mut self`.
/// The session is single-operator and synchronous, so the borrow
/// checker is the only concurrency control needed.
pub struct Register {
    catalog: Catalog,
    store: StoreSettings,
    cart: Cart,
}

impl Register {
    /// Opens a register with a validated catalog and store settings.
    pub fn new(catalog: Catalog, store: StoreSettings) -> Self {
        Register {
            catalog,
            store,
            cart: Cart::new(),
        }
    }

    /// The register's catalog, for menu rendering and lookups.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The store settings, for banner text and currency formatting.
    pub fn store(&self) -> &StoreSettings {
        &self.store
    }

    /// Returns a snapshot of the current cart.
    pub fn cart_view(&self) -> CartView {
        debug!("cart_view command");
        CartView::from(&self.cart)
    }

    /// Adds one unit of the named item to the cart.
    ///
    /// ## Behavior
    /// - Name matching is case-insensitive ("burger" rings up "Burger")
    /// - A repeat of an item already in the cart merges into its line
    ///
    /// ## Errors
    /// [`RegisterError::UnknownItem`] if the name is not on the menu.
    /// The cart is left untouched in that case.
    pub fn add_to_cart(&mut self, name: &str) -> RegisterResult<CartView> {
        debug!(item = %name, "add_to_cart command");

        let item = self
            .catalog
            .items()
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| RegisterError::UnknownItem(name.to_string()))?;

        self.cart.add_item(item);
        Ok(CartView::from(&self.cart))
    }

    /// Clears the cart and returns the (empty) view.
    pub fn clear_cart(&mut self) -> CartView {
        debug!("clear_cart command");

        self.cart.clear();
        CartView::from(&self.cart)
    }

    /// Produces the purchase summary for the current cart.
    ///
    /// The cart is read, not drained: the order stays rung up until the
    /// operator clears it.
    ///
    /// ## Errors
    /// [`RegisterError::EmptyCart`] when there is nothing to check out.
    pub fn checkout(&self) -> RegisterResult<PurchaseSummary> {
        debug!("checkout command");

        if self.cart.is_empty() {
            return Err(RegisterError::EmptyCart);
        }

        let view = CartView::from(&self.cart);
        let summary = PurchaseSummary {
            store_name: self.store.name.clone(),
            lines: view.lines,
            totals: view.totals,
            issued_at: Utc::now(),
        };

        info!(
            lines = summary.totals.line_count,
            total_quantity = summary.totals.total_quantity,
            total_centavos = summary.totals.total_centavos,
            "Purchase summary issued"
        );

        Ok(summary)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
