//! # Cart Views
//!
//! Serializable snapshots of the cart for the presentation layer.
//!
//! ## Why Views?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       View Pipeline                                     │
//! │                                                                         │
//! │   Cart (core, owns state)                                               │
//! │        │                                                                │
//! │        │  every command returns a fresh snapshot                        │
//! │        ▼                                                                │
//! │   CartView { lines, totals }                                            │
//! │        │                                                                │
//! │        ├──► terminal renderer (this app)                                │
//! │        └──► serde_json (logs, future shells)                            │
//! │                                                                         │
//! │   The renderer never reads the Cart directly. Whatever is on            │
//! │   screen always came from one complete snapshot, so a partially         │
//! │   updated display cannot exist.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts stay integer centavos here. Formatting into "₱80.00" happens
//! in the renderer via [`StoreSettings::format_currency`].
//!
//! [`StoreSettings::format_currency`]: crate::config::StoreSettings::format_currency

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use turo_core::{Cart, CartLine};

// =============================================================================
// Line View
// =============================================================================

/// One cart line, flattened for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub name: String,
    pub quantity: i64,
    pub unit_price_centavos: i64,
    pub subtotal_centavos: i64,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        CartLineView {
            name: line.item().name.clone(),
            quantity: line.quantity(),
            unit_price_centavos: line.item().unit_price.centavos(),
            subtotal_centavos: line.subtotal().centavos(),
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Cart totals summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_centavos: i64,
    pub tax_centavos: i64,
    pub total_centavos: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal_centavos: cart.subtotal().centavos(),
            tax_centavos: cart.tax().centavos(),
            total_centavos: cart.total().centavos(),
        }
    }
}

// =============================================================================
// Cart View
// =============================================================================

/// Full cart view: lines plus totals.
///
/// Returned by every cart command so the screen can re-render the whole
/// order after each change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            totals: CartTotals::from(cart),
        }
    }
}

impl CartView {
    /// Checks if the viewed cart had no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Purchase Summary
// =============================================================================

/// The checkout summary presented to the operator.
///
/// Mirrors what a printed receipt would carry: store, time, lines and
/// totals. Producing a summary does not consume the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSummary {
    pub store_name: String,
    pub lines: Vec<CartLineView>,
    pub totals: CartTotals,
    pub issued_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use turo_core::{Category, Item, Money};

    fn sample_cart() -> Cart {
        let burger = Item::new("Burger", Money::from_pesos(80), Category::Food);
        let coke = Item::new("Coke", Money::from_pesos(30), Category::Drink);

        let mut cart = Cart::new();
        cart.add_item(&burger);
        cart.add_item(&coke);
        cart.add_item(&burger);
        cart
    }

    #[test]
    fn test_cart_view_mirrors_cart() {
        let cart = sample_cart();
        let view = CartView::from(&cart);

        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].name, "Burger");
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.lines[0].unit_price_centavos, 8000);
        assert_eq!(view.lines[0].subtotal_centavos, 16000);
        assert_eq!(view.lines[1].name, "Coke");

        assert_eq!(view.totals.line_count, 2);
        assert_eq!(view.totals.total_quantity, 3);
        assert_eq!(view.totals.subtotal_centavos, 19000);
        assert_eq!(view.totals.tax_centavos, 2280);
        assert_eq!(view.totals.total_centavos, 21280);
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&Cart::new());

        assert!(view.is_empty());
        assert_eq!(view.totals.line_count, 0);
        assert_eq!(view.totals.total_centavos, 0);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = CartView::from(&sample_cart());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["lines"][0]["unitPriceCentavos"], 8000);
        assert_eq!(json["lines"][0]["subtotalCentavos"], 16000);
        assert_eq!(json["totals"]["subtotalCentavos"], 19000);
        assert_eq!(json["totals"]["taxCentavos"], 2280);
        assert_eq!(json["totals"]["totalCentavos"], 21280);
    }

    #[test]
    fn test_purchase_summary_serializes_camel_case() {
        let cart = sample_cart();
        let summary = PurchaseSummary {
            store_name: "Turo POS".to_string(),
            lines: CartView::from(&cart).lines,
            totals: CartTotals::from(&cart),
            issued_at: Utc::now(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["storeName"], "Turo POS");
        assert_eq!(json["totals"]["totalCentavos"], 21280);
        assert!(json["issuedAt"].is_string());
    }
}
