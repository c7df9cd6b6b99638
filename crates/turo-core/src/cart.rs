//! # Cart Module
//!
//! The active order: what the customer is buying right now.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Operator Action           Register Command        Cart State Change    │
//! │  ───────────────           ────────────────        ─────────────────    │
//! │                                                                         │
//! │  Pick menu item ─────────► add_to_cart() ────────► merge or append     │
//! │                                                                         │
//! │  Clear Cart ─────────────► clear_cart() ─────────► lines.clear()       │
//! │                                                                         │
//! │  View order ─────────────► cart_view() ──────────► (read only)         │
//! │                                                                         │
//! │  Checkout ───────────────► checkout() ───────────► (read only)         │
//! │                                                                         │
//! │  NOTE: There is deliberately no removal or decrement operation.         │
//! │        Mis-keyed orders are fixed by clearing and re-ringing.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals
//! Totals are never stored. `subtotal()`, `tax()` and `total()` recompute
//! from the lines on every call, so a view can never go stale.
//!
//! Tax applies once to the aggregate subtotal, not per line. Per-line
//! rounding can drift a centavo away from the aggregate figure, and the
//! receipt must match `subtotal × rate` exactly.

use serde::Serialize;

use crate::catalog::Item;
use crate::money::Money;
use crate::VAT_RATE;

// =============================================================================
// Cart Line
// =============================================================================

/// One line of the order: an item snapshot plus a quantity.
///
/// ## Snapshot Semantics
/// The line stores its own copy of the item, frozen at add time. If the
/// catalog were rebuilt with new prices mid-order, rung-up lines keep
/// the price the customer was quoted.
///
/// ## Quantity
/// Starts at 1 and only ever increments. Lines are created and mutated
/// by [`Cart`] alone, which is what keeps the invariant airtight.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    item: Item,
    quantity: i64,
}

impl CartLine {
    fn new(item: Item) -> Self {
        CartLine { item, quantity: 1 }
    }

    fn increment(&mut self) {
        self.quantity += 1;
    }

    /// The item snapshot captured when the line was created.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Units of the item on this line. Always >= 1.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Line subtotal: unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.item.unit_price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by item name (adding a repeat merges into the
///   existing line)
/// - Lines keep insertion order; merging never reorders
/// - Every quantity is >= 1
///
/// ## Example
/// ```rust
/// use turo_core::cart::Cart;
/// use turo_core::catalog::{Category, Item};
/// use turo_core::money::Money;
///
/// let burger = Item::new("Burger", Money::from_pesos(80), Category::Food);
/// let coke = Item::new("Coke", Money::from_pesos(30), Category::Drink);
///
/// let mut cart = Cart::new();
/// cart.add_item(&burger);
/// cart.add_item(&coke);
/// cart.add_item(&burger); // merges into the first line
///
/// assert_eq!(cart.line_count(), 2);
/// assert_eq!(cart.subtotal().centavos(), 19000); // ₱190.00
/// assert_eq!(cart.tax().centavos(), 2280);       // ₱22.80
/// assert_eq!(cart.total().centavos(), 21280);    // ₱212.80
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of an item to the cart.
    ///
    /// ## Behavior
    /// - If a line with the same item name exists: increments its quantity
    /// - Otherwise: appends a new line with quantity 1
    ///
    /// Merging matches on name only. If the given item carries a
    /// different price than the existing line, the first snapshot wins.
    /// Catalogs enforce unique names, so that case never arises for
    /// items resolved through one catalog.
    pub fn add_item(&mut self, item: &Item) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.name == item.name) {
            line.increment();
            return;
        }

        self.lines.push(CartLine::new(item.clone()));
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity()).sum()
    }

    /// Calculates the subtotal (before tax).
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|line| line.subtotal()).sum()
    }

    /// Calculates VAT on the aggregate subtotal.
    pub fn tax(&self) -> Money {
        self.subtotal().calculate_tax(VAT_RATE)
    }

    /// Calculates the grand total (subtotal + tax).
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
