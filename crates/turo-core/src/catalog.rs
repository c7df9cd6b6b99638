//! # Catalog Module
//!
//! The item catalog: everything the register is allowed to sell.
//!
//! ## Domain Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Domain                                   │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                      │
//! │  │     Catalog     │  owns    │      Item       │                      │
//! │  │  ─────────────  │ 1 ─── n  │  ─────────────  │                      │
//! │  │  items (Vec)    │          │  name (unique)  │                      │
//! │  │  get(name)      │          │  unit_price     │                      │
//! │  └─────────────────┘          │  category       │                      │
//! │                               └────────┬────────┘                      │
//! │                                        │                               │
//! │                               ┌────────┴────────┐                      │
//! │                               │    Category     │                      │
//! │                               │  ─────────────  │                      │
//! │                               │  Food           │                      │
//! │                               │  Drink          │                      │
//! │                               └─────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Item names are unique within a catalog (they key cart merging)
//! - Item names are never blank
//! - Unit prices are never negative
//!
//! Construction goes through [`Catalog::new`], which enforces all three.
//! Code holding a `Catalog` never re-checks them.
//!
//! ## Usage
//! ```rust
//! use turo_core::catalog::{Catalog, Category, Item};
//! use turo_core::money::Money;
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("Burger", Money::from_pesos(80), Category::Food),
//!     Item::new("Coke", Money::from_pesos(30), Category::Drink),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get("Coke").unwrap().unit_price, Money::from_centavos(3000));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_unit_price, ValidationResult};

// =============================================================================
// Category
// =============================================================================

/// Classification tag for a catalog item.
///
/// Categories carry no pricing behavior. They exist for menu grouping
/// and display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Prepared food.
    Food,
    /// Bottled or fountain drinks.
    Drink,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Food => write!(f, "food"),
            Category::Drink => write!(f, "drink"),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A sellable item.
///
/// Items are immutable values. The cart copies whatever it needs at
/// add time, so an `Item` never changes after the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name shown on the menu and the receipt.
    /// Unique within a catalog.
    pub name: String,

    /// Price per unit in centavos.
    pub unit_price: Money,

    /// Menu grouping tag.
    pub category: Category,
}

impl Item {
    /// Creates an item.
    ///
    /// Validation happens at catalog construction, not here, so tests
    /// and callers can build items fluently.
    pub fn new(name: impl Into<String>, unit_price: Money, category: Category) -> Self {
        Item {
            name: name.into(),
            unit_price,
            category,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An ordered collection of sellable items, keyed by unique name.
///
/// ## Why Ordered?
/// The menu renders in definition order, and operators learn positions.
/// A `HashMap` would scramble the menu between runs.
///
/// ## Lookup
/// [`Catalog::get`] is an exact-name lookup. Friendlier matching
/// (case folding, menu numbers) belongs to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, validating every item.
    ///
    /// ## Errors
    /// - [`ValidationError::Required`] for a blank item name
    /// - [`ValidationError::MustBeNonNegative`] for a negative unit price
    /// - [`ValidationError::Duplicate`] when two items share a name
    pub fn new(items: Vec<Item>) -> ValidationResult<Self> {
        let mut seen: HashSet<String> = HashSet::with_capacity(items.len());

        for item in &items {
            validate_item_name(&item.name)?;
            validate_unit_price(item.unit_price)?;

            if !seen.insert(item.name.clone()) {
                return Err(ValidationError::Duplicate {
                    field: "item name".to_string(),
                    value: item.name.clone(),
                });
            }
        }

        Ok(Catalog { items })
    }

    /// Returns all items in definition order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by exact name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> Item {
        Item::new("Burger", Money::from_pesos(80), Category::Food)
    }

    fn coke() -> Item {
        Item::new("Coke", Money::from_pesos(30), Category::Drink)
    }

    #[test]
    fn test_catalog_preserves_definition_order() {
        let catalog = Catalog::new(vec![burger(), coke()]).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].name, "Burger");
        assert_eq!(catalog.items()[1].name, "Coke");
    }

    #[test]
    fn test_get_by_exact_name() {
        let catalog = Catalog::new(vec![burger(), coke()]).unwrap();

        let item = catalog.get("Coke").unwrap();
        assert_eq!(item.unit_price.centavos(), 3000);
        assert_eq!(item.category, Category::Drink);

        assert!(catalog.get("Sushi").is_none());
        // Exact match only; folding happens at the register boundary
        assert!(catalog.get("coke").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let duplicate = Item::new("Burger", Money::from_pesos(95), Category::Food);
        let err = Catalog::new(vec![burger(), duplicate]).unwrap_err();

        assert!(matches!(err, ValidationError::Duplicate { .. }));
        assert_eq!(err.to_string(), "item name 'Burger' already exists");
    }

    #[test]
    fn test_blank_name_rejected() {
        let blank = Item::new("   ", Money::from_pesos(10), Category::Food);
        let err = Catalog::new(vec![blank]).unwrap_err();

        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_negative_price_rejected() {
        let invalid = Item::new("Burger", Money::from_centavos(-1), Category::Food);
        let err = Catalog::new(vec![invalid]).unwrap_err();

        assert!(matches!(err, ValidationError::MustBeNonNegative { .. }));
    }

    #[test]
    fn test_zero_price_allowed() {
        let freebie = Item::new("Water Refill", Money::zero(), Category::Drink);
        let catalog = Catalog::new(vec![freebie]).unwrap();

        assert_eq!(catalog.get("Water Refill").unwrap().unit_price, Money::zero());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get("Burger").is_none());
    }

    #[test]
    fn test_category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(Category::Food).unwrap(),
            serde_json::json!("food")
        );
        assert_eq!(
            serde_json::to_value(Category::Drink).unwrap(),
            serde_json::json!("drink")
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Food.to_string(), "food");
        assert_eq!(Category::Drink.to_string(), "drink");
    }
}
