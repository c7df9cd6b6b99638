//! # Register Configuration
//!
//! Configuration management for the register: store identity plus the menu.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TURO_STORE_NAME="Mang Kiko's Grill"                                 │
//! │     TURO_CURRENCY_SYMBOL="₱"                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/turo-pos/register.toml (Linux)                            │
//! │     ~/Library/Application Support/ph.turo.pos/register.toml (macOS)     │
//! │     Path override: TURO_CONFIG_PATH                                     │
//! │                                                                         │
//! │  3. Built-in Defaults (lowest priority)                                 │
//! │     Six-item canteen menu, store name "Turo POS"                        │
//! │                                                                         │
//! │  A missing or broken config file is NOT fatal. The register warns       │
//! │  and runs on the built-in menu.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # register.toml
//! [store]
//! name = "Mang Kiko's Grill"
//! currency_symbol = "₱"
//!
//! [[menu]]
//! name = "Burger"
//! price_centavos = 8000
//! category = "food"
//!
//! [[menu]]
//! name = "Coke"
//! price_centavos = 3000
//! category = "drink"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use turo_core::{Catalog, Category, Item, Money};

use crate::error::{RegisterError, RegisterResult};

// =============================================================================
// Store Settings
// =============================================================================

/// Identity and display settings for the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Store name shown in the session banner.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Currency symbol used for all printed amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_store_name() -> String {
    "Turo POS".to_string()
}

fn default_currency_symbol() -> String {
    "₱".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl StoreSettings {
    /// Formats a monetary amount with the store's currency symbol.
    ///
    /// Always two decimal places. ₱12.34, not ₱12.3 or ₱12.345.
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            amount.pesos().abs(),
            amount.centavo_part()
        )
    }
}

// =============================================================================
// Menu Entry
// =============================================================================

/// One configured menu line, as written in the TOML file.
///
/// Entries stay close to the file format (plain integer centavos) and
/// are converted into validated [`Item`]s by [`RegisterConfig::catalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Item name. Must be unique across the menu.
    pub name: String,

    /// Unit price in centavos (8000 = ₱80.00).
    pub price_centavos: i64,

    /// Menu grouping: "food" or "drink".
    pub category: Category,
}

/// The built-in canteen menu used when no config file exists.
fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            name: "Burger".to_string(),
            price_centavos: 8000,
            category: Category::Food,
        },
        MenuEntry {
            name: "Fries".to_string(),
            price_centavos: 5000,
            category: Category::Food,
        },
        MenuEntry {
            name: "Pizza".to_string(),
            price_centavos: 12000,
            category: Category::Food,
        },
        MenuEntry {
            name: "Coke".to_string(),
            price_centavos: 3000,
            category: Category::Drink,
        },
        MenuEntry {
            name: "IcedTea".to_string(),
            price_centavos: 4000,
            category: Category::Drink,
        },
        MenuEntry {
            name: "Water".to_string(),
            price_centavos: 2000,
            category: Category::Drink,
        },
    ]
}

// =============================================================================
// Main Register Configuration
// =============================================================================

/// Complete register configuration.
///
/// ## Example Config File
/// ```toml
/// [store]
/// name = "Mang Kiko's Grill"
/// currency_symbol = "₱"
///
/// [[menu]]
/// name = "Burger"
/// price_centavos = 8000
/// category = "food"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterConfig {
    /// Store identity and display settings.
    #[serde(default)]
    pub store: StoreSettings,

    /// The menu. Defaults to the built-in canteen menu.
    #[serde(default = "default_menu")]
    pub menu: Vec<MenuEntry>,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        RegisterConfig {
            store: StoreSettings::default(),
            menu: default_menu(),
        }
    }
}

impl RegisterConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Built-in defaults
    /// 2. Config file (register.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> RegisterResult<Self> {
        let mut config = Self::default();

        // Try to load from config file
        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading register config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| RegisterError::ConfigLoadFailed(e.to_string()))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using built-in defaults");
            }
        }

        // Override with environment variables
        config.apply_env_overrides();

        // Validate the configuration
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns the built-in defaults if load fails.
    ///
    /// A bad config file should never stop the register from opening,
    /// so failures are logged and the canteen menu takes over.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load register config: {}. Using built-in menu.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> RegisterResult<()> {
        if self.menu.is_empty() {
            return Err(RegisterError::InvalidConfig(
                "menu must contain at least one item".into(),
            ));
        }

        // Catalog construction enforces the per-item rules
        self.catalog()?;

        Ok(())
    }

    /// Builds the validated catalog from the configured menu.
    pub fn catalog(&self) -> RegisterResult<Catalog> {
        let items = self
            .menu
            .iter()
            .map(|entry| {
                Item::new(
                    entry.name.clone(),
                    Money::from_centavos(entry.price_centavos),
                    entry.category,
                )
            })
            .collect();

        Ok(Catalog::new(items)?)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("TURO_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Ok(symbol) = std::env::var("TURO_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.store.currency_symbol = symbol;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        // Explicit override first (useful for tests and odd deployments)
        if let Ok(path) = std::env::var("TURO_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        directories::ProjectDirs::from("ph", "turo", "pos")
            .map(|dirs| dirs.config_dir().join("register.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegisterConfig::default();
        assert_eq!(config.store.name, "Turo POS");
        assert_eq!(config.store.currency_symbol, "₱");

        assert_eq!(config.menu.len(), 6);
        assert_eq!(config.menu[0].name, "Burger");
        assert_eq!(config.menu[0].price_centavos, 8000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catalog_from_default_menu() {
        let catalog = RegisterConfig::default().catalog().unwrap();

        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get("Water").unwrap().unit_price.centavos(), 2000);
        assert_eq!(catalog.get("Pizza").unwrap().category, Category::Food);
        assert_eq!(catalog.get("IcedTea").unwrap().category, Category::Drink);
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_str = r#"
            [store]
            name = "Mang Kiko's Grill"

            [[menu]]
            name = "Silog"
            price_centavos = 9500
            category = "food"

            [[menu]]
            name = "Gulaman"
            price_centavos = 2500
            category = "drink"
        "#;

        let config: RegisterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.name, "Mang Kiko's Grill");
        // Symbol not set in file, so the serde default applies
        assert_eq!(config.store.currency_symbol, "₱");
        assert_eq!(config.menu.len(), 2);
        assert_eq!(config.menu[1].price_centavos, 2500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml_without_menu_uses_builtin() {
        let config: RegisterConfig = toml::from_str("[store]\nname = \"Kiosk 2\"\n").unwrap();
        assert_eq!(config.store.name, "Kiosk 2");
        assert_eq!(config.menu.len(), 6);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let toml_str = r#"
            [[menu]]
            name = "Halo-halo"
            price_centavos = 6000
            category = "dessert"
        "#;

        assert!(toml::from_str::<RegisterConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_menu() {
        let mut config = RegisterConfig::default();
        config.menu.clear();

        let err = config.validate().unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_validate_rejects_duplicate_menu_names() {
        let mut config = RegisterConfig::default();
        config.menu.push(MenuEntry {
            name: "Burger".to_string(),
            price_centavos: 9500,
            category: Category::Food,
        });

        let err = config.validate().unwrap_err();
        assert!(matches!(err, RegisterError::InvalidMenu(_)));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut config = RegisterConfig::default();
        config.menu[0].price_centavos = -100;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_format_currency() {
        let store = StoreSettings::default();

        assert_eq!(store.format_currency(Money::from_centavos(1234)), "₱12.34");
        assert_eq!(store.format_currency(Money::from_centavos(21280)), "₱212.80");
        assert_eq!(store.format_currency(Money::zero()), "₱0.00");
        assert_eq!(store.format_currency(Money::from_centavos(-550)), "-₱5.50");

        let pesos_spelled = StoreSettings {
            name: "Test".to_string(),
            currency_symbol: "PHP ".to_string(),
        };
        assert_eq!(
            pesos_spelled.format_currency(Money::from_centavos(8000)),
            "PHP 80.00"
        );
    }
}
