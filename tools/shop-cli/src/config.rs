//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_commerce::ShopConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Where the session store lives.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Product catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .shop
            .validate()
            .with_context(|| format!("Invalid [shop] settings in {}", path))?;
        Ok(config)
    }
}

/// Session store location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file backing the session store (default: .organic-shop/session.json).
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".organic-shop").join("session.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Catalog source. The bundled catalog is used when no path is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON product list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    r#"# Organic Shop configuration

[shop]
# Flat shipping fee in centavos (49.00)
shipping_fee_cents = 4900
page_size = 10
storage_namespace = "organic_shop"

[storage]
path = ".organic-shop/session.json"

[catalog]
# path = "products.json"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.shop, ShopConfig::default());
        assert_eq!(config.storage.path, default_storage_path());
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("shop.json");
        std::fs::write(&json, r#"{"shop": {"page_size": 4}}"#).unwrap();
        let config = CliConfig::load(json.to_str().unwrap()).unwrap();
        assert_eq!(config.shop.page_size, 4);
        assert_eq!(config.shop.shipping_fee_cents, 4900);

        let toml_path = dir.path().join("shop.toml");
        std::fs::write(&toml_path, "[storage]\npath = \"/tmp/s.json\"\n").unwrap();
        let config = CliConfig::load(toml_path.to_str().unwrap()).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn test_load_rejects_non_positive_fee() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("shop.json");
        std::fs::write(&json, r#"{"shop": {"shipping_fee_cents": 0}}"#).unwrap();
        assert!(CliConfig::load(json.to_str().unwrap()).is_err());

        let toml_path = dir.path().join("shop.toml");
        std::fs::write(&toml_path, "[shop]\nshipping_fee_cents = -4900\n").unwrap();
        assert!(CliConfig::load(toml_path.to_str().unwrap()).is_err());

        std::fs::write(&toml_path, "[shop]\npage_size = 0\n").unwrap();
        assert!(CliConfig::load(toml_path.to_str().unwrap()).is_err());
    }
}
