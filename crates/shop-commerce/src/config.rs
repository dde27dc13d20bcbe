//! Shop-wide settings shared by the cart engine, catalog listing and views.

use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use shop_cache::cache_key;

/// Storefront configuration. Every field has a default, so a partial
/// `[shop]` table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Flat shipping fee in minor units, charged when the cart has items.
    pub shipping_fee_cents: i64,
    /// Products per catalog page.
    pub page_size: usize,
    /// Prefix for every storage key the shop writes.
    pub storage_namespace: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shipping_fee_cents: 4900,
            page_size: 10,
            storage_namespace: "organic_shop".to_string(),
        }
    }
}

impl ShopConfig {
    /// The flat shipping fee as money, in the shop currency.
    pub fn shipping_fee(&self) -> Money {
        Money::new(self.shipping_fee_cents, Currency::default())
    }

    /// Reject settings that break the order totals or paging. The fee
    /// must be positive so that it is zero only for an empty cart.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.shipping_fee_cents <= 0 {
            return Err(CommerceError::InvalidConfig(format!(
                "shipping_fee_cents must be positive, got {}",
                self.shipping_fee_cents
            )));
        }
        if self.page_size == 0 {
            return Err(CommerceError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.storage_namespace.trim().is_empty() {
            return Err(CommerceError::InvalidConfig(
                "storage_namespace must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Storage key of the persisted cart.
    pub fn cart_key(&self) -> String {
        cache_key!(self.storage_namespace.as_str(), "cart")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.shipping_fee(), Money::new(4900, Currency::PHP));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.cart_key(), "organic_shop:cart");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ShopConfig = serde_json::from_str(r#"{"page_size": 4}"#).unwrap();
        assert_eq!(config.page_size, 4);
        assert_eq!(config.shipping_fee_cents, 4900);
        assert_eq!(config.storage_namespace, "organic_shop");
    }

    #[test]
    fn test_validate() {
        assert!(ShopConfig::default().validate().is_ok());

        for fee in [0, -100] {
            let config = ShopConfig {
                shipping_fee_cents: fee,
                ..ShopConfig::default()
            };
            assert!(matches!(config.validate(), Err(CommerceError::InvalidConfig(_))));
        }

        let config = ShopConfig {
            page_size: 0,
            ..ShopConfig::default()
        };
        assert!(matches!(config.validate(), Err(CommerceError::InvalidConfig(_))));
    }
}
