//! Product records.

use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// Image shown when a product record has none.
pub const DEFAULT_PRODUCT_IMAGE: &str = "assets/img/product-placeholder.png";

/// A product in the catalog. Read-only from the storefront's side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    #[serde(with = "money::as_decimal")]
    pub price: Money,
    /// Image path or URL.
    #[serde(default)]
    pub image: String,
    /// Category slug in kebab-case (e.g., "dried-fruit").
    pub category: String,
    /// Average star rating.
    #[serde(default)]
    pub stars: f32,
    /// Number of ratings.
    #[serde(default)]
    pub ratings: u32,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Create a product with the required fields; the rest default.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: String::new(),
            category: category.into(),
            stars: 0.0,
            ratings: 0,
            description: None,
        }
    }

    /// Image to display, falling back to the placeholder.
    pub fn image_or_default(&self) -> &str {
        if self.image.is_empty() {
            DEFAULT_PRODUCT_IMAGE
        } else {
            &self.image
        }
    }

    /// "4.5 stars • 120 Ratings" line shown under the name.
    pub fn rating_line(&self) -> String {
        format!("{} stars \u{2022} {} Ratings", self.stars, self.ratings)
    }

    /// Case-insensitive substring match against the name.
    pub fn name_contains(&self, needle_lowercase: &str) -> bool {
        self.name.to_lowercase().contains(needle_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_deserialize() {
        let json = r#"{
            "id": 3,
            "name": "Raw Honey",
            "price": 250.5,
            "image": "assets/img/honey.jpg",
            "category": "pantry",
            "stars": 4.5,
            "ratings": 12
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, Money::new(25050, Currency::PHP));
        assert_eq!(product.description, None);
        assert_eq!(product.rating_line(), "4.5 stars \u{2022} 12 Ratings");
    }

    #[test]
    fn test_image_fallback() {
        let product = Product::new(1u64, "Oats", Money::new(100, Currency::PHP), "grains");
        assert_eq!(product.image_or_default(), DEFAULT_PRODUCT_IMAGE);
    }

    #[test]
    fn test_name_contains() {
        let product = Product::new(1u64, "Rolled Oats", Money::new(100, Currency::PHP), "grains");
        assert!(product.name_contains("oat"));
        assert!(!product.name_contains("rice"));
    }
}
