//! Catalog lookups.

use crate::catalog::{category_counts, CategoryCount, Product, ALL_CATEGORY};
use crate::error::CommerceError;
use crate::ids::ProductId;
use std::collections::HashSet;
use tracing::debug;

const SEED_CATALOG: &str = include_str!("../../data/products.json");

/// Read-only product source.
///
/// Implementors only provide the product list; every query is derived from
/// it and preserves catalog order.
pub trait Catalog {
    /// Every product, in catalog order.
    fn all_products(&self) -> &[Product];

    /// Look up a product by id.
    fn find_product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.all_products().iter().find(|p| p.id == id)
    }

    /// Sidebar categories with counts, "all" first.
    fn category_counts(&self) -> Vec<CategoryCount> {
        category_counts(self.all_products())
    }

    /// Products in `slug`. [`ALL_CATEGORY`] selects everything.
    fn filter_by_category(&self, slug: &str) -> Vec<&Product> {
        self.all_products()
            .iter()
            .filter(|p| slug == ALL_CATEGORY || p.category == slug)
            .collect()
    }

    /// Case-insensitive name search. A blank query matches nothing.
    fn search_by_name(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.all_products()
            .iter()
            .filter(|p| p.name_contains(&needle))
            .collect()
    }

    /// Other products in the same category as `id`.
    fn similar_products(&self, id: ProductId) -> Vec<&Product> {
        let Some(selected) = self.find_product_by_id(id) else {
            return Vec::new();
        };
        self.all_products()
            .iter()
            .filter(|p| p.category == selected.category && p.id != selected.id)
            .collect()
    }
}

/// An in-memory catalog loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let catalog = Self::new(products)?;
        debug!(products = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The bundled organic shop catalog.
    pub fn seed() -> Result<Self, CommerceError> {
        Self::from_json(SEED_CATALOG)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn all_products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalog() -> StaticCatalog {
        let p = |id: u64, name: &str, category: &str| {
            Product::new(id, name, Money::new(10000, Currency::PHP), category)
        };
        StaticCatalog::new(vec![
            p(1, "Arabica Coffee Beans", "coffee"),
            p(2, "Green Tea", "tea"),
            p(3, "Decaf Coffee", "coffee"),
            p(4, "Dried Mango", "dried-fruit"),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_product_by_id() {
        let catalog = catalog();
        assert_eq!(
            catalog.find_product_by_id(ProductId::new(2)).map(|p| p.name.as_str()),
            Some("Green Tea")
        );
        assert!(catalog.find_product_by_id(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = catalog();
        let coffee: Vec<u64> = catalog
            .filter_by_category("coffee")
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(coffee, vec![1, 3]);
        assert_eq!(catalog.filter_by_category(ALL_CATEGORY).len(), 4);
        assert!(catalog.filter_by_category("spices").is_empty());
    }

    #[test]
    fn test_search_by_name() {
        let catalog = catalog();
        let hits: Vec<u64> = catalog
            .search_by_name("  COFFEE ")
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(hits, vec![1, 3]);
        assert!(catalog.search_by_name("   ").is_empty());
        assert!(catalog.search_by_name("kale").is_empty());
    }

    #[test]
    fn test_similar_products() {
        let catalog = catalog();
        let similar: Vec<u64> = catalog
            .similar_products(ProductId::new(1))
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(similar, vec![3]);
        assert!(catalog.similar_products(ProductId::new(4)).is_empty());
        assert!(catalog.similar_products(ProductId::new(99)).is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 1, "category": "tea"},
            {"id": 1, "name": "B", "price": 2, "category": "tea"}
        ]"#;
        let err = StaticCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCatalog(_)));
    }

    #[test]
    fn test_seed_catalog_loads() {
        let catalog = StaticCatalog::seed().unwrap();
        assert!(catalog.len() > 10);
        assert!(catalog.find_product_by_id(ProductId::new(1)).is_some());
    }
}
