//! Category listing derived from the product list.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Pseudo-category selecting every product.
pub const ALL_CATEGORY: &str = "all";

/// A category entry in the sidebar with its product count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCount {
    /// Category slug (e.g., "dried-fruit").
    pub slug: String,
    /// Display name (e.g., "Dried Fruit").
    pub name: String,
    /// Number of products in this category.
    pub count: usize,
}

impl CategoryCount {
    /// Whether this entry is the "all" pseudo-category.
    pub fn is_all(&self) -> bool {
        self.slug == ALL_CATEGORY
    }
}

/// Title-case a kebab-case slug: "dried-fruit" becomes "Dried Fruit".
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Count products per category: "all" first, then categories in the order
/// they first appear.
pub fn category_counts(products: &[Product]) -> Vec<CategoryCount> {
    let mut counts = vec![CategoryCount {
        slug: ALL_CATEGORY.to_string(),
        name: display_name(ALL_CATEGORY),
        count: products.len(),
    }];

    for product in products {
        match counts
            .iter_mut()
            .skip(1)
            .find(|c| c.slug == product.category)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                slug: product.category.clone(),
                name: display_name(&product.category),
                count: 1,
            }),
        }
    }

    counts
}
