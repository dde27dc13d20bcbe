//! Catalog listing query.

use crate::catalog::{Catalog, Product, ALL_CATEGORY};
use crate::search::{paginate, Page, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// What the product grid is showing: a category or a name search, and
/// which page of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Category slug; [`ALL_CATEGORY`] when unset.
    pub category: String,
    /// Name search text. A non-blank search takes precedence over the category.
    pub search: Option<String>,
    /// Requested page (1-indexed), clamped when the listing is built.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            search: None,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductQuery {
    /// Create a query for the first page of every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Search by name.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the page.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// The active search text, if any.
    pub fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Run the query against a catalog.
    pub fn run<'a>(&self, catalog: &'a dyn Catalog) -> Listing<'a> {
        let products = match self.search_text() {
            Some(text) => catalog.search_by_name(text),
            None => catalog.filter_by_category(&self.category),
        };
        Listing {
            products,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// The filtered product list behind the grid.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    products: Vec<&'a Product>,
    page: usize,
    per_page: usize,
}

impl<'a> Listing<'a> {
    /// Every matching product, the "(n)" count beside the heading.
    pub fn total(&self) -> usize {
        self.products.len()
    }

    /// All matches in catalog order.
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    /// The requested page of matches.
    pub fn page(&self) -> Page<'_, &'a Product> {
        paginate(&self.products, self.page, self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn test_default_lists_everything() {
        let catalog = StaticCatalog::seed().unwrap();
        let listing = ProductQuery::new().run(&catalog);
        assert_eq!(listing.total(), catalog.len());

        let page = listing.page();
        assert_eq!(page.len(), DEFAULT_PAGE_SIZE);
        assert!(page.pagination.has_next);
    }

    #[test]
    fn test_category_listing() {
        let catalog = StaticCatalog::seed().unwrap();
        let listing = ProductQuery::new().with_category("tea").run(&catalog);
        assert!(listing.total() > 0);
        assert!(listing.products().iter().all(|p| p.category == "tea"));
        assert_eq!(listing.page().pagination.total_pages, 1);
    }

    #[test]
    fn test_search_overrides_category() {
        let catalog = StaticCatalog::seed().unwrap();
        let listing = ProductQuery::new()
            .with_category("tea")
            .with_search("coffee")
            .run(&catalog);
        assert!(listing.total() > 0);
        assert!(listing
            .products()
            .iter()
            .all(|p| p.name.to_lowercase().contains("coffee")));
    }

    #[test]
    fn test_blank_search_falls_back_to_category() {
        let query = ProductQuery::new().with_search("   ");
        assert_eq!(query.search_text(), None);
    }

    #[test]
    fn test_page_out_of_range_is_clamped() {
        let catalog = StaticCatalog::seed().unwrap();
        let listing = ProductQuery::new().with_page(99).run(&catalog);
        let page = listing.page();
        assert_eq!(page.pagination.page, page.pagination.total_pages);
    }
}
