//! Cart engine: quantity rules and totals over the persisted cart.

use crate::cart::{AddToCartDirective, Cart, CartLineItem, OrderSummary, QuantityChange};
use crate::catalog::{Catalog, Product};
use crate::config::ShopConfig;
use crate::ids::ProductId;
use crate::storage::CartStorage;
use shop_cache::Store;
use tracing::{debug, warn};
use url::Url;

/// Applies cart operations against storage.
///
/// The engine keeps no copy of the cart: each operation loads the stored
/// record, mutates it and writes it back, so the last write wins when two
/// views share a store.
pub struct CartEngine<'a, S> {
    storage: CartStorage<S>,
    catalog: &'a dyn Catalog,
    config: &'a ShopConfig,
}

impl<'a, S: Store> CartEngine<'a, S> {
    /// Create an engine over `store`, keyed by the configured namespace.
    pub fn new(store: S, catalog: &'a dyn Catalog, config: &'a ShopConfig) -> Self {
        Self {
            storage: CartStorage::new(store, &config.storage_namespace),
            catalog,
            config,
        }
    }

    /// Borrow the storage adapter.
    pub fn storage(&self) -> &CartStorage<S> {
        &self.storage
    }

    /// Borrow the catalog.
    pub fn catalog(&self) -> &'a dyn Catalog {
        self.catalog
    }

    /// Current cart contents.
    pub fn cart(&self) -> Cart {
        self.storage.load()
    }

    /// Add `quantity` units of a catalog product. Unknown ids and a zero
    /// quantity are ignored. Returns the product that was added.
    pub fn add_or_increment(&self, product_id: ProductId, quantity: u32) -> Option<&'a Product> {
        let Some(product) = self.catalog.find_product_by_id(product_id) else {
            warn!(%product_id, "Ignoring add for unknown product");
            return None;
        };
        let mut cart = self.storage.load();
        let line_quantity = cart.add_product(product, quantity)?;
        self.storage.save(&cart);
        debug!(%product_id, quantity, line_quantity, "Added to cart");
        Some(product)
    }

    /// Set the quantity of the line at `index`. See [`Cart::set_quantity`].
    pub fn set_quantity(
        &self,
        index: usize,
        new_quantity: i64,
        allow_remove_to_zero: bool,
    ) -> QuantityChange {
        let mut cart = self.storage.load();
        let change = cart.set_quantity(index, new_quantity, allow_remove_to_zero);
        if change.changed() {
            self.storage.save(&cart);
            debug!(index, ?change, "Cart quantity changed");
        }
        change
    }

    /// Add one unit to the line at `index`. Returns whether it changed.
    pub fn increment(&self, index: usize) -> bool {
        self.step(index, 1)
    }

    /// Take one unit from the line at `index`. A line at 1 stays at 1;
    /// removal goes through [`CartEngine::remove`].
    pub fn decrement(&self, index: usize) -> bool {
        self.step(index, -1)
    }

    fn step(&self, index: usize, delta: i64) -> bool {
        let Some(current) = self.storage.load().get(index).map(|line| line.quantity) else {
            return false;
        };
        self.set_quantity(index, i64::from(current) + delta, false)
            .changed()
    }

    /// Remove the line at `index` once `confirm` approves it. A declined
    /// confirmation leaves the cart untouched.
    pub fn remove<F>(&self, index: usize, confirm: F) -> Option<CartLineItem>
    where
        F: FnOnce(&CartLineItem) -> bool,
    {
        let mut cart = self.storage.load();
        let line = cart.get(index)?;
        if !confirm(line) {
            debug!(index, "Removal declined");
            return None;
        }
        let removed = cart.remove(index)?;
        self.storage.save(&cart);
        debug!(index, product_id = %removed.product_id, "Removed from cart");
        Some(removed)
    }

    /// Totals for the current cart.
    pub fn compute_summary(&self) -> OrderSummary {
        OrderSummary::compute(&self.storage.load(), self.config.shipping_fee())
    }

    /// Empty the cart and its stored record.
    pub fn clear(&self) {
        self.storage.clear();
    }

    /// Badge count.
    pub fn item_count(&self) -> u64 {
        self.storage.item_count()
    }

    /// Indexes of lines whose name contains `query`.
    pub fn search(&self, query: &str) -> Vec<usize> {
        self.storage.load().matching(query)
    }

    /// Apply an add-to-cart directive. Returns the product added.
    pub fn apply_directive(&self, directive: AddToCartDirective) -> Option<&'a Product> {
        self.add_or_increment(directive.product_id, directive.quantity)
    }

    /// Apply the directive carried in `url`, if any, and strip it from the
    /// URL once the product was found.
    pub fn apply_url(&self, url: &mut Url) -> Option<&'a Product> {
        let directive = AddToCartDirective::parse(url)?;
        let product = self.apply_directive(directive)?;
        AddToCartDirective::strip(url);
        Some(product)
    }
}
