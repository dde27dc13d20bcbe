//! Cart persistence over a session-scoped key/value store.
//!
//! Failures never reach the caller: a missing or unreadable record loads as
//! an empty cart and a failed write is logged and dropped, the same way the
//! storefront degrades when browser storage is unavailable. A readable
//! record loses only its malformed lines.

use crate::cart::Cart;
use shop_cache::{cache_key, Cache, Store};
use tracing::{debug, error, warn};

/// Reads and writes the single cart record.
#[derive(Debug)]
pub struct CartStorage<S> {
    cache: Cache<S>,
    key: String,
}

impl<S: Store> CartStorage<S> {
    /// Store the cart under `<namespace>:cart`.
    pub fn new(store: S, namespace: &str) -> Self {
        Self {
            cache: Cache::new(store),
            key: cache_key!(namespace, "cart"),
        }
    }

    /// Storage key of the cart record.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Load the cart. Missing or corrupt data yields an empty cart.
    pub fn load(&self) -> Cart {
        match self.cache.get::<Cart>(&self.key) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read cart from storage");
                Cart::new()
            }
        }
    }

    /// Persist the cart. An empty cart removes the record.
    pub fn save(&self, cart: &Cart) {
        if cart.is_empty() {
            self.clear();
            return;
        }
        match self.cache.set(&self.key, cart) {
            Ok(()) => debug!(key = %self.key, lines = cart.len(), "Saved cart"),
            Err(e) => error!(key = %self.key, error = %e, "Failed to write cart to storage"),
        }
    }

    /// Remove the cart record.
    pub fn clear(&self) {
        match self.cache.delete(&self.key) {
            Ok(()) => debug!(key = %self.key, "Cleared cart storage"),
            Err(e) => error!(key = %self.key, error = %e, "Failed to clear cart storage"),
        }
    }

    /// Badge count: sum of stored quantities, 0 when unreadable.
    pub fn item_count(&self) -> u64 {
        self.load().item_count()
    }

    /// Whether a cart record exists.
    pub fn has_record(&self) -> bool {
        self.cache.exists(&self.key).unwrap_or(false)
    }
}
