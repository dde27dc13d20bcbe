//! Typed wrapper over a [`Store`] with automatic JSON serialization.

use crate::{CacheError, Store};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache backed by any [`Store`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug)]
pub struct Cache<S> {
    store: S,
}

impl<S: Store> Cache<S> {
    /// Wrap a store.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shop_cache::{Cache, MemoryStore};
    /// let cache = Cache::new(MemoryStore::new());
    /// ```
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist. A stored value that does
    /// not decode as `T` is an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(raw) => {
                let value: T = serde_json::from_str(&raw)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```rust
/// use shop_cache::cache_key;
/// let key = cache_key!("organic_shop", "cart");
/// assert_eq!(key, "organic_shop:cart");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: u64,
        quantity: u32,
    }

    #[test]
    fn test_get_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        let value: Option<Item> = cache.get("nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_and_get() {
        let cache = Cache::new(MemoryStore::new());
        let items = vec![Item { id: 1, quantity: 2 }];
        cache.set("cart", &items).unwrap();

        let loaded: Option<Vec<Item>> = cache.get("cart").unwrap();
        assert_eq!(loaded, Some(items));
        assert_eq!(cache.store().get("cart").unwrap().as_deref(), Some(r#"[{"id":1,"quantity":2}]"#));
    }

    #[test]
    fn test_get_wrong_shape_is_error() {
        let cache = Cache::new(MemoryStore::new());
        cache.store().set("cart", "{oops").unwrap();
        let result: Result<Option<Vec<Item>>, _> = cache.get("cart");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_delete_and_exists() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("k", &1).unwrap();
        assert!(cache.exists("k").unwrap());
        cache.delete("k").unwrap();
        assert!(!cache.exists("k").unwrap());
    }

    #[test]
    fn test_cache_key_macro() {
        assert_eq!(cache_key!("shop", "cart"), "shop:cart");
        assert_eq!(cache_key!("shop", "session", 7), "shop:session:7");
    }
}
