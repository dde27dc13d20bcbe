//! Session-scoped key/value storage for Organic Shop.
//!
//! Models the browser's per-tab storage: string keys, string values,
//! synchronous access, last write wins. On top of a raw [`Store`] the
//! [`Cache`] wrapper adds automatic JSON serialization and [`Session`]
//! keeps a typed per-session record.
//!
//! # Example
//!
//! ```rust
//! use shop_cache::{cache_key, Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Badge {
//!     count: u32,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//! let key = cache_key!("organic_shop", "badge");
//!
//! cache.set(&key, &Badge { count: 3 })?;
//! let badge: Option<Badge> = cache.get(&key)?;
//! assert_eq!(badge, Some(Badge { count: 3 }));
//!
//! cache.delete(&key)?;
//! # Ok::<(), shop_cache::CacheError>(())
//! ```

mod error;
mod kv;
mod session;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use session::{Session, SessionData, SessionId};
pub use store::{FileStore, MemoryStore, Store};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, MemoryStore, Session, SessionId, Store};
}
