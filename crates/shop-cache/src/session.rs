//! Typed session records kept in a [`Store`].

use crate::{cache_key, Cache, CacheError, Store};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Identifies one browsing session (one tab, or one CLI profile).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Session record as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData<T> {
    /// The session ID.
    pub id: SessionId,
    /// User-defined session data.
    pub data: T,
    /// When the session was created (Unix timestamp).
    pub created_at: u64,
    /// When the session was last written (Unix timestamp).
    pub last_accessed: u64,
}

/// Session manager generic over the user data type `T`.
///
/// Records live under `<namespace>:session:<id>`.
///
/// # Example
///
/// ```rust
/// use shop_cache::{MemoryStore, Session, SessionId};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize, Default, Clone, PartialEq, Debug)]
/// struct Visitor {
///     name: Option<String>,
/// }
///
/// let store = MemoryStore::new();
/// let session = Session::<Visitor, _>::new(&store, "organic_shop");
/// let id = SessionId::from("tab-1");
///
/// let mut visitor = session.get_or_create(&id)?;
/// visitor.name = Some("Ann".to_string());
/// session.set(&id, &visitor)?;
///
/// assert_eq!(session.get(&id)?, Some(visitor));
/// # Ok::<(), shop_cache::CacheError>(())
/// ```
pub struct Session<T, S> {
    cache: Cache<S>,
    namespace: String,
    _phantom: std::marker::PhantomData<T>,
}

impl<T, S> Session<T, S>
where
    T: Serialize + DeserializeOwned + Default + Clone,
    S: Store,
{
    /// Create a session manager over `store`, namespacing keys with `namespace`.
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            namespace: namespace.into(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get session data, or create a new session if it doesn't exist.
    pub fn get_or_create(&self, id: &SessionId) -> Result<T, CacheError> {
        match self.get_record(id)? {
            Some(record) => Ok(record.data),
            None => {
                let data = T::default();
                self.set(id, &data)?;
                Ok(data)
            }
        }
    }

    /// Get session data if it exists.
    pub fn get(&self, id: &SessionId) -> Result<Option<T>, CacheError> {
        Ok(self.get_record(id)?.map(|record| record.data))
    }

    /// Get the full stored record including timestamps.
    pub fn get_record(&self, id: &SessionId) -> Result<Option<SessionData<T>>, CacheError> {
        self.cache.get::<SessionData<T>>(&self.session_key(id))
    }

    /// Set session data (unconditional write, last write wins).
    pub fn set(&self, id: &SessionId, data: &T) -> Result<(), CacheError> {
        let key = self.session_key(id);
        let now = current_timestamp();
        let created_at = self
            .cache
            .get::<SessionData<T>>(&key)
            .ok()
            .flatten()
            .map(|record| record.created_at)
            .unwrap_or(now);

        let record = SessionData {
            id: id.clone(),
            data: data.clone(),
            created_at,
            last_accessed: now,
        };
        self.cache.set(&key, &record)
    }

    /// Read-modify-write the session data with a closure.
    pub fn update<F>(&self, id: &SessionId, f: F) -> Result<T, CacheError>
    where
        F: FnOnce(&mut T),
    {
        let mut data = self.get(id)?.unwrap_or_default();
        f(&mut data);
        self.set(id, &data)?;
        Ok(data)
    }

    /// Delete a session.
    pub fn delete(&self, id: &SessionId) -> Result<(), CacheError> {
        self.cache.delete(&self.session_key(id))
    }

    /// Check if a session exists.
    pub fn exists(&self, id: &SessionId) -> Result<bool, CacheError> {
        self.cache.exists(&self.session_key(id))
    }

    fn session_key(&self, id: &SessionId) -> String {
        cache_key!(self.namespace.as_str(), "session", id)
    }
}

fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
