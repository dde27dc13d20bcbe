//! The signed-in user kept in tab-scoped session storage.

use crate::{AuthError, UserSession};
use shop_cache::{Session, SessionId, Store};
use tracing::debug;

const CURRENT: &str = "current";

/// Persists the current [`UserSession`] under `<namespace>:session:current`.
pub struct SessionStore<S> {
    session: Session<UserSession, S>,
    id: SessionId,
}

impl<S: Store> SessionStore<S> {
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self {
            session: Session::new(store, namespace),
            id: SessionId::new(CURRENT),
        }
    }

    /// The signed-in user, if any.
    pub fn current(&self) -> Result<Option<UserSession>, AuthError> {
        Ok(self.session.get(&self.id)?)
    }

    /// The signed-in user, or [`AuthError::NotSignedIn`].
    pub fn require(&self) -> Result<UserSession, AuthError> {
        self.current()?.ok_or(AuthError::NotSignedIn)
    }

    pub fn is_signed_in(&self) -> Result<bool, AuthError> {
        Ok(self.session.exists(&self.id)?)
    }

    /// Replace the signed-in user.
    pub fn sign_in(&self, user: &UserSession) -> Result<(), AuthError> {
        self.session.set(&self.id, user)?;
        debug!(user = %user.first_name, "Session stored");
        Ok(())
    }

    /// Forget the signed-in user. Returns who was signed in.
    pub fn sign_out(&self) -> Result<Option<UserSession>, AuthError> {
        let previous = self.current()?;
        self.session.delete(&self.id)?;
        Ok(previous)
    }
}
