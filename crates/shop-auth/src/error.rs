//! Authentication errors.

use shop_commerce::validate::FormErrors;
use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Signup or login form failed validation.
    #[error("invalid credentials")]
    InvalidCredentials(FormErrors),

    /// No user is signed in.
    #[error("not signed in")]
    NotSignedIn,

    /// Cache error.
    #[error("cache error: {0}")]
    Cache(#[from] shop_cache::CacheError),
}

impl AuthError {
    /// Field messages behind a validation failure.
    pub fn form_errors(&self) -> Option<&FormErrors> {
        match self {
            AuthError::InvalidCredentials(errors) => Some(errors),
            _ => None,
        }
    }
}
