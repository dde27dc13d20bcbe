//! Account handling for Organic Shop.
//!
//! Validates the signup and login dialogs, carries the signed-in identity
//! between pages through the `user` query parameter, and remembers it in
//! session storage for the command line.

mod credentials;
mod error;
mod session;
mod store;

pub use credentials::{LoginForm, SignupForm};
pub use error::AuthError;
pub use session::{logged_out, logout, propagate_user, UserSession, USER_PARAM};
pub use store::SessionStore;
