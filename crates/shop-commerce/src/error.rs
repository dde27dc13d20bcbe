//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors raised while loading catalog or configuration data.
///
/// Cart and validation paths never surface these: they degrade to a safe
/// default (empty cart, ignored action, inline field message) instead.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Catalog data is structurally valid JSON but breaks a catalog rule such as unique ids.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A shop setting is out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
