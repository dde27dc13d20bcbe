//! Product catalog module.
//!
//! Contains the product record, category counts and the read-only
//! [`Catalog`] collaborator the cart engine and views query.

mod category;
mod product;
mod source;

pub use category::{category_counts, display_name, CategoryCount, ALL_CATEGORY};
pub use product::{Product, DEFAULT_PRODUCT_IMAGE};
pub use source::{Catalog, StaticCatalog};
