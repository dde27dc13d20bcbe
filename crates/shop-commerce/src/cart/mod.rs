//! Shopping cart module.
//!
//! Contains the cart and its line items, the order summary, the URL
//! add-to-cart directive and the engine that ties them to storage.

mod cart;
mod directive;
mod engine;
mod summary;

pub use cart::{Cart, CartLineItem, QuantityChange, MAX_QUANTITY_PER_ITEM};
pub use directive::{AddToCartDirective, DIRECTIVE_PARAMS};
pub use engine::CartEngine;
pub use summary::{LineTotal, OrderSummary};
