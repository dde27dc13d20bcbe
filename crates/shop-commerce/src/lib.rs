//! Storefront domain logic for Organic Shop.
//!
//! This crate holds everything the storefront pages do between a click and
//! the re-rendered fragment:
//!
//! - **Catalog**: read-only products, category counts, name search
//! - **Cart**: line items, quantity rules, order summary, URL add directive
//! - **Storage**: the cart record in a session-scoped key/value store
//! - **Validate**: shipping, payment and account field validators
//! - **Checkout**: Cart → Payment → Complete
//! - **Search**: catalog listing and pagination
//! - **View**: HTML fragment renderers
//!
//! # Example
//!
//! ```rust
//! use shop_cache::MemoryStore;
//! use shop_commerce::prelude::*;
//!
//! let catalog = StaticCatalog::seed()?;
//! let config = ShopConfig::default();
//! let engine = CartEngine::new(MemoryStore::new(), &catalog, &config);
//!
//! engine.add_or_increment(ProductId::new(1), 2);
//! let summary = engine.compute_summary();
//! assert_eq!(summary.item_count, 2);
//! assert_eq!(summary.total, summary.subtotal + summary.shipping_fee);
//! # Ok::<(), shop_commerce::CommerceError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod notification;
pub mod params;
pub mod storage;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod validate;
pub mod view;

pub use config::ShopConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use notification::{Notification, NotificationKind};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::ShopConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::notification::{Notification, NotificationKind};
    pub use crate::storage::CartStorage;

    // Catalog
    pub use crate::catalog::{Catalog, CategoryCount, Product, StaticCatalog, ALL_CATEGORY};

    // Cart
    pub use crate::cart::{
        AddToCartDirective, Cart, CartEngine, CartLineItem, LineTotal, OrderSummary,
        QuantityChange, MAX_QUANTITY_PER_ITEM,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutError, CheckoutFlow, CheckoutStep, OrderReceipt, PaymentForm, ShippingForm,
    };

    // Search
    pub use crate::search::{paginate, Listing, Page, Pagination, ProductQuery};

    // Validation
    pub use crate::validate::{Field, FieldError, FormErrors};
}
