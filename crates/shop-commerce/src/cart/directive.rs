//! One-shot add-to-cart instruction carried in the page URL.

use crate::cart::MAX_QUANTITY_PER_ITEM;
use crate::ids::ProductId;
use crate::params::{query_param, remove_query_params};
use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameters that make up a directive.
pub const DIRECTIVE_PARAMS: [&str; 3] = ["action", "id", "qty"];

/// `?action=add&id=<product>&qty=<n>`, as produced by the product page's
/// "add to cart" link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartDirective {
    /// Product to add.
    pub product_id: ProductId,
    /// Units to add, at least 1.
    pub quantity: u32,
}

impl AddToCartDirective {
    /// Create a directive.
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }

    /// Read a directive from `url`. Requires `action=add`, a numeric `id`
    /// and a `qty` above zero; anything else yields `None`.
    pub fn parse(url: &Url) -> Option<Self> {
        if query_param(url, "action").as_deref() != Some("add") {
            return None;
        }
        let product_id: ProductId = query_param(url, "id")?.parse().ok()?;
        let quantity: i64 = query_param(url, "qty")?.trim().parse().ok()?;
        if quantity <= 0 {
            return None;
        }
        let quantity = u32::try_from(quantity.min(i64::from(MAX_QUANTITY_PER_ITEM))).ok()?;
        Some(Self::new(product_id, quantity))
    }

    /// Remove the directive parameters from `url`, keeping the rest.
    pub fn strip(url: &mut Url) {
        remove_query_params(url, &DIRECTIVE_PARAMS);
    }

    /// Append this directive to `url`.
    pub fn apply_to(&self, url: &mut Url) {
        url.query_pairs_mut()
            .append_pair("action", "add")
            .append_pair("id", &self.product_id.to_string())
            .append_pair("qty", &self.quantity.to_string());
    }
}
