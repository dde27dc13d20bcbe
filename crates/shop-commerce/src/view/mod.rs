//! HTML fragment renderers.
//!
//! Pure projections of cart, catalog and checkout state into the markup the
//! storefront pages mount. All product and user text is escaped.

mod cart;
mod catalog;
mod notification;
mod pagination;
mod search;

pub use cart::{render_cart, render_cart_badge, render_order_summary, EMPTY_CART_MESSAGE};
pub use catalog::{
    render_category_list, render_product_card, render_product_detail, render_product_grid,
};
pub use notification::render_notification;
pub use pagination::render_pagination;
pub use search::{render_search_results, NO_RESULTS_MESSAGE};

/// Link to a product's detail page.
pub fn product_href(id: crate::ids::ProductId) -> String {
    format!("product-view.html?id={id}")
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"Tom's" & co</b>"#),
            "&lt;b&gt;&quot;Tom&#39;s&quot; &amp; co&lt;/b&gt;"
        );
    }
}
