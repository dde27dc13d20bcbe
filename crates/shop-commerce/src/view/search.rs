//! Header search dropdown.

use super::{html_escape, product_href};
use crate::catalog::Product;

/// Shown when a search matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No products found";

/// Render the dropdown entries for a name search.
pub fn render_search_results(results: &[&Product]) -> String {
    if results.is_empty() {
        return format!(r#"<div class="no-results">{NO_RESULTS_MESSAGE}</div>"#);
    }

    results
        .iter()
        .map(|product| {
            format!(
                r#"<a href="{}" class="search-result-item"><img src="{}" alt="{}"><div class="search-result-info"><div class="search-result-name">{}</div><div class="search-result-price">{}</div></div></a>"#,
                product_href(product.id),
                html_escape(product.image_or_default()),
                html_escape(&product.name),
                html_escape(&product.name),
                product.price,
            )
        })
        .collect()
}
