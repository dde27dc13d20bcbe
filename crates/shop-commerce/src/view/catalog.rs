//! Dashboard grid, category sidebar and product detail.

use super::{html_escape, product_href};
use crate::catalog::{CategoryCount, Product};

/// Render one product card.
pub fn render_product_card(product: &Product) -> String {
    format!(
        r#"<a href="{}" class="product-card">
    <div class="product-thumb">
        <img src="{}" alt="{}" class="product-image">
    </div>
    <div class="product-info">
        <div class="info-details">
            <h3 class="product-name">{}</h3>
            <p class="product-meta">{}</p>
        </div>
        <p class="product-price">{}</p>
    </div>
</a>"#,
        product_href(product.id),
        html_escape(product.image_or_default()),
        html_escape(&product.name),
        html_escape(&product.name),
        html_escape(&product.rating_line()),
        product.price,
    )
}

/// Render a grid of product cards.
pub fn render_product_grid(products: &[&Product]) -> String {
    let cards: String = products.iter().map(|p| render_product_card(p)).collect();
    format!(r#"<div class="product-grid">{cards}</div>"#)
}

/// Render the category sidebar, marking `active` as selected.
pub fn render_category_list(categories: &[CategoryCount], active: &str) -> String {
    let items: String = categories
        .iter()
        .map(|c| {
            format!(
                r#"<li><button type="button" data-category="{}"{}><span>{}</span><span>{}</span></button></li>"#,
                html_escape(&c.slug),
                if c.slug == active { r#" class="active""# } else { "" },
                html_escape(&c.name),
                c.count,
            )
        })
        .collect();
    format!(r#"<ul id="categories-list">{items}</ul>"#)
}

/// Render the product detail section with its similar items. The similar
/// items section is omitted when there are none.
pub fn render_product_detail(product: &Product, similar: &[&Product]) -> String {
    let similar_html = if similar.is_empty() {
        String::new()
    } else {
        format!(
            r#"
<section class="similar-items">
    <h2>Similar Items</h2>
    {}
</section>"#,
            render_product_grid(similar)
        )
    };

    format!(
        r#"<section class="product-view" data-product-id="{}">
    <img id="mainImage" class="main-image" src="{}" alt="{}">
    <h1 id="productName">{}</h1>
    <p id="productMeta">{}</p>
    <p id="productPrice">{}</p>
    <p id="productDescription">{}</p>
</section>{}"#,
        product.id,
        html_escape(product.image_or_default()),
        html_escape(&product.name),
        html_escape(&product.name),
        html_escape(&product.rating_line()),
        product.price.display_amount(),
        html_escape(product.description.as_deref().unwrap_or_default()),
        similar_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{category_counts, DEFAULT_PRODUCT_IMAGE};
    use crate::money::{Currency, Money};
    use pretty_assertions::assert_eq;

    fn honey() -> Product {
        let mut p = Product::new(3u64, "Raw Honey", Money::new(35000, Currency::PHP), "pantry");
        p.stars = 4.5;
        p.ratings = 12;
        p
    }

    #[test]
    fn test_product_card() {
        let html = render_product_card(&honey());
        assert!(html.starts_with(r#"<a href="product-view.html?id=3" class="product-card">"#));
        assert!(html.contains(&format!(r#"<img src="{DEFAULT_PRODUCT_IMAGE}" alt="Raw Honey""#)));
        assert!(html.contains("<p class=\"product-meta\">4.5 stars \u{2022} 12 Ratings</p>"));
        assert!(html.contains("<p class=\"product-price\">\u{20b1}350.00</p>"));
    }

    #[test]
    fn test_category_list() {
        let products = vec![honey()];
        let html = render_category_list(&category_counts(&products), "all");
        assert_eq!(
            html,
            concat!(
                r#"<ul id="categories-list">"#,
                r#"<li><button type="button" data-category="all" class="active"><span>All</span><span>1</span></button></li>"#,
                r#"<li><button type="button" data-category="pantry"><span>Pantry</span><span>1</span></button></li>"#,
                "</ul>"
            )
        );
    }

    #[test]
    fn test_detail_without_similar() {
        let html = render_product_detail(&honey(), &[]);
        assert!(html.contains(r#"<p id="productPrice">350.00</p>"#));
        assert!(!html.contains("similar-items"));
    }

    #[test]
    fn test_detail_with_similar() {
        let other = Product::new(4u64, "Coconut Sugar", Money::new(14000, Currency::PHP), "pantry");
        let html = render_product_detail(&honey(), &[&other]);
        assert!(html.contains(r#"<section class="similar-items">"#));
        assert!(html.contains(r#"href="product-view.html?id=4""#));
    }
}
