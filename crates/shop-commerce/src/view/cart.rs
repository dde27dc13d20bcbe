//! Cart page: line list, order summary and header badge.

use super::html_escape;
use crate::cart::{Cart, CartLineItem, OrderSummary};

/// Shown in place of the list when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Render the cart list. Lines whose name does not contain `filter` are
/// rendered hidden; an empty filter shows every line.
pub fn render_cart(cart: &Cart, filter: &str) -> String {
    if cart.is_empty() {
        return format!(r#"<p class="empty-cart-msg">{EMPTY_CART_MESSAGE}</p>"#);
    }

    let visible = cart.matching(filter);
    cart.items()
        .iter()
        .enumerate()
        .map(|(index, item)| render_cart_item(index, item, visible.contains(&index)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_cart_item(index: usize, item: &CartLineItem, visible: bool) -> String {
    format!(
        r#"<li class="cart-item" data-index="{}"{}>
    <img src="{}" alt="{}">
    <div class="cart-item-info">
        <h3>{}</h3>
        <span class="cart-item-price">{}</span>
    </div>
    <div class="cart-qty">
        <label>Quantity</label>
        <button type="button" class="qty-btn-minus"{}>-</button>
        <input type="text" class="cart-qty-value" value="{}" readonly>
        <button type="button" class="qty-btn-plus">+</button>
    </div>
    <div class="cart-item-total">
        <label>Total</label>
        <span>{}</span>
    </div>
    <button type="button" class="cart-remove-btn">&times;</button>
</li>"#,
        index,
        if visible { "" } else { " hidden" },
        html_escape(&item.image_ref),
        html_escape(&item.name),
        html_escape(&item.name),
        item.unit_price,
        if item.quantity <= 1 { " disabled" } else { "" },
        item.quantity,
        item.line_total(),
    )
}

/// Render the order summary panel.
pub fn render_order_summary(summary: &OrderSummary) -> String {
    format!(
        r#"<div class="order-summary">
    <p>Items <span id="itemCount">{}</span></p>
    <p>Subtotal <span id="total-amount">{}</span></p>
    <p>Shipping Fee <span id="shippingFee">{}</span></p>
    <p class="order-total">Total <span id="totalAmount">{}</span></p>
    <button type="button" id="checkoutBtn"{}>CHECK OUT</button>
</div>"#,
        summary.item_count,
        summary.subtotal,
        summary.shipping_fee,
        summary.total,
        if summary.is_empty() { " disabled" } else { "" },
    )
}

/// Render the cart count shown in the header.
pub fn render_cart_badge(count: u64) -> String {
    format!(r#"<span class="cart-count">{count}</span>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::{Currency, Money};
    use pretty_assertions::assert_eq;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        let mut honey = Product::new(1u64, "Raw Honey", Money::new(35000, Currency::PHP), "pantry");
        honey.image = "honey.jpg".to_string();
        cart.add_product(&honey, 2);
        cart.add_product(
            &Product::new(2u64, "Green Tea", Money::new(22000, Currency::PHP), "tea"),
            1,
        );
        cart
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(
            render_cart(&Cart::new(), ""),
            r#"<p class="empty-cart-msg">Your cart is empty.</p>"#
        );
    }

    #[test]
    fn test_cart_lines() {
        let html = render_cart(&cart(), "");
        assert!(html.contains(r#"<li class="cart-item" data-index="0">"#));
        assert!(html.contains(r#"<img src="honey.jpg" alt="Raw Honey">"#));
        assert!(html.contains("<span class=\"cart-item-price\">\u{20b1}350.00</span>"));
        assert!(html.contains("<span>\u{20b1}700.00</span>"));
        assert!(html.contains(r#"value="2" readonly"#));
    }

    #[test]
    fn test_minus_disabled_at_one() {
        let html = render_cart(&cart(), "");
        let tea = html.split("data-index=\"1\"").nth(1).unwrap();
        assert!(tea.contains(r#"class="qty-btn-minus" disabled>-"#));
    }

    #[test]
    fn test_filter_hides_lines() {
        let html = render_cart(&cart(), "tea");
        assert!(html.contains(r#"<li class="cart-item" data-index="0" hidden>"#));
        assert!(html.contains(r#"<li class="cart-item" data-index="1">"#));
    }

    #[test]
    fn test_order_summary() {
        let summary = OrderSummary::compute(&cart(), Money::new(4900, Currency::PHP));
        let html = render_order_summary(&summary);
        assert!(html.contains(r#"<span id="itemCount">3</span>"#));
        assert!(html.contains("<span id=\"total-amount\">\u{20b1}920.00</span>"));
        assert!(html.contains("<span id=\"shippingFee\">\u{20b1}49.00</span>"));
        assert!(html.contains("<span id=\"totalAmount\">\u{20b1}969.00</span>"));
        assert!(html.contains(r#"id="checkoutBtn">"#));
    }

    #[test]
    fn test_badge() {
        assert_eq!(render_cart_badge(4), r#"<span class="cart-count">4</span>"#);
    }
}
