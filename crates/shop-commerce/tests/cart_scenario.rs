//! End-to-end cart behavior over a shared store.

use chrono::NaiveDate;
use shop_cache::{MemoryStore, Store};
use shop_commerce::prelude::*;
use shop_commerce::view;
use std::rc::Rc;
use url::Url;

fn seed() -> StaticCatalog {
    StaticCatalog::seed().expect("seed catalog")
}

#[test]
fn add_decrement_and_remove() {
    let catalog = seed();
    let config = ShopConfig::default();
    let engine = CartEngine::new(MemoryStore::new(), &catalog, &config);

    engine.add_or_increment(ProductId::new(1), 2);
    assert_eq!(engine.item_count(), 2);

    assert!(engine.decrement(0));
    assert_eq!(engine.item_count(), 1);

    assert!(!engine.decrement(0));
    assert_eq!(engine.item_count(), 1);

    assert!(engine.remove(0, |_| true).is_some());
    assert!(engine.cart().is_empty());
    assert!(!engine.storage().has_record());
    assert_eq!(
        view::render_cart(&engine.cart(), ""),
        r#"<p class="empty-cart-msg">Your cart is empty.</p>"#
    );
}

#[test]
fn corrupt_storage_reads_as_empty() {
    let catalog = seed();
    let config = ShopConfig::default();
    let store = Rc::new(MemoryStore::new());
    store.set("organic_shop:cart", "[{\"id\": 1, \"qua").unwrap();

    let engine = CartEngine::new(Rc::clone(&store), &catalog, &config);
    assert!(engine.cart().is_empty());
    assert_eq!(engine.item_count(), 0);

    engine.add_or_increment(ProductId::new(2), 1);
    assert_eq!(engine.item_count(), 1);
}

#[test]
fn url_directive_adds_and_strips_params() {
    let catalog = seed();
    let config = ShopConfig::default();
    let engine = CartEngine::new(MemoryStore::new(), &catalog, &config);

    let mut url = Url::parse("https://shop.test/cart.html?action=add&id=1&qty=3&user=ann").unwrap();
    let added = engine.apply_url(&mut url).expect("product added");

    assert_eq!(added.id, ProductId::new(1));
    assert_eq!(engine.item_count(), 3);
    assert_eq!(url.query(), Some("user=ann"));

    // Reloading the stripped URL must not add again.
    assert!(engine.apply_url(&mut url).is_none());
    assert_eq!(engine.item_count(), 3);
}

#[test]
fn engines_sharing_a_store_see_each_others_writes() {
    let catalog = seed();
    let config = ShopConfig::default();
    let store = Rc::new(MemoryStore::new());

    let dashboard = CartEngine::new(Rc::clone(&store), &catalog, &config);
    let cart_page = CartEngine::new(Rc::clone(&store), &catalog, &config);

    dashboard.add_or_increment(ProductId::new(4), 1);
    cart_page.increment(0);
    assert_eq!(dashboard.item_count(), 2);
}

#[test]
fn checkout_clears_cart_and_storage() {
    let catalog = seed();
    let config = ShopConfig::default();
    let engine = CartEngine::new(MemoryStore::new(), &catalog, &config);
    engine.add_or_increment(ProductId::new(1), 1);
    engine.add_or_increment(ProductId::new(7), 2);
    let expected = engine.compute_summary();

    let mut flow = CheckoutFlow::new();
    flow.begin(
        &engine,
        true,
        ShippingForm::new("Ann", "Santos", "5 Rizal Ave", "Baguio", "Benguet", "2600"),
    )
    .unwrap();
    let receipt = flow
        .submit_payment(
            &engine,
            &PaymentForm::new("Ann Santos", "4539 5787 6362 1486", "11/28", "321"),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        )
        .unwrap();

    assert_eq!(receipt.summary, expected);
    assert_eq!(engine.item_count(), 0);
    assert!(!engine.storage().has_record());
}

#[test]
fn dashboard_listing_pages() {
    let catalog = seed();
    let listing = ProductQuery::new().with_page(2).run(&catalog);
    let page = listing.page();

    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.len(), catalog.len() - 10);
    let html = view::render_pagination(&page.pagination);
    assert!(html.contains(r#"class="page-btn active" data-page="2""#));
}
