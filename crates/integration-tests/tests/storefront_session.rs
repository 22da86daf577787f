//! End-to-end storefront flows across simulated page loads.

#![allow(clippy::unwrap_used)]

use majik_bloom_core::ProductId;
use majik_bloom_integration_tests::demo_session;
use majik_bloom_storefront::cart::store::{CheckoutError, QuantityUpdate};

#[test]
fn shopping_flow_across_page_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    // Browse, add twice, adjust, and check out over separate loads
    let mut shop = demo_session(&path);
    shop.add_to_cart(ProductId::new(1));

    let mut shop = demo_session(&path);
    shop.add_to_cart(ProductId::new(1));
    let view = shop.cart_view();
    assert_eq!(view.subtotal, "$99.98");
    assert_eq!(view.tax, "$8.00");
    assert_eq!(view.total, "$107.98");

    let receipt = demo_session(&path).checkout().unwrap();
    assert_eq!(receipt.item_count, 2);

    // The stub checkout leaves the cart intact
    assert_eq!(demo_session(&path).item_count(), 2);
}

#[test]
fn checkout_on_a_fresh_profile_is_blocked() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let shop = demo_session(&path);
    assert_eq!(shop.checkout(), Err(CheckoutError::EmptyCart));
    assert!(!path.exists());
}

#[test]
fn unknown_product_never_reaches_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let mut shop = demo_session(&path);
    shop.add_to_cart(ProductId::new(1));
    shop.add_to_cart(ProductId::new(99));

    let reloaded = demo_session(&path);
    assert_eq!(reloaded.item_count(), 1);
    assert_eq!(reloaded.cart_view().items.len(), 1);
}

#[test]
fn decrement_clamps_across_page_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    demo_session(&path).add_to_cart(ProductId::new(3));
    for _ in 0..3 {
        demo_session(&path).update_quantity(ProductId::new(3), QuantityUpdate::Decrement);
    }

    assert_eq!(demo_session(&path).item_count(), 1);
}
