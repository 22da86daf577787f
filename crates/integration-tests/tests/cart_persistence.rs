//! Cart persistence round-trips through the file-backed storage.

#![allow(clippy::unwrap_used)]

use std::fs;

use majik_bloom_core::ProductId;
use majik_bloom_integration_tests::demo_session;
use majik_bloom_storefront::cart::store::QuantityUpdate;
use serde_json::Value;

#[test]
fn cart_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let mut shop = demo_session(&path);
    shop.add_to_cart(ProductId::new(1));
    shop.add_to_cart(ProductId::new(1));
    shop.add_to_cart(ProductId::new(3));

    let reloaded = demo_session(&path);
    assert_eq!(reloaded.item_count(), 3);

    let view = reloaded.cart_view();
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.items[0].name, "Enchanted Empress");
    assert_eq!(view.items[0].quantity, 2);
    assert_eq!(view.items[1].name, "Celestial Kush");
}

#[test]
fn quantity_updates_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    demo_session(&path).add_to_cart(ProductId::new(2));
    demo_session(&path).update_quantity(ProductId::new(2), QuantityUpdate::Set(4));
    demo_session(&path).update_quantity(ProductId::new(2), QuantityUpdate::Decrement);

    let shop = demo_session(&path);
    assert_eq!(shop.item_count(), 3);
}

#[test]
fn removal_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let mut shop = demo_session(&path);
    shop.add_to_cart(ProductId::new(1));
    shop.add_to_cart(ProductId::new(2));

    demo_session(&path).remove_from_cart(ProductId::new(1));

    let reloaded = demo_session(&path);
    let view = reloaded.cart_view();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].name, "Dragon's Breath OG");
}

#[test]
fn on_disk_document_uses_the_cart_key_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    demo_session(&path).add_to_cart(ProductId::new(1));

    let document: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let lines = document["majikBloomCart"].as_array().unwrap();
    assert_eq!(lines.len(), 1);

    let line = lines[0].as_object().unwrap();
    let mut keys: Vec<&str> = line.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["id", "image", "name", "price", "quantity"]);
    assert_eq!(line["id"], 1);
    assert_eq!(line["name"], "Enchanted Empress");
    assert_eq!(line["quantity"], 1);
}

#[test]
fn malformed_document_rehydrates_as_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    fs::write(&path, "{\"majikBloomCart\": [{\"id\": 1,").unwrap();

    let shop = demo_session(&path);
    assert_eq!(shop.item_count(), 0);
    assert!(shop.cart_view().items.is_empty());
}

#[test]
fn mutation_after_corruption_rewrites_a_good_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    fs::write(&path, "not json at all").unwrap();

    let mut shop = demo_session(&path);
    shop.add_to_cart(ProductId::new(2));

    let reloaded = demo_session(&path);
    assert_eq!(reloaded.item_count(), 1);
}
