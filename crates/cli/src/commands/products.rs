//! Catalog listing command.

use majik_bloom_storefront::cart::storage::KeyValueStorage;
use majik_bloom_storefront::state::Storefront;

/// Print the product catalog.
pub fn list<S: KeyValueStorage>(shop: &Storefront<S>) {
    for product in shop.catalog().products() {
        println!("{:>4}  {:<24} {:>8}", product.id, product.name, product.price);
    }
}
