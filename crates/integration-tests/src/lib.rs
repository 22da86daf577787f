//! Integration tests for Majik Bloom.
//!
//! The tests in `tests/` exercise the storefront through its real
//! file-backed storage: every scenario builds sessions against a document
//! in a temporary directory and reloads between operations, the way each
//! page load rehydrates the cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p majik-bloom-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use majik_bloom_storefront::cart::storage::FileStorage;
use majik_bloom_storefront::catalog::Catalog;
use majik_bloom_storefront::config::StorefrontConfig;
use majik_bloom_storefront::state::Storefront;

/// Build a demo-catalog session whose cart persists at `path`.
///
/// Call it again with the same path to simulate the next page load.
#[must_use]
pub fn demo_session(path: &Path) -> Storefront<FileStorage> {
    let config = StorefrontConfig {
        cart_path: path.to_path_buf(),
        ..StorefrontConfig::default()
    };
    let storage = FileStorage::new(&config.cart_path);

    Storefront::init(config, Catalog::demo(), storage)
}
