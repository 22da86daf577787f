//! Storefront session state.
//!
//! [`Storefront`] is the owned assembly the presentation layer drives. It
//! is created at session start, wires the cart store to the catalog and
//! notification center, and exposes the command surface that UI events bind
//! to. Derived views are recomputed on every read.

use std::time::Instant;

use majik_bloom_core::ProductId;

use crate::cart::storage::KeyValueStorage;
use crate::cart::store::{
    AddOutcome, CartStore, CheckoutError, CheckoutReceipt, QuantityUpdate, RemoveOutcome,
    UpdateOutcome,
};
use crate::cart::view::CartView;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::notify::NotificationCenter;

/// The storefront session: config, catalog, cart, and notifications.
#[derive(Debug)]
pub struct Storefront<S: KeyValueStorage> {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore<S>,
    notifications: NotificationCenter,
}

impl<S: KeyValueStorage> Storefront<S> {
    /// Assemble a session: rehydrate the cart from `storage` and start with
    /// no pending notifications.
    pub fn init(config: StorefrontConfig, catalog: Catalog, storage: S) -> Self {
        let cart = CartStore::load(storage, config.tax_rate);

        Self {
            config,
            catalog,
            cart,
            notifications: NotificationCenter::new(),
        }
    }

    /// Add one unit of `id` to the cart, posting the confirmation message.
    pub fn add_to_cart(&mut self, id: ProductId) -> AddOutcome {
        let outcome = self.cart.add_item(&self.catalog, id);

        match &outcome {
            AddOutcome::Added { name } | AddOutcome::Incremented { name, .. } => {
                self.notifications
                    .push(format!("{name} added to cart!"), Instant::now());
            }
            AddOutcome::UnknownProduct => {}
        }

        outcome
    }

    /// Apply a quantity mutation to the line for `id`.
    pub fn update_quantity(&mut self, id: ProductId, update: QuantityUpdate) -> UpdateOutcome {
        self.cart.update_quantity(id, update)
    }

    /// Remove the line for `id`, posting the confirmation message.
    pub fn remove_from_cart(&mut self, id: ProductId) -> RemoveOutcome {
        let outcome = self.cart.remove_item(id);

        if matches!(outcome, RemoveOutcome::Removed { .. }) {
            self.notifications
                .push("Item removed from cart", Instant::now());
        }

        outcome
    }

    /// Run the stub checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when the cart has no lines.
    pub fn checkout(&self) -> Result<CheckoutReceipt, CheckoutError> {
        self.cart.checkout()
    }

    /// Derive a fresh cart view.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from_store(&self.cart)
    }

    /// Total unit count, for the badge display.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Get a reference to the pending notifications.
    #[must_use]
    pub const fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Get a mutable reference to the pending notifications (for sweeping).
    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }
}
