//! The cart store.
//!
//! [`CartStore`] owns the authoritative line sequence. It is constructed
//! once per session by rehydrating from storage, mutated only through its
//! operations, and persists the full sequence after every mutation.
//!
//! Mutating operations never fail at the API surface: unknown ids are
//! ignored, invalid quantities are rejected or clamped, and unreadable
//! persisted payloads rehydrate as an empty cart. Callers that want to
//! react get a structured outcome instead of an error.

use majik_bloom_core::ProductId;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::Catalog;

use super::storage::{CART_KEY, KeyValueStorage};
use super::{CartLine, CartTotals};

/// Confirmation text of the stub checkout.
pub const CHECKOUT_MESSAGE: &str =
    "Thank you for your order! This is a demo site, so no actual purchase will be made.";

/// How a quantity mutation is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// Increase by one.
    Increment,
    /// Decrease by one, stopping at 1.
    Decrement,
    /// Set to an absolute value. Zero is never applied.
    Set(u32),
}

/// Outcome of [`CartStore::add_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended with quantity 1.
    Added { name: String },
    /// The product already had a line; its quantity grew by one.
    Incremented { name: String, quantity: u32 },
    /// The id is not in the catalog; the cart is unchanged.
    UnknownProduct,
}

/// Outcome of [`CartStore::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The line now has this quantity.
    Updated { quantity: u32 },
    /// The requested absolute quantity was not applied.
    InvalidQuantity,
    /// No line matches the id; the cart is unchanged.
    NotInCart,
}

/// Outcome of [`CartStore::remove_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The matching line was deleted.
    Removed { name: String },
    /// No line matches the id; the cart is unchanged.
    NotInCart,
}

/// Checkout failures that block with a user-visible message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Your cart is empty!")]
    EmptyCart,
}

/// Stub order confirmation. No purchase happens and the cart is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub message: String,
    pub item_count: u32,
    pub total: Decimal,
}

/// The authoritative cart state manager.
#[derive(Debug)]
pub struct CartStore<S: KeyValueStorage> {
    lines: Vec<CartLine>,
    storage: S,
    tax_rate: Decimal,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Rehydrate the cart from `storage`.
    ///
    /// An absent or unreadable payload yields an empty cart; lines whose
    /// quantity has decayed to zero are dropped.
    pub fn load(storage: S, tax_rate: Decimal) -> Self {
        let lines = match storage.get::<Vec<CartLine>>(CART_KEY) {
            Ok(Some(mut lines)) => {
                lines.retain(|line| line.quantity > 0);
                lines
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("discarding unreadable cart payload: {e}");
                Vec::new()
            }
        };

        Self {
            lines,
            storage,
            tax_rate,
        }
    }

    /// Add one unit of `id` to the cart.
    ///
    /// Appends a fresh line, or increments the existing one. Ids not in the
    /// catalog leave the cart untouched.
    pub fn add_item(&mut self, catalog: &Catalog, id: ProductId) -> AddOutcome {
        let Some(product) = catalog.get(id) else {
            tracing::debug!(%id, "ignoring add for unknown product");
            return AddOutcome::UnknownProduct;
        };

        let outcome = if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity += 1;
            AddOutcome::Incremented {
                name: line.name.clone(),
                quantity: line.quantity,
            }
        } else {
            self.lines.push(CartLine::for_product(product));
            AddOutcome::Added {
                name: product.name.clone(),
            }
        };

        self.persist();
        outcome
    }

    /// Apply a quantity mutation to the line for `id`.
    ///
    /// `Decrement` clamps at 1; `Set(0)` is never applied (removal is a
    /// distinct operation); a missing line leaves the cart untouched.
    pub fn update_quantity(&mut self, id: ProductId, update: QuantityUpdate) -> UpdateOutcome {
        if update == QuantityUpdate::Set(0) {
            tracing::debug!(%id, "rejecting zero quantity");
            return UpdateOutcome::InvalidQuantity;
        }

        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            return UpdateOutcome::NotInCart;
        };

        line.quantity = match update {
            QuantityUpdate::Increment => line.quantity.saturating_add(1),
            QuantityUpdate::Decrement => line.quantity.saturating_sub(1).max(1),
            QuantityUpdate::Set(quantity) => quantity,
        };

        let quantity = line.quantity;
        self.persist();
        UpdateOutcome::Updated { quantity }
    }

    /// Delete the line for `id`, if present.
    pub fn remove_item(&mut self, id: ProductId) -> RemoveOutcome {
        let Some(position) = self.lines.iter().position(|line| line.id == id) else {
            return RemoveOutcome::NotInCart;
        };

        let line = self.lines.remove(position);
        self.persist();
        RemoveOutcome::Removed { name: line.name }
    }

    /// Derive subtotal, tax, and total from the current lines.
    ///
    /// All values are exact; rounding happens only at display time.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let subtotal: Decimal = self.lines.iter().map(CartLine::line_total).sum();
        let tax = subtotal * self.tax_rate;

        CartTotals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Total unit count across all lines, for the badge display.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Run the stub checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to check
    /// out. On success the cart is left as-is; no order is submitted.
    pub fn checkout(&self) -> Result<CheckoutReceipt, CheckoutError> {
        if self.lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Ok(CheckoutReceipt {
            message: CHECKOUT_MESSAGE.to_owned(),
            item_count: self.item_count(),
            total: self.totals().total,
        })
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The configured tax rate.
    #[must_use]
    pub const fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Write the full line sequence through the storage backend.
    ///
    /// Write failures are logged and swallowed; the in-memory cart remains
    /// authoritative for the session.
    fn persist(&mut self) {
        if let Err(e) = self.storage.set(CART_KEY, &self.lines) {
            tracing::warn!("failed to persist cart: {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::storage::MemoryStorage;
    use super::*;
    use serde_json::{Value, json};

    fn demo_store() -> CartStore<MemoryStorage> {
        CartStore::load(MemoryStorage::new(), Decimal::new(8, 2))
    }

    fn id(raw: i32) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn test_repeated_adds_accumulate_one_line() {
        let catalog = Catalog::demo();
        let mut store = demo_store();

        for _ in 0..4 {
            store.add_item(&catalog, id(1));
        }

        assert_eq!(store.item_count(), 4);
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines()[0].quantity, 4);
    }

    #[test]
    fn test_add_outcomes() {
        let catalog = Catalog::demo();
        let mut store = demo_store();

        assert_eq!(
            store.add_item(&catalog, id(1)),
            AddOutcome::Added {
                name: "Enchanted Empress".to_owned()
            }
        );
        assert_eq!(
            store.add_item(&catalog, id(1)),
            AddOutcome::Incremented {
                name: "Enchanted Empress".to_owned(),
                quantity: 2
            }
        );
    }

    #[test]
    fn test_add_unknown_product_is_a_no_op() {
        let catalog = Catalog::demo();
        let mut store = demo_store();
        store.add_item(&catalog, id(1));

        let outcome = store.add_item(&catalog, id(99));

        assert_eq!(outcome, AddOutcome::UnknownProduct);
        assert_eq!(store.item_count(), 1);
        assert_eq!(store.lines().len(), 1);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let catalog = Catalog::demo();
        let mut store = demo_store();

        store.add_item(&catalog, id(2));
        store.add_item(&catalog, id(1));
        store.add_item(&catalog, id(2));

        let ids: Vec<i32> = store.lines().iter().map(|l| l.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        let catalog = Catalog::demo();
        let mut store = demo_store();
        store.add_item(&catalog, id(1));

        for _ in 0..3 {
            let outcome = store.update_quantity(id(1), QuantityUpdate::Decrement);
            assert_eq!(outcome, UpdateOutcome::Updated { quantity: 1 });
        }

        assert_eq!(store.lines()[0].quantity, 1);
    }

    #[test]
    fn test_increment_and_set() {
        let catalog = Catalog::demo();
        let mut store = demo_store();
        store.add_item(&catalog, id(1));

        assert_eq!(
            store.update_quantity(id(1), QuantityUpdate::Increment),
            UpdateOutcome::Updated { quantity: 2 }
        );
        assert_eq!(
            store.update_quantity(id(1), QuantityUpdate::Set(7)),
            UpdateOutcome::Updated { quantity: 7 }
        );
    }

    #[test]
    fn test_set_zero_is_rejected_and_value_retained() {
        let catalog = Catalog::demo();
        let mut store = demo_store();
        store.add_item(&catalog, id(1));
        store.update_quantity(id(1), QuantityUpdate::Set(3));

        let outcome = store.update_quantity(id(1), QuantityUpdate::Set(0));

        assert_eq!(outcome, UpdateOutcome::InvalidQuantity);
        assert_eq!(store.lines()[0].quantity, 3);
    }

    #[test]
    fn test_update_missing_line_is_a_no_op() {
        let mut store = demo_store();
        assert_eq!(
            store.update_quantity(id(1), QuantityUpdate::Increment),
            UpdateOutcome::NotInCart
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_then_add_starts_fresh() {
        let catalog = Catalog::demo();
        let mut store = demo_store();

        store.add_item(&catalog, id(1));
        store.add_item(&catalog, id(1));
        assert_eq!(
            store.remove_item(id(1)),
            RemoveOutcome::Removed {
                name: "Enchanted Empress".to_owned()
            }
        );

        store.add_item(&catalog, id(1));
        assert_eq!(store.lines()[0].quantity, 1);
    }

    #[test]
    fn test_remove_missing_line_is_a_no_op() {
        let mut store = demo_store();
        assert_eq!(store.remove_item(id(1)), RemoveOutcome::NotInCart);
    }

    #[test]
    fn test_totals_relationship() {
        let catalog = Catalog::demo();
        let mut store = demo_store();
        store.add_item(&catalog, id(1));
        store.add_item(&catalog, id(2));
        store.add_item(&catalog, id(2));

        let totals = store.totals();
        assert_eq!(totals.tax, totals.subtotal * Decimal::new(8, 2));
        assert_eq!(totals.total, totals.subtotal + totals.tax);
    }

    #[test]
    fn test_totals_scenario_two_of_product_one() {
        let catalog = Catalog::demo();
        let mut store = demo_store();
        store.add_item(&catalog, id(1));
        store.add_item(&catalog, id(1));

        let totals = store.totals();
        assert_eq!(totals.subtotal, Decimal::new(9998, 2));
        assert_eq!(totals.tax, Decimal::new(79984, 4));
        assert_eq!(totals.total, Decimal::new(1_079_784, 4));
    }

    #[test]
    fn test_totals_of_empty_cart_are_zero() {
        let store = demo_store();
        let totals = store.totals();
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_checkout_empty_cart_blocks() {
        let store = demo_store();
        assert_eq!(store.checkout(), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_checkout_leaves_cart_unchanged() {
        let catalog = Catalog::demo();
        let mut store = demo_store();
        store.add_item(&catalog, id(1));

        let receipt = store.checkout().unwrap();

        assert_eq!(receipt.message, CHECKOUT_MESSAGE);
        assert_eq!(receipt.item_count, 1);
        assert_eq!(store.item_count(), 1);
    }

    #[test]
    fn test_mutations_persist_to_storage() {
        let catalog = Catalog::demo();
        let storage = MemoryStorage::new();

        let mut store = CartStore::load(storage.clone(), Decimal::new(8, 2));
        store.add_item(&catalog, id(1));
        store.add_item(&catalog, id(2));
        store.update_quantity(id(2), QuantityUpdate::Set(5));
        store.remove_item(id(1));

        let reloaded = CartStore::load(storage, Decimal::new(8, 2));
        assert_eq!(reloaded.lines(), store.lines());
        assert_eq!(reloaded.item_count(), 5);
    }

    #[test]
    fn test_malformed_payload_loads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.insert_raw(CART_KEY, Value::String("{definitely not a cart".into()));

        let store = CartStore::load(storage, Decimal::new(8, 2));
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_quantity_lines_are_dropped_on_load() {
        let mut storage = MemoryStorage::new();
        storage.insert_raw(
            CART_KEY,
            json!([
                {
                    "id": 1,
                    "name": "Enchanted Empress",
                    "price": "49.99",
                    "image": "https://example.com/a.jpg",
                    "quantity": 0
                },
                {
                    "id": 2,
                    "name": "Dragon's Breath OG",
                    "price": "54.99",
                    "image": "https://example.com/b.jpg",
                    "quantity": 2
                }
            ]),
        );

        let store = CartStore::load(storage, Decimal::new(8, 2));
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines()[0].id, id(2));
    }
}
