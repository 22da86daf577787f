//! Cart state management.
//!
//! The cart is an insertion-ordered sequence of line items, unique by
//! product id, owned exclusively by [`store::CartStore`]. Every mutation
//! persists the full serialized sequence through a [`storage`] backend
//! before returning, so the persisted copy always mirrors the in-memory
//! state. Totals are derived fresh on every read.

pub mod storage;
pub mod store;
pub mod view;

use majik_bloom_core::{Price, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::catalog::Product;

/// One product entry in the cart with its quantity.
///
/// Invariants: `quantity >= 1` (a line leaves the cart by removal, never by
/// reaching zero), and at most one line exists per product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: Url,
    pub quantity: u32,
}

impl CartLine {
    /// A fresh line for `product` with quantity 1.
    pub(crate) fn for_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// The unrounded amount for this line (`price × quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity)
    }
}

/// Derived cart totals, unrounded.
///
/// Rounding to two decimal places happens only at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}
