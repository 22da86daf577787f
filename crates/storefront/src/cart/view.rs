//! Cart display derivation.
//!
//! Views are recomputed from the store on every read; nothing here caches.
//! Monetary values are rounded to two decimal places at this boundary only.

use majik_bloom_core::{ProductId, price::format_usd};
use url::Url;

use super::storage::KeyValueStorage;
use super::store::CartStore;
use super::CartLine;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub image: Url,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            image: line.image.clone(),
            quantity: line.quantity,
            price: line.price.display(),
            line_total: format_usd(line.line_total()),
        }
    }
}

/// Cart display data: line views plus the summary fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            tax: "$0.00".to_string(),
            total: "$0.00".to_string(),
            item_count: 0,
        }
    }

    /// Derive a fresh view from the store's current state.
    #[must_use]
    pub fn from_store<S: KeyValueStorage>(store: &CartStore<S>) -> Self {
        let totals = store.totals();

        Self {
            items: store.lines().iter().map(CartItemView::from).collect(),
            subtotal: format_usd(totals.subtotal),
            tax: format_usd(totals.tax),
            total: format_usd(totals.total),
            item_count: store.item_count(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::storage::MemoryStorage;
    use super::*;
    use crate::catalog::Catalog;
    use rust_decimal::Decimal;

    #[test]
    fn test_empty_view() {
        let view = CartView::empty();
        assert!(view.items.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn test_view_formats_scenario_totals() {
        let catalog = Catalog::demo();
        let mut store = CartStore::load(MemoryStorage::new(), Decimal::new(8, 2));
        store.add_item(&catalog, ProductId::new(1));
        store.add_item(&catalog, ProductId::new(1));

        let view = CartView::from_store(&store);

        assert_eq!(view.subtotal, "$99.98");
        assert_eq!(view.tax, "$8.00");
        assert_eq!(view.total, "$107.98");
        assert_eq!(view.item_count, 2);

        let item = &view.items[0];
        assert_eq!(item.price, "$49.99");
        assert_eq!(item.line_total, "$99.98");
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_view_reflects_store_after_each_mutation() {
        let catalog = Catalog::demo();
        let mut store = CartStore::load(MemoryStorage::new(), Decimal::new(8, 2));

        store.add_item(&catalog, ProductId::new(3));
        assert_eq!(CartView::from_store(&store).item_count, 1);

        store.add_item(&catalog, ProductId::new(3));
        assert_eq!(CartView::from_store(&store).item_count, 2);

        store.remove_item(ProductId::new(3));
        let view = CartView::from_store(&store);
        assert!(view.items.is_empty());
        assert_eq!(view.total, "$0.00");
    }
}
