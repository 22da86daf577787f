//! Product catalog.
//!
//! The catalog is supplied to the cart store rather than baked into it, so
//! the store can be exercised against any product set. The shop itself runs
//! on the fixed demo catalog from [`Catalog::demo`].

use majik_bloom_core::{Price, ProductId};
use url::Url;

/// A product available in the shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: Url,
}

/// In-memory product lookup, insertion-ordered for listing.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The three-item demo catalog of the Majik Bloom shop.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![
            demo_product(1, "Enchanted Empress", 4999,
                "https://images.unsplash.com/photo-1600857062243-301a450352c0?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80"),
            demo_product(2, "Dragon's Breath OG", 5499,
                "https://images.unsplash.com/photo-1567436864655-7c5d74a373e8?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80"),
            demo_product(3, "Celestial Kush", 5999,
                "https://images.unsplash.com/photo-1570475735025-6cd1a5c5c0d7?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80"),
        ])
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in listing order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn demo_product(id: i32, name: &str, cents: i64, image: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents),
        image: Url::parse(image).expect("demo image URL is valid"),
    }
}
