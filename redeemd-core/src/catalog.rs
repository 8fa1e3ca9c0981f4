//! Static dessert catalog behind the order API.
//!
//! The catalog is an explicitly constructed read-only value shared through
//! application state; nothing mutates it after construction.

use serde::Serialize;

/// One orderable product.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f32,
}

/// Read-only product listing with id lookup.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// The seed catalog served by the API.
    pub fn seed() -> Self {
        let product = |id: &str, name: &str, category: &str, price: f32| Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
        };

        Self {
            products: vec![
                product("1", "Chicken Waffle", "Waffle", 6.5),
                product("2", "Vanilla Bean Crème Brûlée", "Crème Brûlée", 7.0),
                product("3", "Macaron Mix of Five", "Macaron", 8.0),
                product("4", "Classic Tiramisu", "Tiramisu", 5.5),
                product("5", "Pistachio Baklava", "Baklava", 4.0),
            ],
        }
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
