//! The fixed in-memory menu catalog
//!
//! Built once at process start and read-only afterwards, so any number of
//! request handlers can share a reference without synchronization.

use crate::error::{Error, Result};
use crate::types::{ItemId, MenuItem};

/// The ordered, immutable collection of menu items.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build the catalog from the standard seed data.
    pub fn seeded() -> Self {
        Self {
            items: seed_items(),
        }
    }

    /// Build a catalog from an explicit item list.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up a single item by id.
    pub fn get(&self, id: ItemId) -> Result<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(Error::ItemNotFound(id))
    }

    /// All items whose category matches `category`, case-insensitively,
    /// in insertion order. No matches is an empty vec, not an error.
    pub fn by_category(&self, category: &str) -> Vec<&MenuItem> {
        let wanted = category.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.category.to_lowercase() == wanted)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn seed_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "Artisan Sourdough".to_string(),
            description: "Our famous 24-hour fermented sourdough with a perfect crust and tangy flavor.".to_string(),
            price: 6.50,
            image_url: "https://images.unsplash.com/photo-1509440159596-0249088772ff?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80".to_string(),
            category: "bread".to_string(),
        },
        MenuItem {
            id: 2,
            name: "Butter Croissants".to_string(),
            description: "Flaky, buttery layers that melt in your mouth. Perfect with coffee or tea.".to_string(),
            price: 4.25,
            image_url: "https://images.unsplash.com/photo-1555507036-ab1f4038808a?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80".to_string(),
            category: "pastry".to_string(),
        },
        MenuItem {
            id: 3,
            name: "Chocolate Dream Cake".to_string(),
            description: "Rich chocolate layers with ganache frosting. A chocolate lover's paradise.".to_string(),
            price: 8.99,
            image_url: "https://images.unsplash.com/photo-1565958011703-44f9829ba187?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80".to_string(),
            category: "dessert".to_string(),
        },
        MenuItem {
            id: 4,
            name: "Cinnamon Rolls".to_string(),
            description: "Soft, fluffy rolls with cinnamon sugar and cream cheese frosting.".to_string(),
            price: 5.50,
            image_url: "https://images.unsplash.com/photo-1608198093002-ad4e505484ba?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80".to_string(),
            category: "pastry".to_string(),
        },
    ]
}
