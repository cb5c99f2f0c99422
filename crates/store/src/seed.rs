//! Development seed data: a small local-produce catalog.

use urbanfood_catalog::Category;
use urbanfood_core::CategoryId;

use crate::catalog_store::{CatalogStore, InMemoryCatalogStore, NewProduct};

pub fn default_categories() -> Vec<Category> {
    [
        (1, "Vegetables"),
        (2, "Fruits"),
        (3, "Dairy & Eggs"),
        (4, "Baked Goods"),
        (5, "Honey & Preserves"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        id: CategoryId::new(id),
        name: name.to_string(),
    })
    .collect()
}

/// A store pre-filled with a representative catalog.
pub fn seeded_store() -> InMemoryCatalogStore {
    let store = InMemoryCatalogStore::new(default_categories());

    let products = [
        ("Rainbow Carrots", 3.25, 1, "Riverbend Farm", true, true, true, 4.5),
        ("Heirloom Tomatoes", 5.80, 1, "Sunrise Orchard", true, true, false, 4.8),
        ("Butternut Squash", 4.10, 1, "Riverbend Farm", false, true, true, 4.0),
        ("Honeycrisp Apples", 6.50, 2, "Sunrise Orchard", false, true, true, 4.7),
        ("Wild Blueberries", 8.90, 2, "Hilltop Meadows", true, false, true, 4.9),
        ("Raw Milk", 4.75, 3, "Hilltop Dairy", false, true, false, 4.2),
        ("Pastured Eggs", 7.00, 3, "Hilltop Dairy", true, true, false, 4.6),
        ("Sourdough Loaf", 9.50, 4, "Mill Street Bakery", false, true, false, 4.4),
        ("Rye Crackers", 5.25, 4, "Mill Street Bakery", false, false, false, 3.8),
        ("Wildflower Honey", 12.00, 5, "Hilltop Meadows", true, true, false, 5.0),
        ("Strawberry Jam", 8.25, 5, "Riverbend Farm", false, true, false, 4.1),
    ];

    for (name, price, category, location, organic, local, fresh, rating) in products {
        // Seed data satisfies validation; a failure here is a programming error.
        store
            .insert_product(NewProduct {
                name: name.to_string(),
                price,
                category: CategoryId::new(category),
                location: location.to_string(),
                is_organic: organic,
                is_local: local,
                is_fresh_picked: fresh,
                rating,
            })
            .expect("seed product must be valid");
    }

    store
}
