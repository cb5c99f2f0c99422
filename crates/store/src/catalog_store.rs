use std::collections::BTreeSet;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use urbanfood_catalog::{Category, Product, MAX_RATING, PRICE_CEILING};
use urbanfood_core::{CategoryId, DomainError, DomainResult, ProductId};

/// A stored product: the catalog record plus persistence metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(flatten)]
    pub product: Product,
    pub created_at: DateTime<Utc>,
}

/// Fields a vendor supplies when adding a product; the store assigns the id
/// and timestamp.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: CategoryId,
    pub location: String,
    #[serde(default)]
    pub is_organic: bool,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub is_fresh_picked: bool,
    #[serde(default)]
    pub rating: f64,
}

impl NewProduct {
    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.location.trim().is_empty() {
            return Err(DomainError::validation("location cannot be empty"));
        }
        if !(0.0..=PRICE_CEILING).contains(&self.price) {
            return Err(DomainError::validation(format!(
                "price must be between 0 and {PRICE_CEILING}"
            )));
        }
        if !(0.0..=f64::from(MAX_RATING)).contains(&self.rating) {
            return Err(DomainError::validation("rating must be between 0 and 5"));
        }
        Ok(())
    }
}

/// CRUD surface of the catalog backend.
pub trait CatalogStore: Send + Sync {
    /// Snapshot of every product, in insertion order.
    fn list_products(&self) -> Vec<ProductRecord>;
    fn get_product(&self, id: ProductId) -> Option<ProductRecord>;
    fn insert_product(&self, new: NewProduct) -> DomainResult<ProductRecord>;
    fn list_categories(&self) -> Vec<Category>;
    /// Distinct vendor location labels, sorted.
    fn list_locations(&self) -> Vec<String>;
}

#[derive(Debug, Default)]
struct Inner {
    products: Vec<ProductRecord>,
    locations: BTreeSet<String>,
    next_id: i64,
}

/// In-memory catalog store for dev and tests.
#[derive(Debug)]
pub struct InMemoryCatalogStore {
    inner: RwLock<Inner>,
    categories: Vec<Category>,
}

impl InMemoryCatalogStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                ..Inner::default()
            }),
            categories,
        }
    }

    fn category_exists(&self, id: CategoryId) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn list_products(&self) -> Vec<ProductRecord> {
        match self.inner.read() {
            Ok(inner) => inner.products.clone(),
            Err(_) => vec![],
        }
    }

    fn get_product(&self, id: ProductId) -> Option<ProductRecord> {
        let inner = self.inner.read().ok()?;
        inner.products.iter().find(|r| r.product.id == id).cloned()
    }

    fn insert_product(&self, new: NewProduct) -> DomainResult<ProductRecord> {
        new.validate()?;
        if !self.category_exists(new.category) {
            return Err(DomainError::validation(format!(
                "unknown category: {}",
                new.category
            )));
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("catalog store lock poisoned"))?;

        let id = ProductId::new(inner.next_id);
        inner.next_id += 1;

        let record = ProductRecord {
            product: Product {
                id,
                name: new.name,
                price: new.price,
                category: new.category,
                location: new.location,
                is_organic: new.is_organic,
                is_local: new.is_local,
                is_fresh_picked: new.is_fresh_picked,
                rating: new.rating,
            },
            created_at: Utc::now(),
        };

        inner.locations.insert(record.product.location.clone());
        inner.products.push(record.clone());
        tracing::debug!(product_id = %id, "product inserted");
        Ok(record)
    }

    fn list_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn list_locations(&self) -> Vec<String> {
        match self.inner.read() {
            Ok(inner) => inner.locations.iter().cloned().collect(),
            Err(_) => vec![],
        }
    }
}
