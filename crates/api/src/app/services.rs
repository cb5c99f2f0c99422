//! Wiring around the catalog store collaborator.

use std::sync::Arc;

use urbanfood_catalog::Category;
use urbanfood_core::{DomainResult, ProductId};
use urbanfood_store::{seed, CatalogStore, NewProduct, ProductRecord};

/// Application services shared by all handlers.
pub struct AppServices {
    catalog: Arc<dyn CatalogStore>,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    pub fn products_list(&self) -> Vec<ProductRecord> {
        self.catalog.list_products()
    }

    pub fn products_get(&self, id: ProductId) -> Option<ProductRecord> {
        self.catalog.get_product(id)
    }

    pub fn products_insert(&self, new: NewProduct) -> DomainResult<ProductRecord> {
        self.catalog.insert_product(new)
    }

    pub fn categories_list(&self) -> Vec<Category> {
        self.catalog.list_categories()
    }

    pub fn locations_list(&self) -> Vec<String> {
        self.catalog.list_locations()
    }
}

/// Build the default service graph: a seeded in-memory catalog.
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(seed::seeded_store()))
}
