//! Catalog persistence collaborator.
//!
//! The storefront treats its backend as a plain CRUD collaborator: list the
//! products, list the reference data, insert a new product. This crate
//! provides that surface in-memory; the filtering core never talks to it
//! directly and only ever sees the snapshots handed out by `list_products`.

pub mod catalog_store;
pub mod seed;

pub use catalog_store::{CatalogStore, InMemoryCatalogStore, NewProduct, ProductRecord};
