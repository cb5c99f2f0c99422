//! Catalog domain module: filtering, sorting and pagination.
//!
//! This crate contains the storefront's narrowing logic, implemented purely as
//! deterministic domain code (no IO, no HTTP, no storage). The surrounding
//! layers fetch the product collection, hand it in together with the current
//! [`FilterState`], and render whatever comes back.

pub mod filter;
pub mod pagination;
pub mod product;
pub mod query;

pub use filter::{FilterChange, FilterState, PriceRange, MAX_RATING, PRICE_CEILING};
pub use pagination::{page_numbers, page_slice, PageDescriptor, PageEntry};
pub use product::{Category, Product};
pub use query::{filter_products, matches};
