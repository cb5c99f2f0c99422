//! Catalog query executor.
//!
//! Membership is a logical AND across filter groups, with OR semantics inside
//! the category and location sets. An empty set leaves its group inactive.

use crate::filter::FilterState;
use crate::product::Product;

/// Whether a single product satisfies every active filter group.
pub fn matches(product: &Product, state: &FilterState) -> bool {
    // The reducer does not cross-clamp the price bounds, so an inverted
    // range is representable; treat it as total exclusion, not an error.
    if state.price_range.is_inverted() {
        return false;
    }

    if !state.categories.is_empty() && !state.categories.contains(&product.category) {
        return false;
    }

    if !state.price_range.contains(product.price) {
        return false;
    }

    if !state.locations.is_empty() && !state.locations.contains(&product.location) {
        return false;
    }

    if state.organic_only && !product.is_organic {
        return false;
    }

    if state.local_only && !product.is_local {
        return false;
    }

    if state.fresh_picked_only && !product.is_fresh_picked {
        return false;
    }

    if state.min_rating > 0 && product.rating < f64::from(state.min_rating) {
        return false;
    }

    true
}

/// Filter the full collection down to the products matching `state`.
///
/// Order-preserving: the output is a subsequence of the input, typically the
/// server-supplied order. An empty result is a valid outcome, not an error.
pub fn filter_products(products: &[Product], state: &FilterState) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches(p, state))
        .cloned()
        .collect()
}
