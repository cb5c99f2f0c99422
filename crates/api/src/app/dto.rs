use serde::Deserialize;

use urbanfood_catalog::{FilterChange, FilterState};
use urbanfood_core::CategoryId;
use urbanfood_store::ProductRecord;

use crate::app::errors;

/// Default storefront grid size.
pub const DEFAULT_PER_PAGE: usize = 9;
pub const MAX_PER_PAGE: usize = 100;

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /catalog/products`.
///
/// Everything is optional; an empty query is the default filter state and
/// page 1.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    /// Comma-separated category ids, e.g. `categories=1,3`.
    pub categories: Option<String>,
    /// Comma-separated vendor location labels.
    pub locations: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub organic: Option<bool>,
    pub local: Option<bool>,
    pub fresh_picked: Option<bool>,
    pub rating: Option<u8>,
    pub page: Option<u64>,
    pub per_page: Option<usize>,
}

impl ProductListQuery {
    /// Fold the query parameters through the filter reducer.
    ///
    /// Err carries a ready-to-return 400 response for malformed category ids.
    pub fn filter_state(&self) -> Result<FilterState, axum::response::Response> {
        let mut state = FilterState::default();

        if let Some(csv) = &self.categories {
            for part in csv.split(',').filter(|p| !p.trim().is_empty()) {
                let id: CategoryId = part.trim().parse().map_err(|_| {
                    errors::json_error(
                        axum::http::StatusCode::BAD_REQUEST,
                        "invalid_category",
                        format!("invalid category id: {part}"),
                    )
                })?;
                state = state.apply(FilterChange::ToggleCategory(id));
            }
        }

        if let Some(csv) = &self.locations {
            for part in csv.split(',').filter(|p| !p.trim().is_empty()) {
                state = state.apply(FilterChange::ToggleLocation(part.trim().to_string()));
            }
        }

        if let Some(min) = self.price_min {
            state = state.apply(FilterChange::SetPriceMin(min));
        }
        if let Some(max) = self.price_max {
            state = state.apply(FilterChange::SetPriceMax(max));
        }
        if let Some(on) = self.organic {
            state = state.apply(FilterChange::SetOrganic(on));
        }
        if let Some(on) = self.local {
            state = state.apply(FilterChange::SetLocal(on));
        }
        if let Some(on) = self.fresh_picked {
            state = state.apply(FilterChange::SetFreshPicked(on));
        }
        if let Some(level) = self.rating {
            state = state.apply(FilterChange::SetRating(level));
        }

        Ok(state)
    }

    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> usize {
        match self.per_page {
            None | Some(0) => DEFAULT_PER_PAGE,
            Some(n) => n.min(MAX_PER_PAGE),
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(record: &ProductRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.product.id.as_i64(),
        "name": record.product.name,
        "price": record.product.price,
        "category": record.product.category.as_i64(),
        "location": record.product.location,
        "is_organic": record.product.is_organic,
        "is_local": record.product.is_local,
        "is_fresh_picked": record.product.is_fresh_picked,
        "rating": record.product.rating,
        "created_at": record.created_at.to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_the_default_state() {
        let query = ProductListQuery::default();
        assert_eq!(query.filter_state().unwrap(), FilterState::default());
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), DEFAULT_PER_PAGE);
    }

    #[test]
    fn csv_parameters_fold_into_sets() {
        let query = ProductListQuery {
            categories: Some("1, 3,".into()),
            locations: Some("Riverbend Farm,Hilltop Dairy".into()),
            rating: Some(4),
            ..ProductListQuery::default()
        };
        let state = query.filter_state().unwrap();
        assert_eq!(state.categories.len(), 2);
        assert!(state.categories.contains(&CategoryId::new(3)));
        assert!(state.locations.contains("Hilltop Dairy"));
        assert_eq!(state.min_rating, 4);
        assert_eq!(state.active_filter_count(), 3);
    }

    #[test]
    fn duplicate_category_toggles_out_again() {
        let query = ProductListQuery {
            categories: Some("2,2".into()),
            ..ProductListQuery::default()
        };
        let state = query.filter_state().unwrap();
        assert!(state.categories.is_empty());
    }

    #[test]
    fn malformed_category_id_is_rejected() {
        let query = ProductListQuery {
            categories: Some("1,apples".into()),
            ..ProductListQuery::default()
        };
        assert!(query.filter_state().is_err());
    }

    #[test]
    fn per_page_is_defaulted_and_capped() {
        let zero = ProductListQuery {
            per_page: Some(0),
            ..ProductListQuery::default()
        };
        assert_eq!(zero.per_page(), DEFAULT_PER_PAGE);

        let huge = ProductListQuery {
            per_page: Some(10_000),
            ..ProductListQuery::default()
        };
        assert_eq!(huge.per_page(), MAX_PER_PAGE);
    }
}
