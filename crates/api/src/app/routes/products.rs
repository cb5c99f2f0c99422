use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use urbanfood_catalog::{filter_products, page_slice, PageDescriptor, Product};
use urbanfood_core::ProductId;
use urbanfood_store::NewProduct;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product))
}

/// `GET /catalog/products` — the filtered, paginated storefront listing.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ProductListQuery>,
) -> axum::response::Response {
    let state = match query.filter_state() {
        Ok(s) => s,
        Err(response) => return response,
    };

    let records = services.products_list();
    let catalog: Vec<Product> = records.iter().map(|r| r.product.clone()).collect();
    let filtered = filter_products(&catalog, &state);

    let page = query.page();
    let per_page = query.per_page();
    let descriptor = PageDescriptor::new(filtered.len(), page, per_page);
    let window = page_slice(&filtered, page, per_page);

    // The store records carry the persistence metadata; re-join the window
    // onto them for the response body.
    let items: Vec<serde_json::Value> = window
        .iter()
        .filter_map(|p| records.iter().find(|r| r.product.id == p.id))
        .map(dto::product_to_json)
        .collect();

    tracing::debug!(
        total = filtered.len(),
        page = descriptor.current_page,
        active_filters = state.active_filter_count(),
        "catalog listing served"
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "total_items": filtered.len(),
            "total_pages": descriptor.total_pages,
            "current_page": descriptor.current_page,
            "per_page": per_page,
            "page_numbers": descriptor.entries,
            "has_previous": descriptor.has_previous,
            "has_next": descriptor.has_next,
            "active_filters": state.active_filter_count(),
            "items": items,
        })),
    )
        .into_response()
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewProduct>,
) -> axum::response::Response {
    match services.products_insert(body) {
        Ok(record) => (
            StatusCode::CREATED,
            Json(dto::product_to_json(&record)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
        }
    };
    match services.products_get(id) {
        Some(record) => (StatusCode::OK, Json(dto::product_to_json(&record))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}
