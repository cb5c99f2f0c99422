//! Reference data served alongside the listing: categories and vendor
//! locations.

use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/locations", get(list_locations))
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items: Vec<serde_json::Value> = services
        .categories_list()
        .into_iter()
        .map(|c| serde_json::json!({ "id": c.id.as_i64(), "name": c.name }))
        .collect();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn list_locations(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "items": services.locations_list() })),
    )
        .into_response()
}
