use axum::Router;

pub mod products;
pub mod reference;
pub mod system;

/// Catalog route tree, nested under `/catalog`.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .merge(reference::router())
}
