use axum::Router;

pub mod common;
pub mod items;
pub mod orders;
pub mod reports;
pub mod system;
pub mod usage;

/// Router for all identity-scoped endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/inventory", items::router())
        .nest("/usage", usage::router())
        .nest("/orders", orders::router())
        .nest("/reports", reports::router())
}
