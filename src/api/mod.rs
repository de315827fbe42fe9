//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state.
///
/// CORS is wide open (any origin, method, header) so browser frontends can
/// consume the API directly. The explicit trailing-slash route exists because
/// an empty category segment must surface as a validation error rather than
/// an unmatched path.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/menu", get(handlers::get_menu))
        .route("/menu/:item_id", get(handlers::get_menu_item))
        .route("/menu/category/", get(handlers::empty_category))
        .route("/menu/category/:category", get(handlers::get_menu_by_category))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper: router over the standard seeded catalog
pub fn create_seeded_router() -> Router {
    create_router(AppState::new(Arc::new(Catalog::seeded())))
}
