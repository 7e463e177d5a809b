//! HTTP route handlers and router configuration.

mod admin;
mod algebra;
mod cover;
mod pages;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);
    let cors_enabled = state.config.cors_enabled;

    let mut router = Router::new()
        // Health check
        .route("/health", get(admin::health))
        // Geometry API
        .route("/a/s2cover", post(cover::s2cover))
        .route("/a/union", post(algebra::union))
        .route("/a/intersection", post(algebra::intersection))
        .route("/a/difference", post(algebra::difference))
        .route("/a/symmetric_difference", post(algebra::symmetric_difference))
        // Map documents: create-and-redirect, view, update
        .route("/", get(pages::create_map))
        .route("/:name", get(pages::show_map).post(pages::update_map))
        .with_state(state)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}
