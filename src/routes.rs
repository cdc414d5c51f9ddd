//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /s/{code}` - Short link redirect; `/s/` is reserved for this
//! - `GET /health`   - Datastore connectivity check
//! - `/api/*`        - Link management and statistics
//!
//! Request tracing is applied to every route. Path normalization is layered
//! on in [`crate::server`], outside the router, where it can see raw paths.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/s/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
