//! API route configuration.
//!
//! # Endpoints
//!
//! - `POST   /links`         - Create a short link
//! - `GET    /links`         - List a user's short links
//! - `PATCH  /links/{id}`    - Partially update a link (active flag, expiry)
//! - `DELETE /links/{id}`    - Hard-delete a link
//! - `GET    /stats/{code}`  - Aggregated click statistics for a link

use crate::api::handlers::{
    create_link_handler, delete_link_handler, list_links_handler, stats_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route(
            "/links/{id}",
            patch(update_link_handler).delete(delete_link_handler),
        )
        .route("/stats/{code}", get(stats_handler))
}
