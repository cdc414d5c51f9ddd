//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::entities::ShortUrlStats;
use crate::state::AppState;

/// Returns aggregated click statistics for a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Statistics are best-effort: an unknown code, a link without analytics,
/// or a sink failure all produce a JSON `null` body with 200, never an
/// error.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Json<Option<ShortUrlStats>> {
    Json(state.stats.get_stats(&code).await)
}
