//! Handler for short URL redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// Resolution atomically counts the click. Failure modes:
///
/// - **404** — code unknown *or* link deactivated; the two cases are served
///   the same response so disabled links are not discoverable
/// - **410** — link expired, with a dedicated message body
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let resolved = state.shortener.resolve_short_url(&code).await?;

    Ok(Redirect::temporary(&resolved.original_url))
}
