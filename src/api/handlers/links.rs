//! Handlers for link management endpoints (create, list, update, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::create_link::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::api::dto::link::{ListLinksQuery, ShortUrlResponse};
use crate::api::dto::update_link::UpdateShortUrlRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Errors
///
/// - 400 for invalid destinations, disallowed schemes, self-referential
///   targets, and malformed custom codes
/// - 409 when the requested custom code is already taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    payload.validate()?;

    let created = state.shortener.create_short_url(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Lists a user's short links, newest first.
///
/// # Endpoint
///
/// `GET /api/links?user_id={user_id}`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<Vec<ShortUrlResponse>>, AppError> {
    let listed = state.shortener.list_user_short_urls(&query.user_id).await?;

    Ok(Json(listed.into_iter().map(ShortUrlResponse::from).collect()))
}

/// Partially updates a short link.
///
/// # Endpoint
///
/// `PATCH /api/links/{id}`
///
/// Only `is_active` and `expires_at` are mutable; payloads naming any other
/// field are rejected at deserialization.
pub async fn update_link_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateShortUrlRequest>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let record = state.shortener.update_short_url(id, payload.into()).await?;
    let short_url = state.shortener.short_url_for(&record.short_code);

    Ok(Json(ShortUrlResponse::from_record(record, short_url)))
}

/// Hard-deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// Returns 204 on success and 404 once the record is gone — deletion is not
/// idempotent.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.shortener.delete_short_url(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
