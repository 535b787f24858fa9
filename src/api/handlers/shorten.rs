//! Handlers for short URL management endpoints (create, read, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::shorten::{ShortenRequest, UrlRecordResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// Shortening the same URL twice returns the first record unchanged, still
/// with status 201.
///
/// # Errors
///
/// Returns 400 Bad Request when the body or `url` field is missing, or the
/// URL is not a valid absolute http/https URL.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    payload: Option<Json<ShortenRequest>>,
) -> Result<(StatusCode, Json<UrlRecordResponse>), AppError> {
    let url = required_url(payload)?;

    let record = state.shortener.create_short_url(&url).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Returns the record for a short code, counting the access.
///
/// # Endpoint
///
/// `GET /shorten/{code}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn get_short_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let record = state.shortener.resolve(&code).await?;

    Ok(Json(record.into()))
}

/// Points an existing short code at a new URL.
///
/// # Endpoint
///
/// `PUT /shorten/{code}`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/new/destination" }
/// ```
///
/// The short code and access counter are preserved; `updatedAt` is
/// refreshed.
///
/// # Errors
///
/// Returns 400 Bad Request for a missing `url` field, 404 Not Found for an
/// unknown code, and 400 for a malformed URL on a known code. An unknown
/// code wins over a malformed URL.
pub async fn update_short_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    payload: Option<Json<ShortenRequest>>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let url = required_url(payload)?;

    let record = state.shortener.update_url(&code, &url).await?;

    Ok(Json(record.into()))
}

/// Permanently deletes a short URL.
///
/// # Endpoint
///
/// `DELETE /shorten/{code}`
///
/// The freed code becomes eligible for reuse by a later create.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn delete_short_url_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.shortener.delete(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn required_url(payload: Option<Json<ShortenRequest>>) -> Result<String, AppError> {
    payload
        .and_then(|Json(body)| body.url)
        .ok_or_else(|| AppError::validation("URL is required"))
}
