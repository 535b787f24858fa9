//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::shorten::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the record for a short code without counting the access.
///
/// # Endpoint
///
/// `GET /shorten/{code}/stats`
///
/// The read-only counterpart of `GET /shorten/{code}`: the response carries
/// the current `accessCount`, and two consecutive calls report the same
/// value.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let record = state.shortener.stats(&code).await?;

    Ok(Json(record.into()))
}
