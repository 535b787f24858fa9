//! Shorten API route configuration.

use crate::api::handlers::{
    create_short_url_handler, delete_short_url_handler, get_short_url_handler, stats_handler,
    update_short_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// The `/shorten` endpoint family.
///
/// # Endpoints
///
/// - `POST   /shorten`              - Create a short URL
/// - `GET    /shorten/{code}`       - Resolve a record (counts the access)
/// - `PUT    /shorten/{code}`       - Point the code at a new URL
/// - `DELETE /shorten/{code}`       - Remove the record
/// - `GET    /shorten/{code}/stats` - Read the record without counting
pub fn shorten_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(create_short_url_handler))
        .route(
            "/shorten/{code}",
            get(get_short_url_handler)
                .put(update_short_url_handler)
                .delete(delete_short_url_handler),
        )
        .route("/shorten/{code}/stats", get(stats_handler))
}
