//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::PgUrlRepository;

/// Application state, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Pool handle kept for the health check; data access goes through the
    /// service.
    pub db: PgPool,
    pub shortener: Arc<ShortenerService<PgUrlRepository>>,
}
