//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored URL mapping.
///
/// `short_code` is unique among live records and immutable after creation.
/// `updated_at` is refreshed only when `original_url` changes; counter
/// increments leave it untouched.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub access_count: i64,
}

/// Input data for creating a new URL record.
///
/// `id`, timestamps, and the zeroed access counter are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
}
