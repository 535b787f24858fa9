//! DTOs for the shorten endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::entities::UrlRecord;

/// Request body for creating or updating a short URL.
///
/// `url` is optional at the serde level so a missing field maps to the
/// `URL is required` validation error instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

/// JSON representation of a stored URL record.
///
/// `id` is serialized as a string and timestamps as ISO8601 UTC with
/// millisecond precision, e.g. `2026-08-04T12:30:00.000Z`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecordResponse {
    pub id: String,
    pub url: String,
    pub short_code: String,
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_millis")]
    pub updated_at: DateTime<Utc>,
    pub access_count: i64,
}

impl From<UrlRecord> for UrlRecordResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id.to_string(),
            url: record.original_url,
            short_code: record.short_code,
            created_at: record.created_at,
            updated_at: record.updated_at,
            access_count: record.access_count,
        }
    }
}

fn serialize_millis<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
