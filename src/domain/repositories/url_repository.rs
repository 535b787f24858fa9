//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stored URL mappings.
///
/// Every operation is atomic with respect to the single record it touches;
/// mutations commit durably before returning success.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new record, returning it with store-assigned fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] when the short code is already
    /// taken (unique index hit by a concurrent insert).
    /// Returns [`AppError::Database`] on other database errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its original URL.
    ///
    /// When racing creates produced duplicate rows for the same URL, the
    /// oldest record wins.
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Increments the access counter and returns the updated record.
    ///
    /// Executes as a single read-modify-write statement so concurrent
    /// increments are never lost. Leaves `updated_at` untouched.
    async fn touch_access(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Replaces `original_url` and refreshes `updated_at`.
    ///
    /// The short code and access counter are left unchanged.
    async fn update_url(&self, code: &str, new_url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Hard-deletes a record, returning whether one existed.
    ///
    /// The freed code becomes immediately reusable.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;
}
