//! URL shortening service: validation, dedup, and code allocation.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::is_valid_url;

/// Attempt budget for unique code generation. At 62^6 combinations the loop
/// effectively never runs dry; the bound exists so a pathological store
/// state fails loudly instead of spinning.
const MAX_CODE_ATTEMPTS: usize = 100;

/// Service for creating, resolving, and managing shortened URLs.
///
/// Owns the validate-dedup-generate pipeline on create and the not-found
/// mapping for all code-keyed operations.
pub struct ShortenerService<R: UrlRepository> {
    repository: Arc<R>,
    code_length: usize,
}

impl<R: UrlRepository> ShortenerService<R> {
    /// Creates a new service generating codes of `code_length` characters.
    pub fn new(repository: Arc<R>, code_length: usize) -> Self {
        Self {
            repository,
            code_length,
        }
    }

    /// Shortens a URL, returning the stored record.
    ///
    /// The URL is trimmed and validated before any store interaction. If
    /// the same URL was already shortened, the existing record is returned
    /// unchanged instead of allocating a second code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL and
    /// [`AppError::CodeSpaceExhausted`] when code generation runs out of
    /// attempts.
    pub async fn create_short_url(&self, url: &str) -> Result<UrlRecord, AppError> {
        let url = url.trim();

        if !is_valid_url(url) {
            return Err(AppError::validation(
                "Invalid URL format. URL must start with http:// or https://",
            ));
        }

        if let Some(existing) = self.repository.find_by_url(url).await? {
            return Ok(existing);
        }

        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code(self.code_length);

            if self.repository.find_by_code(&code).await?.is_some() {
                continue;
            }

            let new_record = NewUrlRecord {
                original_url: url.to_string(),
                short_code: code,
            };

            match self.repository.create(new_record).await {
                Ok(record) => return Ok(record),
                // Lost the insert race for this code; draw again.
                Err(AppError::CodeConflict) => continue,
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = MAX_CODE_ATTEMPTS,
            length = self.code_length,
            "unique code generation exhausted its attempt budget"
        );
        Err(AppError::CodeSpaceExhausted)
    }

    /// Resolves a short code, incrementing its access counter.
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .touch_access(code)
            .await?
            .ok_or_else(record_not_found)
    }

    /// Returns a record without touching its access counter.
    pub async fn stats(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(record_not_found)
    }

    /// Points an existing short code at a new URL.
    ///
    /// The code and access counter are preserved; `updated_at` is
    /// refreshed. An unknown code wins over a malformed URL: the lookup
    /// happens first, and only a known code gets its new URL validated.
    pub async fn update_url(&self, code: &str, new_url: &str) -> Result<UrlRecord, AppError> {
        if self.repository.find_by_code(code).await?.is_none() {
            return Err(record_not_found());
        }

        let new_url = new_url.trim();

        if !is_valid_url(new_url) {
            return Err(AppError::validation(
                "Invalid URL format. URL must start with http:// or https://",
            ));
        }

        self.repository
            .update_url(code, new_url)
            .await?
            .ok_or_else(record_not_found)
    }

    /// Removes a short code permanently. The code becomes reusable.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if self.repository.delete(code).await? {
            Ok(())
        } else {
            Err(record_not_found())
        }
    }
}

fn record_not_found() -> AppError {
    AppError::not_found("Short URL not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;

    fn test_record(id: i64, code: &str, url: &str) -> UrlRecord {
        let now = Utc::now();
        UrlRecord {
            id,
            original_url: url.to_string(),
            short_code: code.to_string(),
            created_at: now,
            updated_at: now,
            access_count: 0,
        }
    }

    fn service(repo: MockUrlRepository) -> ShortenerService<MockUrlRepository> {
        ShortenerService::new(Arc::new(repo), 6)
    }

    #[tokio::test]
    async fn test_create_short_url_success() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url().times(1).returning(|_| Ok(None));
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_create()
            .withf(|new_record| {
                new_record.short_code.len() == 6
                    && new_record
                        .short_code
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric())
            })
            .times(1)
            .returning(|new_record| {
                Ok(test_record(
                    1,
                    &new_record.short_code,
                    &new_record.original_url,
                ))
            });

        let record = service(repo)
            .create_short_url("https://example.com/a/b")
            .await
            .unwrap();

        assert_eq!(record.original_url, "https://example.com/a/b");
        assert_eq!(record.access_count, 0);
    }

    #[tokio::test]
    async fn test_create_trims_whitespace() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_create()
            .withf(|new_record| new_record.original_url == "https://example.com")
            .times(1)
            .returning(|new_record| {
                Ok(test_record(
                    1,
                    &new_record.short_code,
                    &new_record.original_url,
                ))
            });

        service(repo)
            .create_short_url("  https://example.com  ")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_returns_existing_record_for_known_url() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url()
            .times(1)
            .returning(|_| Ok(Some(test_record(5, "known1", "https://example.com"))));
        repo.expect_create().times(0);

        let record = service(repo)
            .create_short_url("https://example.com")
            .await
            .unwrap();

        assert_eq!(record.id, 5);
        assert_eq!(record.short_code, "known1");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_url_before_store() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_url().times(0);

        let result = service(repo).create_short_url("not-a-url").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_redraws_on_code_collision() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url().times(1).returning(|_| Ok(None));

        let mut taken = true;
        repo.expect_find_by_code().times(2).returning(move |code| {
            if taken {
                taken = false;
                Ok(Some(test_record(9, code, "https://other.com")))
            } else {
                Ok(None)
            }
        });

        repo.expect_create().times(1).returning(|new_record| {
            Ok(test_record(
                2,
                &new_record.short_code,
                &new_record.original_url,
            ))
        });

        let record = service(repo)
            .create_short_url("https://example.com")
            .await
            .unwrap();

        assert_eq!(record.id, 2);
    }

    #[tokio::test]
    async fn test_create_redraws_on_insert_race() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url().times(1).returning(|_| Ok(None));
        repo.expect_find_by_code().times(2).returning(|_| Ok(None));

        let mut lost_race = true;
        repo.expect_create().times(2).returning(move |new_record| {
            if lost_race {
                lost_race = false;
                Err(AppError::CodeConflict)
            } else {
                Ok(test_record(
                    3,
                    &new_record.short_code,
                    &new_record.original_url,
                ))
            }
        });

        let record = service(repo)
            .create_short_url("https://example.com")
            .await
            .unwrap();

        assert_eq!(record.id, 3);
    }

    #[tokio::test]
    async fn test_create_fails_when_code_space_exhausted() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_url().times(1).returning(|_| Ok(None));
        repo.expect_find_by_code()
            .times(MAX_CODE_ATTEMPTS)
            .returning(|code| Ok(Some(test_record(1, code, "https://taken.com"))));
        repo.expect_create().times(0);

        let result = service(repo).create_short_url("https://example.com").await;

        assert!(matches!(result, Err(AppError::CodeSpaceExhausted)));
    }

    #[tokio::test]
    async fn test_resolve_increments_via_touch() {
        let mut repo = MockUrlRepository::new();

        repo.expect_touch_access()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| {
                let mut record = test_record(1, code, "https://example.com");
                record.access_count = 1;
                Ok(Some(record))
            });

        let record = service(repo).resolve("abc123").await.unwrap();
        assert_eq!(record.access_count, 1);
    }

    #[tokio::test]
    async fn test_resolve_unknown_code_is_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_touch_access().times(1).returning(|_| Ok(None));

        let result = service(repo).resolve("nosuch").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_stats_does_not_touch_counter() {
        let mut repo = MockUrlRepository::new();

        repo.expect_touch_access().times(0);
        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(test_record(1, code, "https://example.com"))));

        let record = service(repo).stats("abc123").await.unwrap();
        assert_eq!(record.access_count, 0);
    }

    #[tokio::test]
    async fn test_update_url_rejects_invalid_url_for_known_code() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_code()
            .times(1)
            .returning(|code| Ok(Some(test_record(1, code, "https://example.com/old"))));
        repo.expect_update_url().times(0);

        let result = service(repo).update_url("abc123", "ftp://example.com").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_url_unknown_code_is_not_found() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_update_url().times(0);

        let result = service(repo)
            .update_url("nosuch", "https://example.com")
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_url_unknown_code_wins_over_invalid_url() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_update_url().times(0);

        let result = service(repo).update_url("nosuch", "not-a-url").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_record_is_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(false));

        let result = service(repo).delete("nosuch").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(true));

        assert!(service(repo).delete("abc123").await.is_ok());
    }
}
