//! Click count queries.

use std::sync::Arc;

use tracing::debug;

use crate::domain::codec;
use crate::domain::repositories::RecordStore;
use crate::error::AppError;

/// Read-only access to per-code click counters.
pub struct MetricsService {
    store: Arc<dyn RecordStore>,
    base_url: String,
}

impl MetricsService {
    /// Creates a new metrics service.
    ///
    /// `base_url` is the public short URL prefix used by
    /// [`Self::code_from_short_url`].
    pub fn new(store: Arc<dyn RecordStore>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { store, base_url }
    }

    /// Returns the click count of `code` without modifying it.
    ///
    /// `Ok(Some(0))` means the code exists and was never resolved;
    /// `Ok(None)` means it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the lookup fails.
    pub async fn click_count(&self, code: &str) -> Result<Option<u64>, AppError> {
        if !codec::is_canonical(code) {
            debug!("Rejected non-canonical code {:?}", code);
            return Ok(None);
        }

        let count = self.store.get(code).await?.map(|r| r.click_count);
        Ok(count)
    }

    /// Extracts the short code from a full short URL.
    ///
    /// Strips the configured base URL prefix if present, so both
    /// `"https://s.example.com/abc"` and `"abc"` yield `"abc"`. Whitespace and
    /// a trailing `/` are ignored.
    pub fn code_from_short_url<'a>(&self, input: &'a str) -> &'a str {
        let trimmed = input.trim().trim_end_matches('/');
        trimmed
            .strip_prefix(self.base_url.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortCodeRecord;
    use crate::domain::repositories::{MockRecordStore, StoreError};
    use chrono::Utc;

    const BASE: &str = "https://s.example.com";

    #[tokio::test]
    async fn test_click_count_found() {
        let mut store = MockRecordStore::new();
        store.expect_get().times(1).returning(|_| {
            let mut record = ShortCodeRecord::new("https://a.com".into(), Utc::now());
            record.click_count = 3;
            Ok(Some(record))
        });
        store.expect_increment_clicks().times(0);

        let service = MetricsService::new(Arc::new(store), BASE);

        assert_eq!(service.click_count("b").await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_click_count_zero_distinct_from_missing() {
        let mut store = MockRecordStore::new();
        store
            .expect_get()
            .withf(|code| code == "1")
            .returning(|_| Ok(Some(ShortCodeRecord::new("https://a.com".into(), Utc::now()))));
        store
            .expect_get()
            .withf(|code| code == "2")
            .returning(|_| Ok(None));

        let service = MetricsService::new(Arc::new(store), BASE);

        assert_eq!(service.click_count("1").await.unwrap(), Some(0));
        assert_eq!(service.click_count("2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_click_count_empty_code_is_not_found() {
        let mut store = MockRecordStore::new();
        store.expect_get().times(0);

        let service = MetricsService::new(Arc::new(store), BASE);

        assert_eq!(service.click_count("").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_click_count_backend_failure() {
        let mut store = MockRecordStore::new();
        store
            .expect_get()
            .returning(|_| Err(StoreError::Unavailable("auth failed".into())));

        let service = MetricsService::new(Arc::new(store), BASE);

        assert!(matches!(
            service.click_count("abc").await,
            Err(AppError::StoreUnavailable { .. })
        ));
    }

    #[test]
    fn test_code_from_short_url() {
        let service = MetricsService::new(Arc::new(MockRecordStore::new()), format!("{}/", BASE));

        assert_eq!(service.code_from_short_url("https://s.example.com/abc"), "abc");
        assert_eq!(service.code_from_short_url(" https://s.example.com/abc/ "), "abc");
        assert_eq!(service.code_from_short_url("abc"), "abc");
        assert_eq!(service.code_from_short_url("https://s.example.com/"), "https://s.example.com");
        assert_eq!(
            service.code_from_short_url("https://other.com/abc"),
            "https://other.com/abc"
        );
        assert_eq!(service.code_from_short_url(""), "");
    }
}
