//! Short URL allocation service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::codec;
use crate::domain::entities::ShortCodeRecord;
use crate::domain::repositories::RecordStore;
use crate::error::AppError;
use crate::utils::url_validator::validate_url;

/// Codes shadowed by literal top-level routes; their ids are skipped.
pub const RESERVED_CODES: &[&str] = &["api", "health", "shorten"];

/// Outcome of a successful allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
}

/// Service allocating short codes for long URLs.
///
/// Uniqueness comes solely from [`RecordStore::next_id`]; the id is encoded
/// with [`codec::encode`] and the record is stored under that code. Repeated
/// submissions of the same URL get distinct codes.
pub struct ShortenService {
    store: Arc<dyn RecordStore>,
    base_url: String,
}

impl ShortenService {
    /// Creates a new shortening service.
    ///
    /// `base_url` is the public prefix of short URLs; a trailing `/` is ignored.
    pub fn new(store: Arc<dyn RecordStore>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { store, base_url }
    }

    /// Allocates a short code for `original_url` and returns the full short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL is empty or malformed;
    /// nothing is allocated in that case.
    ///
    /// Returns [`AppError::StoreUnavailable`] if the counter increment or the
    /// record write fails. A counter value consumed before a failed write is
    /// skipped for good; codes need not be contiguous.
    pub async fn create_short_url(&self, original_url: &str) -> Result<ShortenedUrl, AppError> {
        let original_url = validate_url(original_url).map_err(|e| {
            AppError::invalid_input(e.to_string(), json!({ "url": original_url }))
        })?;

        let code = loop {
            let code = codec::encode(self.store.next_id().await?);
            if !RESERVED_CODES.contains(&code.as_str()) {
                break code;
            }
            debug!("Skipping reserved code {}", code);
        };

        let record = ShortCodeRecord::new(original_url.to_string(), Utc::now());
        self.store.put(&code, record).await?;

        let short_url = self.short_url_for(&code);
        info!("Shortened {} -> {}", original_url, short_url);

        Ok(ShortenedUrl {
            code,
            short_url,
            original_url: original_url.to_string(),
        })
    }

    /// Builds the public short URL for a code.
    pub fn short_url_for(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
