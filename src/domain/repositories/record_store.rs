//! Storage contract for short-code records and the global id counter.

use crate::domain::entities::ShortCodeRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a [`RecordStore`] backend.
///
/// "Not found" is deliberately absent: lookups return `Ok(None)` for that.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached, rejected the request or timed out.
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    /// A stored value could not be decoded into a [`ShortCodeRecord`].
    #[error("corrupt record for '{code}': {reason}")]
    Corrupt { code: String, reason: String },
}

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value backend holding one record per short code plus a single
/// monotonic counter.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisRecordStore`] - production backend
/// - [`crate::infrastructure::store::MemoryRecordStore`] - in-process backend for
///   development and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Atomically increments the global counter and returns the new value.
    ///
    /// Concurrent callers never observe the same value. The first value
    /// issued by an empty store is `1`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend cannot be reached.
    async fn next_id(&self) -> StoreResult<u64>;

    /// Creates or overwrites the record stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend cannot be reached.
    async fn put(&self, code: &str, record: ShortCodeRecord) -> StoreResult<()>;

    /// Fetches the record stored under `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if no record exists
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on backend failures and
    /// [`StoreError::Corrupt`] if the stored value cannot be decoded.
    async fn get(&self, code: &str) -> StoreResult<Option<ShortCodeRecord>>;

    /// Adds one click to the record stored under `code`.
    ///
    /// Returns `Ok(false)` if the record does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on backend failures and
    /// [`StoreError::Corrupt`] if the stored value cannot be decoded.
    async fn increment_clicks(&self, code: &str) -> StoreResult<bool>;

    /// Checks that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the probe fails.
    async fn health_check(&self) -> StoreResult<()>;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
