//! In-process record store.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::entities::ShortCodeRecord;
use crate::domain::repositories::{RecordStore, StoreResult};

/// A record store that keeps everything in memory.
///
/// Used when Redis is not configured and in tests. Data does not survive a
/// restart and is not shared between processes.
///
/// The counter is an [`AtomicU64`], so concurrent allocations never observe
/// the same id. Click increments run under the map's per-entry lock.
pub struct MemoryRecordStore {
    records: DashMap<String, ShortCodeRecord>,
    counter: AtomicU64,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory record store");
        Self {
            records: DashMap::new(),
            counter: AtomicU64::new(0),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn next_id(&self) -> StoreResult<u64> {
        Ok(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn put(&self, code: &str, record: ShortCodeRecord) -> StoreResult<()> {
        self.records.insert(code.to_string(), record);
        Ok(())
    }

    async fn get(&self, code: &str) -> StoreResult<Option<ShortCodeRecord>> {
        Ok(self.records.get(code).map(|r| r.value().clone()))
    }

    async fn increment_clicks(&self, code: &str) -> StoreResult<bool> {
        match self.records.get_mut(code) {
            Some(mut record) => {
                record.register_click();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
