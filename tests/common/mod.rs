#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortenme::application::services::ClickTracking;
use shortenme::domain::entities::ShortCodeRecord;
use shortenme::domain::repositories::{RecordStore, StoreError, StoreResult};
use shortenme::infrastructure::store::MemoryRecordStore;
use shortenme::routes;
use shortenme::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://sho.rt";

pub fn create_test_state(store: Arc<dyn RecordStore>, click_tracking: ClickTracking) -> AppState {
    AppState::new(store, BASE_URL, click_tracking)
}

/// Server over a fresh in-memory store, plus a handle on that store.
pub fn memory_server() -> (TestServer, Arc<MemoryRecordStore>) {
    let store = Arc::new(MemoryRecordStore::new());
    let state = create_test_state(store.clone(), ClickTracking::BestEffort);
    let server = TestServer::new(routes::router(state)).unwrap();
    (server, store)
}

pub fn server_with(store: Arc<dyn RecordStore>, click_tracking: ClickTracking) -> TestServer {
    let state = create_test_state(store, click_tracking);
    TestServer::new(routes::router(state)).unwrap()
}

/// Store whose every operation fails as if Redis were down.
pub struct UnavailableStore;

#[async_trait]
impl RecordStore for UnavailableStore {
    async fn next_id(&self) -> StoreResult<u64> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn put(&self, _code: &str, _record: ShortCodeRecord) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn get(&self, _code: &str) -> StoreResult<Option<ShortCodeRecord>> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn increment_clicks(&self, _code: &str) -> StoreResult<bool> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

/// Store that serves reads from memory but cannot count clicks.
pub struct ReadOnlyStore {
    pub inner: MemoryRecordStore,
}

#[async_trait]
impl RecordStore for ReadOnlyStore {
    async fn next_id(&self) -> StoreResult<u64> {
        self.inner.next_id().await
    }

    async fn put(&self, code: &str, record: ShortCodeRecord) -> StoreResult<()> {
        self.inner.put(code, record).await
    }

    async fn get(&self, code: &str) -> StoreResult<Option<ShortCodeRecord>> {
        self.inner.get(code).await
    }

    async fn increment_clicks(&self, _code: &str) -> StoreResult<bool> {
        Err(StoreError::Unavailable("timed out".into()))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
