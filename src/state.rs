//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{ClickTracking, MetricsService, ResolveService, ShortenService};
use crate::domain::repositories::RecordStore;

/// Services and the backing store, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub resolve_service: Arc<ResolveService>,
    pub metrics_service: Arc<MetricsService>,
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Wires all services onto one record store.
    pub fn new(store: Arc<dyn RecordStore>, base_url: &str, click_tracking: ClickTracking) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(store.clone(), base_url)),
            resolve_service: Arc::new(ResolveService::new(store.clone(), click_tracking)),
            metrics_service: Arc::new(MetricsService::new(store.clone(), base_url)),
            store,
        }
    }
}
