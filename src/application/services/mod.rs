//! Business logic services for the application layer.

pub mod metrics_service;
pub mod resolve_service;
pub mod shorten_service;

pub use metrics_service::MetricsService;
pub use resolve_service::{ClickTracking, ResolveService};
pub use shorten_service::{RESERVED_CODES, ShortenService, ShortenedUrl};
