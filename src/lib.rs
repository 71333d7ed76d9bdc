//! # shortenme
//!
//! A URL shortening service built with Axum and Redis.
//!
//! Every shortened URL gets the next value of a global counter, encoded in
//! base62 (`0-9a-zA-Z`). Resolving a code counts a click on its record.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Base62 codec, records and the store trait
//! - **Application Layer** ([`application`]) - Shorten, resolve and click count services
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"   # Optional, in-memory otherwise
//! export SHORTENME_URL="http://localhost:8080"
//!
//! cargo run
//!
//! curl -X POST localhost:8080/api/shorten -H 'content-type: application/json' \
//!      -d '{"url":"https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ClickTracking, MetricsService, ResolveService, ShortenService, ShortenedUrl,
    };
    pub use crate::domain::entities::ShortCodeRecord;
    pub use crate::domain::repositories::{RecordStore, StoreError, StoreResult};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
