//! Application layer services.
//!
//! Services orchestrate the codec and the record store and give HTTP
//! handlers and the admin CLI a small API with discriminated outcomes.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - short code allocation
//! - [`services::resolve_service::ResolveService`] - code lookup with click counting
//! - [`services::metrics_service::MetricsService`] - click count queries

pub mod services;
