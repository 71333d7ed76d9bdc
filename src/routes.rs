//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`         - Short link redirect
//! - `GET  /health`         - Health check: record store reachability
//! - `POST /shorten`        - Create a short URL
//! - `POST /click-counts`   - Click count of a short URL
//! - `/api/*`               - JSON API (see [`crate::api::routes`])
//!
//! `api`, `health` and `shorten` are valid short codes, so the shortening
//! service never issues them (see
//! [`RESERVED_CODES`](crate::application::services::RESERVED_CODES)).
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - `chrome-extension://*` origins on `/api/*`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{click_counts_handler, health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and the tracing layer.
///
/// Literal routes take precedence over the `/{code}` capture, so `/health`
/// never reaches the redirect handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/click-counts", post(click_counts_handler))
        .nest("/api", api::routes::api_routes().layer(cors::layer()))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`router`] so that `/abc/` and `/abc` are routed identically.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
