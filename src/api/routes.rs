//! API route configuration.

use crate::api::handlers::{click_count_by_code_handler, click_counts_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`              - Create a short URL
/// - `POST /click-counts`         - Click count for a short URL or code
/// - `GET  /click-counts/{code}`  - Click count for a code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/click-counts", post(click_counts_handler))
        .route("/click-counts/{code}", get(click_count_by_code_handler))
}
