//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten` (also mounted at `POST /shorten`)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// or the form-encoded equivalent `url=https%3A%2F%2Fexample.com`.
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_url": "http://localhost:8080/1",
///   "code": "1"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or malformed.
/// Returns 503 Service Unavailable if the record store cannot be reached.
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let shortened = state
        .shorten_service
        .create_short_url(&payload.url)
        .await?;

    Ok(Json(shortened.into()))
}
