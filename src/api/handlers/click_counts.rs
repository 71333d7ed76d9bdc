//! Handlers for click count queries.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::click_counts::{ClickCountRequest, ClickCountResponse};
use crate::api::extract::JsonOrForm;
use crate::domain::codec;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count of a short URL.
///
/// # Endpoint
///
/// `POST /api/click-counts` (also mounted at `POST /click-counts`)
///
/// # Request Body
///
/// ```json
/// { "short_url": "http://localhost:8080/1" }
/// ```
///
/// A bare code (`"1"`) is accepted as well, and so is a form-encoded body
/// with a `short_url` or `shortURL` field.
///
/// # Errors
///
/// Returns 400 Bad Request if `short_url` is empty.
/// Returns 404 Not Found if the code doesn't exist.
pub async fn click_counts_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ClickCountRequest>,
) -> Result<Json<ClickCountResponse>, AppError> {
    payload.validate()?;

    let code = state
        .metrics_service
        .code_from_short_url(&payload.short_url)
        .to_string();

    click_count_response(&state, code).await.map(Json)
}

/// Returns the click count of a code given in the path.
///
/// # Endpoint
///
/// `GET /api/click-counts/{code}`
///
/// # Errors
///
/// Returns 400 Bad Request if `code` contains characters outside the base62
/// alphabet or exceeds the id range.
/// Returns 404 Not Found if the code doesn't exist.
pub async fn click_count_by_code_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ClickCountResponse>, AppError> {
    codec::decode(&code)?;
    click_count_response(&state, code).await.map(Json)
}

async fn click_count_response(
    state: &AppState,
    code: String,
) -> Result<ClickCountResponse, AppError> {
    let click_count = state
        .metrics_service
        .click_count(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))?;

    Ok(ClickCountResponse {
        short_url: state.shorten_service.short_url_for(&code),
        code,
        click_count,
    })
}
