//! DTOs for click count queries.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for the click count of a short URL.
///
/// `short_url` may be the full short URL or just its code.
#[derive(Debug, Deserialize, Validate)]
pub struct ClickCountRequest {
    #[serde(alias = "shortURL")]
    #[validate(length(min = 1, message = "Short URL is required"))]
    pub short_url: String,
}

/// Click count of an existing short code.
#[derive(Debug, Serialize)]
pub struct ClickCountResponse {
    pub short_url: String,
    pub code: String,
    pub click_count: u64,
}
