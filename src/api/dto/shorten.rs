//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ShortenedUrl;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// Response for a newly allocated short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
    pub code: String,
}

impl From<ShortenedUrl> for ShortenResponse {
    fn from(s: ShortenedUrl) -> Self {
        Self {
            original_url: s.original_url,
            short_url: s.short_url,
            code: s.code,
        }
    }
}
