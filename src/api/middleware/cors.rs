//! CORS policy for the JSON API.

use axum::http::{HeaderValue, Method, header, request::Parts};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origin scheme of browser extension pages allowed to call the API.
const EXTENSION_ORIGIN_PREFIX: &[u8] = b"chrome-extension://";

/// Creates the CORS layer for `/api`.
///
/// Only `chrome-extension://*` origins are allowed, with `POST` and
/// `OPTIONS` and the `Content-Type` and `Authorization` request headers.
/// Preflight requests are answered by the layer itself.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(is_extension_origin))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

fn is_extension_origin(origin: &HeaderValue, _parts: &Parts) -> bool {
    let origin = origin.as_bytes();
    origin.len() > EXTENSION_ORIGIN_PREFIX.len() && origin.starts_with(EXTENSION_ORIGIN_PREFIX)
}
