//! Helpers shared by the services and the HTTP layer.
//!
//! - [`url_validator`] - syntactic checks for URLs submitted for shortening

pub mod url_validator;
