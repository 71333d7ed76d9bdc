//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod click_counts;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use click_counts::{click_count_by_code_handler, click_counts_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
