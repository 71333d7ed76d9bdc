//! Domain layer: the short-code model, its encoding and its storage contract.
//!
//! # Architecture
//!
//! - [`codec`] - base62 conversion between counter values and short codes
//! - [`entities`] - stored data structures
//! - [`repositories`] - storage trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP or on a concrete backend.
//!
//! # Allocation Flow
//!
//! 1. [`repositories::RecordStore::next_id`] issues a fresh counter value
//! 2. [`codec::encode`] turns it into a short code
//! 3. A [`entities::ShortCodeRecord`] is stored under that code

pub mod codec;
pub mod entities;
pub mod repositories;
