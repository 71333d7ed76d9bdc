//! Core domain entities.
//!
//! - [`ShortCodeRecord`] - the stored destination and click counter of one short code

pub mod short_code_record;

pub use short_code_record::ShortCodeRecord;
