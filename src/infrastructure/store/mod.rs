//! Record store backends.
//!
//! - [`RedisRecordStore`] - production backend (JSON records, `INCR` counter)
//! - [`MemoryRecordStore`] - in-process backend for development and testing

mod memory_store;
mod redis_store;

pub use memory_store::MemoryRecordStore;
pub use redis_store::{COUNTER_KEY, RedisRecordStore, prefix_shadows_counter};
