//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::store`. Mock implementations are generated with
//! `mockall` for unit tests.

pub mod record_store;

pub use record_store::{RecordStore, StoreError, StoreResult};

#[cfg(test)]
pub use record_store::MockRecordStore;
