//! Record stored for every allocated short code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The destination and click counter behind one short code.
///
/// `original_url` and `created_at` are fixed when the code is allocated;
/// only `click_count` changes afterwards, and it never decreases.
///
/// Stored as JSON with the field names below, so records written by other
/// tools sharing the same Redis instance stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortCodeRecord {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: u64,
}

impl ShortCodeRecord {
    /// Creates a fresh record with zero clicks.
    pub fn new(original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            original_url,
            created_at,
            click_count: 0,
        }
    }

    /// Records one more click.
    pub fn register_click(&mut self) {
        self.click_count = self.click_count.saturating_add(1);
    }
}
