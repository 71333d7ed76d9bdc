//! Short code resolution service.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::codec;
use crate::domain::repositories::RecordStore;
use crate::error::AppError;

/// How a failed click increment affects a resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClickTracking {
    /// Log the failure and still return the destination.
    #[default]
    BestEffort,
    /// Fail the resolution when the click cannot be recorded.
    Strict,
}

impl FromStr for ClickTracking {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best_effort" | "best-effort" => Ok(Self::BestEffort),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "expected 'best_effort' or 'strict', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for ClickTracking {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BestEffort => write!(f, "best_effort"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Service turning short codes back into their destination, counting a click
/// on every successful lookup.
///
/// Concurrent resolutions of one code are counted exactly as far as the
/// store's `increment_clicks` is atomic.
pub struct ResolveService {
    store: Arc<dyn RecordStore>,
    click_tracking: ClickTracking,
}

impl ResolveService {
    /// Creates a new resolution service.
    pub fn new(store: Arc<dyn RecordStore>, click_tracking: ClickTracking) -> Self {
        Self {
            store,
            click_tracking,
        }
    }

    /// Looks up `code` and records a click.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(original_url))` if the code exists
    /// - `Ok(None)` if it does not; codes that [`codec::encode`] could never
    ///   produce (empty, foreign characters, leading zero) are answered
    ///   without touching the store
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the lookup fails, or if the
    /// click increment fails under [`ClickTracking::Strict`].
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        if !codec::is_canonical(code) {
            debug!("Rejected non-canonical code {:?}", code);
            return Ok(None);
        }

        let Some(record) = self.store.get(code).await? else {
            debug!("Code {} not found", code);
            return Ok(None);
        };

        match self.store.increment_clicks(code).await {
            Ok(true) => {}
            Ok(false) => warn!("Record {} disappeared before its click was counted", code),
            Err(e) => match self.click_tracking {
                ClickTracking::BestEffort => {
                    warn!("Failed to count click for {}: {}", code, e);
                }
                ClickTracking::Strict => return Err(e.into()),
            },
        }

        Ok(Some(record.original_url))
    }
}
