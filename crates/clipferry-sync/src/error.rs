//! Error types for the sync module.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while setting up a sync session.
///
/// Once the loop is running nothing is fatal; clipboard failures are
/// absorbed per tick and the only exit is cancellation.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The configured poll interval is below the permitted minimum.
    #[error("poll interval {actual:?} is below the minimum {minimum:?}")]
    IntervalTooShort { actual: Duration, minimum: Duration },
}

/// Result type for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
