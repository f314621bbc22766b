//! Error types for the gateway crate.

use thiserror::Error;

/// Errors from a clipboard gateway operation.
///
/// Both variants are transient from the sync engine's point of view: a read
/// failure is absorbed silently, a write failure is reported to the
/// operator, and in either case the session continues to the next tick.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A read of local or remote clipboard content failed this tick.
    #[error("clipboard read failed: {0}")]
    Read(String),

    /// A write of local or remote clipboard content failed this tick.
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
