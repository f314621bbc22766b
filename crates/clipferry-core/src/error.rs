//! Error types for the core crate.

use thiserror::Error;

/// Errors raised while resolving peer configuration.
///
/// All of these are fatal to session startup; they are surfaced before any
/// polling begins.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested peer name is not present in the peer book.
    #[error("unknown peer: {0}")]
    UnknownPeer(String),

    /// No peer name was given and the peer book has no default.
    #[error("no peer given and no default peer configured")]
    NoDefaultPeer,

    /// The peer book file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer book file could not be parsed.
    #[error("invalid peer configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
