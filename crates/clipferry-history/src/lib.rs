//! # Clipferry History
//!
//! Append-only audit log of propagation events.
//!
//! The sync engine records one [`HistoryEntry`] after each successful
//! propagation. Recording is fire-and-forget from the engine's point of
//! view: a failure here is logged and never affects the sync loop.
//!
//! ## Implementations
//!
//! - [`SqliteHistory`] - the on-disk store used by the binary
//! - [`MemoryHistory`] - in-memory twin for tests

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{HistoryError, Result};
pub use memory::MemoryHistory;
pub use sqlite::SqliteHistory;
pub use traits::{EventKind, HistoryEntry, HistoryStore};
