//! HistoryStore trait: the abstract interface for the propagation audit log.
//!
//! This keeps the sync engine storage-agnostic. Implementations include
//! SQLite (primary) and in-memory (for tests).

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use crate::error::Result;

/// The direction of a recorded propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Local content was pushed to the peer.
    Sent,
    /// Peer content was pulled to the local clipboard.
    Received,
}

impl EventKind {
    /// Stable storage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Sent => "sent",
            EventKind::Received => "received",
        }
    }

    /// Parse the stable storage name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sent" => Some(EventKind::Sent),
            "received" => Some(EventKind::Received),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded propagation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Direction of the propagation.
    pub kind: EventKind,
    /// Name of the peer involved.
    pub peer: String,
    /// Payload size in bytes.
    pub bytes: u64,
    /// When the event was recorded (Unix ms).
    pub recorded_at: i64,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(kind: EventKind, peer: impl Into<String>, bytes: u64) -> Self {
        Self {
            kind,
            peer: peer.into(),
            bytes,
            recorded_at: now_millis(),
        }
    }
}

/// Get current time in milliseconds.
pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Async interface for the propagation audit log.
///
/// Append-only: entries are never edited or deleted through this interface.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append one event.
    async fn record(&self, entry: &HistoryEntry) -> Result<()>;

    /// Return up to `limit` events, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>>;
}

#[async_trait]
impl<T: HistoryStore + ?Sized> HistoryStore for Arc<T> {
    async fn record(&self, entry: &HistoryEntry) -> Result<()> {
        (**self).record(entry).await
    }

    async fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        (**self).recent(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_name_roundtrip() {
        for kind in [EventKind::Sent, EventKind::Received] {
            assert_eq!(EventKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(EventKind::parse("dropped"), None);
    }

    #[test]
    fn test_entry_is_stamped() {
        let entry = HistoryEntry::new(EventKind::Sent, "desk", 5);
        assert!(entry.recorded_at > 0);
        assert_eq!(entry.peer, "desk");
    }
}
