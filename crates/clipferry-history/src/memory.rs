//! In-memory implementation of the HistoryStore trait.
//!
//! Primarily for testing. Same semantics as the SQLite store but with no
//! persistence.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{HistoryError, Result};
use crate::traits::{HistoryEntry, HistoryStore};

/// In-memory history store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
#[derive(Default)]
pub struct MemoryHistory {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    entries: Vec<HistoryEntry>,
    fail_records: bool,
}

impl MemoryHistory {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent records fail until called again with `false`.
    ///
    /// Used to verify that the engine treats recording as fire-and-forget.
    pub fn fail_records(&self, fail: bool) {
        self.inner.write().unwrap().fail_records = fail;
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.inner.read().unwrap().entries.clone()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn record(&self, entry: &HistoryEntry) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        if inner.fail_records {
            return Err(HistoryError::InvalidData("injected failure".to_string()));
        }
        inner.entries.push(entry.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.entries.iter().rev().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::EventKind;

    #[tokio::test]
    async fn test_memory_history_matches_sqlite_semantics() {
        let store = MemoryHistory::new();
        store
            .record(&HistoryEntry::new(EventKind::Sent, "desk", 5))
            .await
            .unwrap();
        store
            .record(&HistoryEntry::new(EventKind::Received, "desk", 3))
            .await
            .unwrap();

        let entries = store.recent(1).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EventKind::Received);
    }

    #[tokio::test]
    async fn test_injected_record_failure() {
        let store = MemoryHistory::new();
        store.fail_records(true);
        let result = store
            .record(&HistoryEntry::new(EventKind::Sent, "desk", 1))
            .await;
        assert!(result.is_err());
        assert!(store.entries().is_empty());
    }
}
