//! SQLite implementation of the HistoryStore trait.
//!
//! This is the primary backend, used by the binary. rusqlite with bundled
//! SQLite behind a mutex-guarded connection.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection};

use crate::error::{HistoryError, Result};
use crate::migration;
use crate::traits::{EventKind, HistoryEntry, HistoryStore};

/// SQLite-based history store.
///
/// Thread-safe via internal Mutex.
pub struct SqliteHistory {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteHistory {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute a blocking operation on the connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock().map_err(|e| {
            HistoryError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
                Some(format!("mutex poisoned: {}", e)),
            ))
        })?;
        f(&conn)
    }
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<HistoryEntry> {
    let kind_text: String = row.get("kind")?;
    let kind = EventKind::parse(&kind_text).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(0, "kind".into(), rusqlite::types::Type::Text)
    })?;

    Ok(HistoryEntry {
        kind,
        peer: row.get("peer")?,
        bytes: row.get::<_, i64>("bytes")? as u64,
        recorded_at: row.get("recorded_at")?,
    })
}

#[async_trait]
impl HistoryStore for SqliteHistory {
    async fn record(&self, entry: &HistoryEntry) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO events (kind, peer, bytes, recorded_at) VALUES (?1, ?2, ?3, ?4)",
                params![
                    entry.kind.as_str(),
                    entry.peer,
                    entry.bytes as i64,
                    entry.recorded_at
                ],
            )?;
            Ok(())
        })
    }

    async fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT kind, peer, bytes, recorded_at FROM events
                 ORDER BY id DESC LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit as i64], row_to_entry)?;

            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_and_recent_newest_first() {
        let store = SqliteHistory::open_memory().unwrap();

        store
            .record(&HistoryEntry::new(EventKind::Sent, "desk", 5))
            .await
            .unwrap();
        store
            .record(&HistoryEntry::new(EventKind::Received, "desk", 3))
            .await
            .unwrap();

        let entries = store.recent(10).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EventKind::Received);
        assert_eq!(entries[0].bytes, 3);
        assert_eq!(entries[1].kind, EventKind::Sent);
        assert_eq!(entries[1].bytes, 5);
    }

    #[tokio::test]
    async fn test_recent_respects_limit() {
        let store = SqliteHistory::open_memory().unwrap();
        for i in 0..5 {
            store
                .record(&HistoryEntry::new(EventKind::Sent, "desk", i))
                .await
                .unwrap();
        }

        let entries = store.recent(2).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].bytes, 4);
    }

    #[tokio::test]
    async fn test_open_on_disk_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");

        {
            let store = SqliteHistory::open(&path).unwrap();
            store
                .record(&HistoryEntry::new(EventKind::Sent, "desk", 7))
                .await
                .unwrap();
        }

        let store = SqliteHistory::open(&path).unwrap();
        let entries = store.recent(10).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].peer, "desk");
    }
}
