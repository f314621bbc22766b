//! In-memory clipboard for tests.
//!
//! Implements both [`LocalClipboard`] and [`RemoteClipboard`] so one type
//! can stand in on either side of the engine. Tests script change sequences
//! by calling [`MemoryClipboard::set`] between ticks and can inject
//! transient failures.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{GatewayError, Result};
use crate::local::LocalClipboard;
use crate::remote::RemoteClipboard;

/// In-memory clipboard implementation.
///
/// Thread-safe via RwLock. Counts reads and writes so tests can assert on
/// exactly how many propagation calls were made.
#[derive(Default)]
pub struct MemoryClipboard {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    content: Vec<u8>,
    fail_reads: bool,
    fail_writes: bool,
    reads: u64,
    writes: u64,
}

impl MemoryClipboard {
    /// Create an empty in-memory clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard that already holds `content`.
    pub fn with_content(content: &[u8]) -> Self {
        let clipboard = Self::new();
        clipboard.set(content);
        clipboard
    }

    /// Script a content change, as if a user copied something.
    ///
    /// Does not count as a gateway write.
    pub fn set(&self, content: &[u8]) {
        self.inner.write().unwrap().content = content.to_vec();
    }

    /// The current content.
    pub fn get(&self) -> Vec<u8> {
        self.inner.read().unwrap().content.clone()
    }

    /// Make subsequent reads fail until called again with `false`.
    pub fn fail_reads(&self, fail: bool) {
        self.inner.write().unwrap().fail_reads = fail;
    }

    /// Make subsequent writes fail until called again with `false`.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.write().unwrap().fail_writes = fail;
    }

    /// Number of reads performed through the gateway traits.
    pub fn reads(&self) -> u64 {
        self.inner.read().unwrap().reads
    }

    /// Number of writes performed through the gateway traits.
    ///
    /// Failed writes are not counted; [`set`](Self::set) is not counted.
    pub fn writes(&self) -> u64 {
        self.inner.read().unwrap().writes
    }

    fn do_read(&self) -> Result<Vec<u8>> {
        let mut inner = self.inner.write().unwrap();
        if inner.fail_reads {
            return Err(GatewayError::Read("injected failure".to_string()));
        }
        inner.reads += 1;
        Ok(inner.content.clone())
    }

    fn do_write(&self, payload: &[u8]) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        if inner.fail_writes {
            return Err(GatewayError::Write("injected failure".to_string()));
        }
        inner.writes += 1;
        inner.content = payload.to_vec();
        Ok(())
    }
}

#[async_trait]
impl LocalClipboard for MemoryClipboard {
    async fn read(&self) -> Result<Vec<u8>> {
        self.do_read()
    }

    async fn write(&self, payload: &[u8]) -> Result<()> {
        self.do_write(payload)
    }
}

#[async_trait]
impl RemoteClipboard for MemoryClipboard {
    async fn read(&self) -> Result<Vec<u8>> {
        self.do_read()
    }

    async fn write(&self, payload: &[u8]) -> Result<()> {
        self.do_write(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_clipboard_read_write() {
        let clipboard = MemoryClipboard::with_content(b"hello");
        assert_eq!(LocalClipboard::read(&clipboard).await.unwrap(), b"hello");

        LocalClipboard::write(&clipboard, b"world").await.unwrap();
        assert_eq!(clipboard.get(), b"world");
        assert_eq!(clipboard.reads(), 1);
        assert_eq!(clipboard.writes(), 1);
    }

    #[tokio::test]
    async fn test_memory_clipboard_failure_injection() {
        let clipboard = MemoryClipboard::with_content(b"hello");

        clipboard.fail_reads(true);
        assert!(matches!(
            LocalClipboard::read(&clipboard).await,
            Err(GatewayError::Read(_))
        ));

        clipboard.fail_writes(true);
        assert!(matches!(
            LocalClipboard::write(&clipboard, b"x").await,
            Err(GatewayError::Write(_))
        ));
        // Content untouched and the failed write not counted.
        assert_eq!(clipboard.get(), b"hello");
        assert_eq!(clipboard.writes(), 0);

        clipboard.fail_reads(false);
        assert_eq!(LocalClipboard::read(&clipboard).await.unwrap(), b"hello");
    }
}
