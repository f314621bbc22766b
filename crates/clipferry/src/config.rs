//! CLI configuration: where the peer book and history live on disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Resolved filesystem layout for this invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory holding the peer book and the history database.
    pub data_dir: PathBuf,
    /// Explicit peer book path, when given on the command line.
    config_override: Option<PathBuf>,
}

impl CliConfig {
    /// Resolve the data directory (creating it if needed) and remember any
    /// peer book override.
    pub fn new(data_dir: Option<PathBuf>, config: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => dirs::home_dir()
                .context("cannot determine home directory")?
                .join(".clipferry"),
        };
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("cannot create data directory {}", data_dir.display()))?;

        Ok(Self {
            data_dir,
            config_override: config,
        })
    }

    /// Path of the peer book file.
    pub fn peer_book_path(&self) -> PathBuf {
        self.config_override
            .clone()
            .unwrap_or_else(|| self.data_dir.join("peers.json"))
    }

    /// Path of the history database.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join("history.db")
    }
}

// Binary crate without lib.rs - tests live inline.
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_data_dir() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("nested").join(".clipferry");
        let config = CliConfig::new(Some(dir.clone()), None).unwrap();

        assert!(dir.is_dir());
        assert_eq!(config.peer_book_path(), dir.join("peers.json"));
        assert_eq!(config.history_path(), dir.join("history.db"));
    }

    #[test]
    fn test_config_override_wins() {
        let temp = tempdir().unwrap();
        let dir = temp.path().to_path_buf();
        let book = temp.path().join("elsewhere.json");
        let config = CliConfig::new(Some(dir), Some(book.clone())).unwrap();

        assert_eq!(config.peer_book_path(), book);
    }
}
