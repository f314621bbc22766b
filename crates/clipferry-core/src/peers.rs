//! Peer configuration.
//!
//! A peer book maps names to [`PeerDescriptor`]s and optionally marks one of
//! them as the default. It is loaded once at session startup; descriptors
//! are immutable for the lifetime of a session.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Identifies one remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerDescriptor {
    /// Transport address, as understood by ssh (e.g. `user@host`).
    pub address: String,

    /// Name or path of the clipferry command on the remote side.
    #[serde(default = "default_remote_command")]
    pub remote_command: String,
}

fn default_remote_command() -> String {
    "clipferry".to_string()
}

/// Named peers plus an optional default.
///
/// Stored as JSON:
///
/// ```json
/// {
///   "default_peer": "desk",
///   "peers": {
///     "desk": { "address": "user@desk.example", "remote_command": "clipferry" }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeerBook {
    /// Name of the peer used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_peer: Option<String>,

    /// All configured peers, by name.
    #[serde(default)]
    pub peers: BTreeMap<String, PeerDescriptor>,
}

impl PeerBook {
    /// Load a peer book from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Resolve a peer by name, falling back to the default peer.
    ///
    /// Returns the peer's name alongside its descriptor so callers can
    /// report which peer they ended up talking to.
    pub fn resolve<'a>(&'a self, name: Option<&'a str>) -> Result<(&'a str, &'a PeerDescriptor)> {
        let name = match name {
            Some(n) => n,
            None => self
                .default_peer
                .as_deref()
                .ok_or(CoreError::NoDefaultPeer)?,
        };

        let descriptor = self
            .peers
            .get(name)
            .ok_or_else(|| CoreError::UnknownPeer(name.to_string()))?;

        Ok((name, descriptor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> PeerBook {
        let mut peers = BTreeMap::new();
        peers.insert(
            "desk".to_string(),
            PeerDescriptor {
                address: "user@desk.example".to_string(),
                remote_command: "clipferry".to_string(),
            },
        );
        PeerBook {
            default_peer: Some("desk".to_string()),
            peers,
        }
    }

    #[test]
    fn test_resolve_by_name() {
        let book = sample_book();
        let (name, peer) = book.resolve(Some("desk")).unwrap();
        assert_eq!(name, "desk");
        assert_eq!(peer.address, "user@desk.example");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let book = sample_book();
        let (name, _) = book.resolve(None).unwrap();
        assert_eq!(name, "desk");
    }

    #[test]
    fn test_resolve_unknown_peer() {
        let book = sample_book();
        let err = book.resolve(Some("laptop")).unwrap_err();
        assert!(matches!(err, CoreError::UnknownPeer(n) if n == "laptop"));
    }

    #[test]
    fn test_resolve_without_default() {
        let book = PeerBook::default();
        let err = book.resolve(None).unwrap_err();
        assert!(matches!(err, CoreError::NoDefaultPeer));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("peers.json");
        std::fs::write(
            &path,
            r#"{"default_peer":"desk","peers":{"desk":{"address":"user@desk.example"}}}"#,
        )
        .unwrap();

        let book = PeerBook::load(&path).unwrap();
        let (_, peer) = book.resolve(None).unwrap();
        // remote_command falls back to the binary's own name.
        assert_eq!(peer.remote_command, "clipferry");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("peers.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(PeerBook::load(&path), Err(CoreError::Parse(_))));
    }
}
