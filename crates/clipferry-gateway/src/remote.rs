//! Remote clipboard gateway.
//!
//! One request is one transport session that invokes the peer's clipferry
//! command with a single verb: `paste` (response is raw bytes on stdout) or
//! `copy` (request body delivered on stdin). Success and failure are
//! signaled by the process exit status; there is no framing, no headers, no
//! versioning beyond the two verbs.
//!
//! Errors from the remote process, the transport, and timeouts all surface
//! uniformly as a transient failure with no further detail. They are
//! expected while polling a possibly-offline peer, so the detail is kept
//! out of the error and logged at debug instead.

use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use clipferry_core::PeerDescriptor;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{GatewayError, Result};

/// The transport program used to reach a peer.
const SSH_PROGRAM: &str = "ssh";

/// Read/write access to the clipboard of one remote peer.
///
/// No retry, backoff, or timeout is implemented at this layer; one polling
/// tick is the retry unit.
#[async_trait]
pub trait RemoteClipboard: Send + Sync {
    /// Read the peer's current clipboard content.
    async fn read(&self) -> Result<Vec<u8>>;

    /// Replace the peer's clipboard content.
    async fn write(&self, payload: &[u8]) -> Result<()>;
}

#[async_trait]
impl<T: RemoteClipboard + ?Sized> RemoteClipboard for Arc<T> {
    async fn read(&self) -> Result<Vec<u8>> {
        (**self).read().await
    }

    async fn write(&self, payload: &[u8]) -> Result<()> {
        (**self).write(payload).await
    }
}

/// Remote clipboard reached by running the peer's command over ssh.
pub struct SshRemote {
    peer: PeerDescriptor,
}

impl SshRemote {
    /// Create a gateway for one peer.
    pub fn new(peer: PeerDescriptor) -> Self {
        Self { peer }
    }

    /// The peer this gateway talks to.
    pub fn peer(&self) -> &PeerDescriptor {
        &self.peer
    }

    fn command(&self, verb: &str) -> Command {
        let mut cmd = Command::new(SSH_PROGRAM);
        cmd.arg(&self.peer.address)
            .arg(&self.peer.remote_command)
            .arg(verb);
        cmd
    }
}

#[async_trait]
impl RemoteClipboard for SshRemote {
    async fn read(&self) -> Result<Vec<u8>> {
        let output = self
            .command("paste")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                tracing::debug!(peer = %self.peer.address, error = %e, "remote paste failed");
                GatewayError::Read("peer unavailable".to_string())
            })?;

        if !output.status.success() {
            tracing::debug!(
                peer = %self.peer.address,
                status = %output.status,
                "remote paste failed"
            );
            return Err(GatewayError::Read("peer unavailable".to_string()));
        }
        Ok(output.stdout)
    }

    async fn write(&self, payload: &[u8]) -> Result<()> {
        let unavailable = |e: std::io::Error| {
            tracing::debug!(peer = %self.peer.address, error = %e, "remote copy failed");
            GatewayError::Write("peer unavailable".to_string())
        };

        let mut child = self
            .command("copy")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(unavailable)?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| GatewayError::Write("peer unavailable".to_string()))?;
        stdin.write_all(payload).await.map_err(unavailable)?;
        drop(stdin);

        let status = child.wait().await.map_err(unavailable)?;
        if !status.success() {
            tracing::debug!(
                peer = %self.peer.address,
                status = %status,
                "remote copy failed"
            );
            return Err(GatewayError::Write("peer unavailable".to_string()));
        }
        Ok(())
    }
}
