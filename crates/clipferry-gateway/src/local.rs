//! Local clipboard access.
//!
//! The [`LocalClipboard`] trait abstracts "read the local clipboard" and
//! "write the local clipboard" so the sync engine can be driven by an
//! in-memory fake in tests. The production implementation shells out to the
//! platform clipboard tool.

use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{GatewayError, Result};

/// Read/write access to the clipboard of the host we run on.
///
/// Implementations must be thread-safe (Send + Sync). Every failure is
/// transient: no clipboard content, tool not installed, clipboard
/// temporarily unavailable.
#[async_trait]
pub trait LocalClipboard: Send + Sync {
    /// Read the current clipboard content.
    async fn read(&self) -> Result<Vec<u8>>;

    /// Replace the clipboard content.
    async fn write(&self, payload: &[u8]) -> Result<()>;
}

#[async_trait]
impl<T: LocalClipboard + ?Sized> LocalClipboard for Arc<T> {
    async fn read(&self) -> Result<Vec<u8>> {
        (**self).read().await
    }

    async fn write(&self, payload: &[u8]) -> Result<()> {
        (**self).write(payload).await
    }
}

/// System clipboard implementation backed by the platform paste/copy tool.
///
/// macOS uses `pbpaste`/`pbcopy`. On other Unixes, `wl-paste`/`wl-copy` when
/// a Wayland session is detected, `xclip` otherwise.
pub struct SystemClipboard {
    paste: (&'static str, &'static [&'static str]),
    copy: (&'static str, &'static [&'static str]),
}

impl SystemClipboard {
    /// Pick the clipboard tool for the current platform.
    #[cfg(target_os = "macos")]
    pub fn detect() -> Self {
        Self {
            paste: ("pbpaste", &[]),
            copy: ("pbcopy", &[]),
        }
    }

    /// Pick the clipboard tool for the current platform.
    #[cfg(not(target_os = "macos"))]
    pub fn detect() -> Self {
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self {
                paste: ("wl-paste", &["--no-newline"]),
                copy: ("wl-copy", &[]),
            }
        } else {
            Self {
                paste: ("xclip", &["-selection", "clipboard", "-o"]),
                copy: ("xclip", &["-selection", "clipboard"]),
            }
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::detect()
    }
}

#[async_trait]
impl LocalClipboard for SystemClipboard {
    async fn read(&self) -> Result<Vec<u8>> {
        let (program, args) = self.paste;
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| GatewayError::Read(format!("{program}: {e}")))?;

        if !output.status.success() {
            return Err(GatewayError::Read(format!(
                "{program} exited with {}",
                output.status
            )));
        }
        Ok(output.stdout)
    }

    async fn write(&self, payload: &[u8]) -> Result<()> {
        let (program, args) = self.copy;
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| GatewayError::Write(format!("{program}: {e}")))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| GatewayError::Write(format!("{program}: stdin unavailable")))?;
        stdin
            .write_all(payload)
            .await
            .map_err(|e| GatewayError::Write(format!("{program}: {e}")))?;
        drop(stdin);

        let status = child
            .wait()
            .await
            .map_err(|e| GatewayError::Write(format!("{program}: {e}")))?;
        if !status.success() {
            return Err(GatewayError::Write(format!(
                "{program} exited with {status}"
            )));
        }
        Ok(())
    }
}
