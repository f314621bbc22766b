//! # Clipferry Gateway
//!
//! The two clipboard capabilities the sync engine depends on, as narrow
//! injectable traits:
//!
//! - [`LocalClipboard`] - read/write the clipboard of the host we run on
//! - [`RemoteClipboard`] - read/write the clipboard of one remote peer
//!
//! Both are black boxes that may fail transiently; every failure is
//! non-fatal to a sync session and the next polling tick is the retry unit.
//!
//! ## Implementations
//!
//! - [`SystemClipboard`] shells out to the platform paste/copy tool
//!   (`pbpaste`/`pbcopy`, `wl-paste`/`wl-copy`, or `xclip`).
//! - [`SshRemote`] invokes the peer's clipferry command over ssh with the
//!   `paste` and `copy` verbs. This is the entire wire contract with the
//!   peer.
//! - [`memory::MemoryClipboard`] is an in-memory fake for tests, usable on
//!   either side of the engine, with failure injection.

pub mod error;
pub mod local;
pub mod memory;
pub mod remote;

pub use error::{GatewayError, Result};
pub use local::{LocalClipboard, SystemClipboard};
pub use memory::MemoryClipboard;
pub use remote::{RemoteClipboard, SshRemote};
