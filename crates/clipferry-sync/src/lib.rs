//! # Clipferry Sync
//!
//! The watch loop: polls the local and remote clipboards on a fixed
//! interval, decides which side (if any) changed, propagates the change
//! exactly once, and suppresses the echo that the propagation itself would
//! otherwise trigger on the following tick.
//!
//! ## Key Properties
//!
//! - **Echo-free**: a value pushed to the peer is not pulled back, and vice
//!   versa, because change detection compares against both tracked
//!   fingerprints.
//! - **Transient-failure tolerant**: every read or write failure skips or
//!   degrades one tick; nothing is fatal once the loop runs.
//! - **Cooperatively cancellable**: a cancellation channel stops the loop
//!   between ticks; an in-flight tick always completes.
//!
//! ## Tick Flow
//!
//! ```text
//! timer fire
//!   |-- read local ---- fingerprint --- changed? --yes-- push to peer --- end tick
//!   |                                      | no
//!   |-- read remote --- fingerprint --- changed? --yes-- pull to local
//!   |                                      | no              |
//!   '-- record observed fingerprints <-----'----------------'
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clipferry_gateway::{MemoryClipboard, SshRemote};
//! use clipferry_history::MemoryHistory;
//! use clipferry_sync::{SyncEngine, WatchConfig};
//!
//! async fn example() {
//!     // let local: SystemClipboard = ...;
//!     // let remote: SshRemote = ...;
//!     // let history: SqliteHistory = ...;
//!     // let mut engine = SyncEngine::new(local, remote, history, "desk", WatchConfig::default());
//!     // let (cancel_tx, cancel_rx) = tokio::sync::watch::channel(());
//!     // engine.run(cancel_rx, |outcome| println!("{outcome:?}")).await;
//! }
//! ```

pub mod engine;
pub mod error;
pub mod state;

pub use engine::{SyncEngine, TickOutcome, WatchConfig, DEFAULT_POLL_INTERVAL, MIN_POLL_INTERVAL};
pub use error::{Result, SyncError};
pub use state::SyncState;
