//! The sync engine state machine.
//!
//! One engine per session. The loop is a single cooperative task: a
//! repeating timer drives ticks, a watch channel delivers cancellation, and
//! `tokio::select!` handles exactly one of the two per wakeup. Ticks never
//! overlap.

use std::time::Duration;

use clipferry_core::Fingerprint;
use clipferry_gateway::{LocalClipboard, RemoteClipboard};
use clipferry_history::{EventKind, HistoryEntry, HistoryStore};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::error::{Result, SyncError};
use crate::state::SyncState;

/// Smallest permitted poll interval.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Poll interval used when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Configuration for a watch session.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Time between polling ticks.
    pub poll_interval: Duration,
}

impl WatchConfig {
    /// Create a config, validating the interval against [`MIN_POLL_INTERVAL`].
    pub fn new(poll_interval: Duration) -> Result<Self> {
        if poll_interval < MIN_POLL_INTERVAL {
            return Err(SyncError::IntervalTooShort {
                actual: poll_interval,
                minimum: MIN_POLL_INTERVAL,
            });
        }
        Ok(Self { poll_interval })
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// What one tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Both sides matched the tracked state; nothing to do.
    Unchanged,
    /// Local change pushed to the peer.
    Sent {
        /// Payload size in bytes.
        bytes: u64,
    },
    /// Local change detected but the push failed; retried next tick.
    SendFailed,
    /// Remote change pulled to the local clipboard.
    Received {
        /// Payload size in bytes.
        bytes: u64,
    },
    /// Remote change detected but the pull failed.
    ReceiveFailed,
    /// Local read failed; tick skipped with no state change.
    LocalReadFailed,
    /// Remote read failed; tick skipped with no state change.
    RemoteReadFailed,
}

/// The watch-loop state machine for one session.
///
/// Polls both sides on a fixed interval, propagates at most one change per
/// tick, and tracks the fingerprints needed to suppress echoes. The two
/// clipboards and the history store are injected so tests can script change
/// sequences deterministically.
pub struct SyncEngine<L, R, H> {
    local: L,
    remote: R,
    history: H,
    peer_name: String,
    config: WatchConfig,
    state: SyncState,
}

impl<L, R, H> SyncEngine<L, R, H>
where
    L: LocalClipboard,
    R: RemoteClipboard,
    H: HistoryStore,
{
    /// Create an engine for one peer.
    pub fn new(
        local: L,
        remote: R,
        history: H,
        peer_name: impl Into<String>,
        config: WatchConfig,
    ) -> Self {
        Self {
            local,
            remote,
            history,
            peer_name: peer_name.into(),
            config,
            state: SyncState::new(),
        }
    }

    /// The tracked state, for inspection.
    pub fn state(&self) -> &SyncState {
        &self.state
    }

    /// The peer this engine synchronizes with.
    pub fn peer_name(&self) -> &str {
        &self.peer_name
    }

    /// Best-effort initial observation of both sides.
    ///
    /// A failed read leaves the corresponding fingerprint at zero, which can
    /// cause one spurious propagation on the first tick if the real content
    /// is non-empty — an accepted startup cost.
    pub async fn prime(&mut self) {
        let local = match self.local.read().await {
            Ok(bytes) => Fingerprint::of(&bytes),
            Err(e) => {
                tracing::debug!(error = %e, "initial local read failed");
                Fingerprint::ZERO
            }
        };
        let remote = match self.remote.read().await {
            Ok(bytes) => Fingerprint::of(&bytes),
            Err(e) => {
                tracing::debug!(error = %e, "initial remote read failed");
                Fingerprint::ZERO
            }
        };
        self.state.observe(local, remote);
    }

    /// Run the loop until the cancellation channel fires or closes.
    ///
    /// Calls `on_tick` with the outcome of every completed tick. An
    /// in-flight tick is never interrupted; cancellation only prevents the
    /// next one from starting.
    pub async fn run<F>(&mut self, mut cancel: watch::Receiver<()>, mut on_tick: F)
    where
        F: FnMut(&TickOutcome),
    {
        self.prime().await;

        let mut ticker = tokio::time::interval(self.config.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = cancel.changed() => return,
                _ = ticker.tick() => {
                    let outcome = self.tick().await;
                    on_tick(&outcome);
                }
            }
        }
    }

    /// Execute one tick of the polling loop.
    pub async fn tick(&mut self) -> TickOutcome {
        let local_bytes = match self.local.read().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(error = %e, "local read failed, skipping tick");
                return TickOutcome::LocalReadFailed;
            }
        };
        let local_fp = Fingerprint::of(&local_bytes);

        // Push path: a genuine local change ends the tick either way. On
        // failure the tracked state is untouched, so the same change is
        // detected and retried on the next tick.
        if self.state.local_changed(&local_fp) {
            let bytes = local_bytes.len() as u64;
            return match self.remote.write(&local_bytes).await {
                Ok(()) => {
                    self.state.pin(local_fp);
                    self.record(EventKind::Sent, bytes).await;
                    TickOutcome::Sent { bytes }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "push to peer failed");
                    TickOutcome::SendFailed
                }
            };
        }

        let remote_bytes = match self.remote.read().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(error = %e, "remote read failed, skipping tick");
                return TickOutcome::RemoteReadFailed;
            }
        };
        let remote_fp = Fingerprint::of(&remote_bytes);

        let mut outcome = TickOutcome::Unchanged;
        if self.state.remote_changed(&remote_fp) {
            let bytes = remote_bytes.len() as u64;
            match self.local.write(&remote_bytes).await {
                Ok(()) => {
                    self.state.pin(remote_fp);
                    self.record(EventKind::Received, bytes).await;
                    outcome = TickOutcome::Received { bytes };
                }
                Err(e) => {
                    tracing::debug!(error = %e, "pull to local failed");
                    outcome = TickOutcome::ReceiveFailed;
                }
            }
        }

        // Reset the tracked state to what was actually observed this tick.
        // After a successful pull this re-pins last_local to the pre-write
        // local fingerprint; the next tick reads the freshly written
        // content, finds it equal to last_remote, and stays quiet. Keep this
        // ordering — the echo suppression argument depends on it.
        self.state.observe(local_fp, remote_fp);
        outcome
    }

    /// Record a propagation event, fire-and-forget.
    async fn record(&self, kind: EventKind, bytes: u64) {
        let entry = HistoryEntry::new(kind, self.peer_name.clone(), bytes);
        if let Err(e) = self.history.record(&entry).await {
            tracing::warn!(error = %e, "failed to record history entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_config_default() {
        assert_eq!(WatchConfig::default().poll_interval, DEFAULT_POLL_INTERVAL);
    }

    #[test]
    fn test_watch_config_rejects_short_interval() {
        let err = WatchConfig::new(Duration::from_millis(50)).unwrap_err();
        assert!(matches!(err, SyncError::IntervalTooShort { .. }));
    }

    #[test]
    fn test_watch_config_accepts_minimum() {
        let config = WatchConfig::new(MIN_POLL_INTERVAL).unwrap();
        assert_eq!(config.poll_interval, MIN_POLL_INTERVAL);
    }
}
