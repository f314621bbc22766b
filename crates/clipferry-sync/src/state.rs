//! Tracked synchronization state.
//!
//! One [`SyncState`] per session, owned exclusively by the engine, never
//! persisted. It holds the fingerprints of local and remote content as last
//! observed or propagated.
//!
//! Change detection compares a freshly observed fingerprint against *both*
//! tracked fingerprints. Comparing only against the same side's fingerprint
//! would re-trigger a send on every tick after a receive: the receive itself
//! changes local content. The second comparison recognizes "this new local
//! content is exactly what we just received from the peer" and suppresses
//! the echo.

use clipferry_core::Fingerprint;

/// The fingerprints of local and remote content as last observed.
///
/// Initialized from a best-effort read of both sides at session start; a
/// failed initial read leaves the corresponding field at
/// [`Fingerprint::ZERO`], which is indistinguishable from empty content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncState {
    last_local: Fingerprint,
    last_remote: Fingerprint,
}

impl SyncState {
    /// State for a session that has observed nothing yet.
    pub fn new() -> Self {
        Self {
            last_local: Fingerprint::ZERO,
            last_remote: Fingerprint::ZERO,
        }
    }

    /// The local-side fingerprint as last observed/propagated.
    pub fn last_local(&self) -> Fingerprint {
        self.last_local
    }

    /// The remote-side fingerprint as last observed/propagated.
    pub fn last_remote(&self) -> Fingerprint {
        self.last_remote
    }

    /// Did local content change, excluding the echo of a received value?
    pub fn local_changed(&self, observed: &Fingerprint) -> bool {
        *observed != self.last_local && *observed != self.last_remote
    }

    /// Did remote content change, excluding the echo of a sent value?
    pub fn remote_changed(&self, observed: &Fingerprint) -> bool {
        *observed != self.last_remote && *observed != self.last_local
    }

    /// Pin both fingerprints to a just-synchronized value.
    ///
    /// Called after a successful propagation in either direction. Pinning
    /// the opposite side too is what suppresses the false "changed"
    /// detection on the very next tick, since that side's content is now
    /// expected to match.
    pub fn pin(&mut self, synchronized: Fingerprint) {
        self.last_local = synchronized;
        self.last_remote = synchronized;
    }

    /// Reset both fingerprints to what was actually observed this tick.
    pub fn observe(&mut self, local: Fingerprint, remote: Fingerprint) {
        self.last_local = local;
        self.last_remote = remote;
    }
}

impl Default for SyncState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(data: &[u8]) -> Fingerprint {
        Fingerprint::of(data)
    }

    #[test]
    fn test_local_change_detected() {
        let mut state = SyncState::new();
        state.observe(fp(b"hello"), fp(b"hello"));

        assert!(state.local_changed(&fp(b"world")));
        assert!(!state.local_changed(&fp(b"hello")));
    }

    #[test]
    fn test_received_value_is_not_a_local_change() {
        let mut state = SyncState::new();
        state.observe(fp(b"old"), fp(b"xyz"));

        // Local now holds the value we just pulled from the peer.
        assert!(!state.local_changed(&fp(b"xyz")));
    }

    #[test]
    fn test_sent_value_is_not_a_remote_change() {
        let mut state = SyncState::new();
        state.pin(fp(b"world"));

        // The peer now reads back what we sent it.
        assert!(!state.remote_changed(&fp(b"world")));
    }

    #[test]
    fn test_pin_sets_both_sides() {
        let mut state = SyncState::new();
        state.pin(fp(b"world"));
        assert_eq!(state.last_local(), fp(b"world"));
        assert_eq!(state.last_remote(), fp(b"world"));
    }

    #[test]
    fn test_observe_overwrites_a_pin() {
        let mut state = SyncState::new();
        state.pin(fp(b"xyz"));
        state.observe(fp(b"old-local"), fp(b"xyz"));

        assert_eq!(state.last_local(), fp(b"old-local"));
        // The echo check still holds through last_remote.
        assert!(!state.local_changed(&fp(b"xyz")));
    }

    #[test]
    fn test_fresh_state_treats_any_content_as_changed() {
        let state = SyncState::new();
        assert!(state.local_changed(&fp(b"hello")));
        assert!(state.remote_changed(&fp(b"hello")));
    }
}
