//! `clipferry watch`: run one sync session against a peer until ctrl-c.

use std::time::Duration;

use anyhow::{Context, Result};
use clipferry_core::{format_bytes, PeerBook};
use clipferry_gateway::{SshRemote, SystemClipboard};
use clipferry_history::SqliteHistory;
use clipferry_sync::{SyncEngine, TickOutcome, WatchConfig};
use tokio::sync::watch;

use crate::config::CliConfig;

pub async fn run(config: &CliConfig, peer: Option<&str>, interval_ms: u64) -> Result<()> {
    let book_path = config.peer_book_path();
    let book = PeerBook::load(&book_path)
        .with_context(|| format!("cannot load peer book from {}", book_path.display()))?;
    let (peer_name, descriptor) = book.resolve(peer)?;

    let watch_config = WatchConfig::new(Duration::from_millis(interval_ms))?;
    let local = SystemClipboard::detect();
    let remote = SshRemote::new(descriptor.clone());
    let history = SqliteHistory::open(config.history_path())?;

    let mut engine = SyncEngine::new(local, remote, history, peer_name, watch_config);

    let (cancel_tx, cancel_rx) = watch::channel(());
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = cancel_tx.send(());
        }
    });

    println!(
        "watching clipboard for {} ({}); ctrl-c to stop",
        peer_name, descriptor.address
    );

    let peer_label = peer_name.to_string();
    engine
        .run(cancel_rx, move |outcome| report(&peer_label, outcome))
        .await;
    Ok(())
}

/// Print the operator-facing line for one tick, if any.
///
/// Read failures stay quiet: they are routine while a peer is offline and
/// would otherwise spam the output every tick.
fn report(peer: &str, outcome: &TickOutcome) {
    if let Some(line) = propagation_line(peer, outcome) {
        println!("{line}");
    }
    if let Some(line) = failure_line(peer, outcome) {
        eprintln!("{line}");
    }
}

fn propagation_line(peer: &str, outcome: &TickOutcome) -> Option<String> {
    match outcome {
        TickOutcome::Sent { bytes } => {
            Some(format!("→ sent {} to {}", format_bytes(*bytes), peer))
        }
        TickOutcome::Received { bytes } => {
            Some(format!("← received {} from {}", format_bytes(*bytes), peer))
        }
        _ => None,
    }
}

fn failure_line(peer: &str, outcome: &TickOutcome) -> Option<String> {
    match outcome {
        TickOutcome::SendFailed => Some(format!("failed to send clipboard to {peer}")),
        TickOutcome::ReceiveFailed => {
            Some(format!("failed to write clipboard received from {peer}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_line() {
        let line = propagation_line("desk", &TickOutcome::Sent { bytes: 5 });
        assert_eq!(line.as_deref(), Some("→ sent 5 B to desk"));
    }

    #[test]
    fn test_received_line() {
        let line = propagation_line("desk", &TickOutcome::Received { bytes: 3 });
        assert_eq!(line.as_deref(), Some("← received 3 B from desk"));
    }

    #[test]
    fn test_quiet_outcomes_print_nothing() {
        for outcome in [
            TickOutcome::Unchanged,
            TickOutcome::LocalReadFailed,
            TickOutcome::RemoteReadFailed,
        ] {
            assert!(propagation_line("desk", &outcome).is_none());
            assert!(failure_line("desk", &outcome).is_none());
        }
    }

    #[test]
    fn test_write_failures_are_reported() {
        assert!(failure_line("desk", &TickOutcome::SendFailed).is_some());
        assert!(failure_line("desk", &TickOutcome::ReceiveFailed).is_some());
    }
}
