//! `clipferry history`: list recent propagation events.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clipferry_core::format_bytes;
use clipferry_history::{EventKind, HistoryStore, SqliteHistory};

use crate::config::CliConfig;

pub async fn run(config: &CliConfig, limit: usize) -> Result<()> {
    let store = SqliteHistory::open(config.history_path())?;
    let entries = store.recent(limit).await?;

    if entries.is_empty() {
        println!("no history yet");
        return Ok(());
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);

    for entry in entries {
        let direction = match entry.kind {
            EventKind::Sent => "→ sent",
            EventKind::Received => "← received",
        };
        println!(
            "{:>8}  {} {} {} {}",
            format_age(now, entry.recorded_at),
            direction,
            format_bytes(entry.bytes),
            match entry.kind {
                EventKind::Sent => "to",
                EventKind::Received => "from",
            },
            entry.peer
        );
    }
    Ok(())
}

/// Format how long ago an event happened.
fn format_age(now_ms: i64, recorded_at_ms: i64) -> String {
    let secs = (now_ms - recorded_at_ms).max(0) / 1000;
    if secs < 60 {
        return format!("{secs}s ago");
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age_units() {
        assert_eq!(format_age(10_000, 5_000), "5s ago");
        assert_eq!(format_age(120_000, 0), "2m ago");
        assert_eq!(format_age(3 * 3_600_000, 0), "3h ago");
        assert_eq!(format_age(48 * 3_600_000, 0), "2d ago");
    }

    #[test]
    fn test_format_age_clamps_future_timestamps() {
        assert_eq!(format_age(0, 5_000), "0s ago");
    }
}
