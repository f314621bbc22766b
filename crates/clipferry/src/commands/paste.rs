//! `clipferry paste`: the local clipboard to stdout.

use anyhow::Result;
use clipferry_gateway::{LocalClipboard, SystemClipboard};
use tokio::io::AsyncWriteExt;

pub async fn run() -> Result<()> {
    let payload = SystemClipboard::detect().read().await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&payload).await?;
    stdout.flush().await?;
    Ok(())
}
