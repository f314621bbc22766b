//! `clipferry copy`: stdin to the local clipboard.

use anyhow::Result;
use clipferry_gateway::{LocalClipboard, SystemClipboard};
use tokio::io::AsyncReadExt;

pub async fn run() -> Result<()> {
    let mut payload = Vec::new();
    tokio::io::stdin().read_to_end(&mut payload).await?;

    SystemClipboard::detect().write(&payload).await?;
    Ok(())
}
