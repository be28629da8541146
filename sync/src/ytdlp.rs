/// Fetching channel metadata with the `yt-dlp` binary.
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::info;

use crate::plan::{parse_dump, VideoEntry};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to run yt-dlp: {0}")]
    Spawn(std::io::Error),

    #[error("failed to read channel dump: {0}")]
    Io(#[from] std::io::Error),

    #[error("yt-dlp exited with {0}")]
    Exit(std::process::ExitStatus),

    #[error("unreadable channel dump: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Run `yt-dlp -J <channel>` and parse the videos out of its output.
pub async fn fetch_channel(channel_url: &str) -> Result<Vec<VideoEntry>, FetchError> {
    info!("Fetching YouTube metadata for {}", channel_url);

    let output = Command::new("yt-dlp")
        .arg("-J")
        .arg(channel_url)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .await
        .map_err(FetchError::Spawn)?;

    if !output.status.success() {
        return Err(FetchError::Exit(output.status));
    }

    let json = String::from_utf8_lossy(&output.stdout);
    Ok(parse_dump(&json)?)
}

/// Read a previously saved `yt-dlp -J` dump.
pub async fn read_dump(path: &std::path::Path) -> Result<Vec<VideoEntry>, FetchError> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(parse_dump(&json)?)
}
