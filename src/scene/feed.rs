//! Background replay of recorded live updates.
//!
//! Feeds raw JSON lines to the player on a dedicated thread, one line per
//! interval, so scenes become ready while playback is running.

use std::fs;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

/// Read a JSON-lines update file, skipping blank lines.
pub fn read_feed(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read updates: {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Feed loop: sends each line after waiting `interval`.
///
/// Exits early when the receiving side is dropped.
pub fn feed_loop(lines: Vec<String>, interval: Duration, tx: Sender<String>) {
    for line in lines {
        thread::sleep(interval);
        if tx.send(line).is_err() {
            tracing::debug!("feed receiver dropped");
            return;
        }
    }
}

/// Spawn the feed thread and return the receiving end.
///
/// The channel disconnects once every line has been sent.
pub fn spawn_feed(lines: Vec<String>, interval: Duration) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || feed_loop(lines, interval, tx));
    rx
}
