//! Play command handler

use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use sceneplay::player::{play_project, PlaybackResult};
use sceneplay::scene::{read_feed, spawn_feed, ProjectSnapshot};
use sceneplay::Config;

/// Open the terminal player for a snapshot.
#[cfg(not(tarpaulin_include))]
pub fn handle_play(
    snapshot_path: &Path,
    updates_path: Option<&Path>,
    interval_ms: Option<u64>,
    config: &Config,
) -> Result<()> {
    let snapshot = ProjectSnapshot::load(snapshot_path)?;
    let updates = match updates_path {
        Some(path) => {
            let lines = read_feed(path)?;
            let interval =
                Duration::from_millis(interval_ms.unwrap_or(config.live.update_interval_ms));
            tracing::info!(count = lines.len(), ?interval, "replaying live updates");
            Some(spawn_feed(lines, interval))
        }
        None => None,
    };

    match play_project(snapshot, updates, config)? {
        PlaybackResult::Finished => println!("Playback finished"),
        PlaybackResult::Interrupted => println!("Playback stopped"),
    }
    Ok(())
}
