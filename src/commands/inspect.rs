//! Inspect command handler
//!
//! Prints the virtual timeline a snapshot (plus optional live updates)
//! produces, without opening the player.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;

use sceneplay::player::render::{format_time, truncate};
use sceneplay::scene::{
    apply_raw, read_feed, sorted_by_index, MemorySceneStore, ProjectSnapshot, Scene, SceneStore,
};
use sceneplay::timeline::{DurationTable, Timeline};
use sceneplay::Config;

/// Durations known from the snapshot's media table, by scene id.
fn measured_durations(
    snapshot: &ProjectSnapshot,
    scenes: &[Scene],
    config: &Config,
) -> DurationTable {
    let mut durations = DurationTable::new(config.player.fallback_duration);
    for scene in scenes {
        let Some(source) = &scene.video_url else {
            continue;
        };
        let seconds = snapshot
            .media
            .get(source)
            .or_else(|| snapshot.media.get(&config.media.resolve(source)));
        if let Some(&seconds) = seconds {
            durations.report(&scene.id, seconds);
        }
    }
    durations
}

/// Build the inspect report.
///
/// Returns the report text and the number of discarded update lines.
pub fn build_report(
    snapshot: &ProjectSnapshot,
    updates: &[String],
    at: Option<f64>,
    config: &Config,
) -> (String, usize) {
    let mut store = MemorySceneStore::with_scenes(snapshot.scenes.clone());
    let discarded = updates
        .iter()
        .filter(|line| !apply_raw(&mut store, line))
        .count();

    let scenes = sorted_by_index(&store.snapshot());
    let durations = measured_durations(snapshot, &scenes, config);
    let timeline = Timeline::build(&scenes, &durations);

    let mut out = String::new();
    let _ = writeln!(out, "Project: {}", snapshot.title());
    let _ = writeln!(
        out,
        "{:>3}  {:<24} {:<10} {:>6} {:>6}  {}",
        "#", "Title", "Status", "Start", "Length", "Basis"
    );

    for scene in &scenes {
        let title = if scene.title.is_empty() {
            "-"
        } else {
            scene.title.as_str()
        };
        let (start, length, kind) = match timeline.segment_for(&scene.id) {
            Some(segment) => {
                let kind = if durations.is_authoritative(&scene.id) {
                    "measured"
                } else if scene.duration.is_some_and(|d| d > 0.0) {
                    "declared"
                } else {
                    "fallback"
                };
                (
                    format_time(segment.start),
                    format_time(segment.duration),
                    kind,
                )
            }
            None => ("-".to_string(), "-".to_string(), ""),
        };
        let _ = writeln!(
            out,
            "{:>3}  {:<24} {:<10} {:>6} {:>6}  {}",
            scene.index + 1,
            truncate(title, 24),
            scene.status.label(),
            start,
            length,
            kind
        );
    }

    let _ = writeln!(
        out,
        "Total: {} ({} of {} scenes ready)",
        format_time(timeline.total_duration()),
        timeline.segments().len(),
        scenes.len()
    );

    if let Some(at) = at {
        let resolution = timeline.resolve(at);
        match resolution.segment {
            Some(segment) => {
                let _ = writeln!(
                    out,
                    "At {:.1}s: scene {} (+{:.1}s)",
                    at,
                    segment.index + 1,
                    resolution.local_time
                );
            }
            None if timeline.is_empty() => {
                let _ = writeln!(out, "At {:.1}s: no playable scenes", at);
            }
            None => {
                let _ = writeln!(out, "At {:.1}s: end of timeline", at);
            }
        }
    }

    (out, discarded)
}

/// Print the timeline for a snapshot file.
pub fn handle_inspect(
    snapshot_path: &Path,
    updates_path: Option<&Path>,
    at: Option<f64>,
    config: &Config,
) -> Result<()> {
    let snapshot = ProjectSnapshot::load(snapshot_path)?;
    let updates = match updates_path {
        Some(path) => read_feed(path)?,
        None => Vec::new(),
    };

    let (report, discarded) = build_report(&snapshot, &updates, at, config);
    print!("{}", report);
    if discarded > 0 {
        eprintln!("Discarded {} malformed update(s)", discarded);
    }
    Ok(())
}
