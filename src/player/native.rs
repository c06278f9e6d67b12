//! Native terminal player.
//!
//! Runs a project snapshot through the playback engine with a simulated
//! media element, rendering with raw ANSI output. Live updates arrive as
//! raw JSON lines over a channel and are applied to the scene store
//! between frames.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor, event,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::config::Config;
use crate::player::input::handle_event;
use crate::player::media::SimulatedMedia;
use crate::player::playback::Player;
use crate::player::render::render_frame;
use crate::player::state::{InputResult, PlayerState, ViewState};
use crate::scene::{apply_raw, MemorySceneStore, ProjectSnapshot};

/// Frame interval (~30fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Result of a playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// User quit after the timeline finished
    Finished,
    /// User quit before the end
    Interrupted,
}

/// Restores the terminal when dropped, including on early error return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Build the simulated media element for a snapshot.
///
/// Measured durations are keyed by resolved source so they match what the
/// engine points the media at.
pub fn simulated_media(snapshot: &ProjectSnapshot, config: &Config) -> SimulatedMedia {
    let durations: HashMap<String, f64> = snapshot
        .media
        .iter()
        .map(|(source, &seconds)| (config.media.resolve(source), seconds))
        .collect();
    SimulatedMedia::new(durations, config.player.fallback_duration)
}

/// Apply every pending live update.
///
/// Returns true if any line was received. Clears `updates` once the
/// sender is gone.
fn drain_updates(
    updates: &mut Option<Receiver<String>>,
    store: &mut MemorySceneStore,
) -> bool {
    let Some(rx) = updates else {
        return false;
    };
    let mut received = false;
    loop {
        match rx.try_recv() {
            Ok(line) => {
                apply_raw(store, &line);
                received = true;
            }
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                tracing::debug!("live update feed finished");
                *updates = None;
                break;
            }
        }
    }
    received
}

/// Play a project in the terminal until the user quits.
pub fn play_project(
    snapshot: ProjectSnapshot,
    mut updates: Option<Receiver<String>>,
    config: &Config,
) -> Result<PlaybackResult> {
    let title = snapshot.title().to_string();
    let media = simulated_media(&snapshot, config);
    let store = MemorySceneStore::with_scenes(snapshot.scenes);
    let mut player = Player::new(store, media, config);

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let mut layout = ViewState::new(cols, rows);

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;
    tracing::info!(title = %title, "player started");

    let mut last_tick = Instant::now();
    let mut last_view = player.view();

    loop {
        if drain_updates(&mut updates, player.store_mut()) {
            layout.needs_render = true;
        }

        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;
        player.media_mut().resource_mut().advance(dt);
        player.pump();

        let view = player.view();
        if view != last_view {
            layout.needs_render = true;
        }

        if layout.needs_render {
            render_frame(&mut stdout, &layout, &view, &title)?;
            layout.needs_render = false;
        }

        if event::poll(FRAME_INTERVAL)? {
            let input = event::read()?;
            match handle_event(input, &mut layout, &view, config.player.skip_step) {
                InputResult::Quit => {
                    stdout.flush()?;
                    let result = if player.view().state == PlayerState::Ended {
                        PlaybackResult::Finished
                    } else {
                        PlaybackResult::Interrupted
                    };
                    tracing::info!(?result, "player stopped");
                    return Ok(result);
                }
                InputResult::Transport(command) => {
                    player.handle(command);
                    layout.needs_render = true;
                }
                InputResult::ToggleFullscreen | InputResult::Continue => {}
            }
        }

        last_view = view;
    }
}
