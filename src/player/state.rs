//! Player state types
//!
//! Contains the playback state enum, the transport commands and media
//! directives exchanged with the engine, the read-only `PlayerView`
//! projection used for rendering, and the terminal `ViewState`.

use crate::scene::SceneStatus;

/// Derived playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// No playable content
    Idle,
    /// Playhead inside the timeline, intent is pause
    ActivePaused,
    /// Playhead inside the timeline, intent is play
    ActivePlaying,
    /// Playhead at the total duration
    Ended,
}

impl PlayerState {
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::ActivePlaying)
    }
}

/// User transport commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportCommand {
    TogglePlay,
    /// Seek to a global time in seconds
    Seek(f64),
    /// Seek relative to the playhead
    Skip(f64),
    SeekStart,
    SeekEnd,
    /// Seek to the start of the scene with this ordering index
    JumpToScene(u32),
}

/// Imperative directives for the media adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Point the media element at a source (resolved reference)
    PointAt(String),
    /// Seek within the current source
    SeekLocal(f64),
    Play,
    Pause,
    /// Drop the current source
    Release,
}

/// Events reported by the media adapter for the current source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Real duration measured after loading
    DurationKnown(f64),
    /// Local playback position
    TimeUpdate(f64),
    /// Playback reached the end of the source
    Ended,
}

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputResult {
    /// Nothing to do
    Continue,
    /// Forward a transport command to the player
    Transport(TransportCommand),
    /// Toggle fullscreen chrome (no playback effect)
    ToggleFullscreen,
    /// Exit the player
    Quit,
}

/// One entry of the scene strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StripEntry {
    pub index: u32,
    pub status: SceneStatus,
    /// Whether this scene holds the playhead
    pub active: bool,
}

/// Read-only projection of the engine for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub state: PlayerState,
    pub playhead: f64,
    pub total_duration: f64,
    /// Offset within the active scene
    pub local_time: f64,
    /// `Scene N: title` of the active scene
    pub scene_label: Option<String>,
    /// Shown when there is no active scene
    pub placeholder: Option<&'static str>,
    /// Whether the media element reports it is playing
    pub media_playing: bool,
    pub strip: Vec<StripEntry>,
    /// Global start offsets of segments after the first
    pub boundaries: Vec<f64>,
}

impl PlayerView {
    /// Play control is usable only with playable content.
    pub fn can_play(&self) -> bool {
        self.total_duration > 0.0
    }
}

/// Terminal layout state for the native player.
#[derive(Debug)]
pub struct ViewState {
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// Fullscreen hides the title and scene strip
    pub fullscreen: bool,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl ViewState {
    /// Number of bottom chrome lines (separator + progress + status bar)
    pub const STATUS_LINES: u16 = 3;

    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            term_cols,
            term_rows,
            fullscreen: false,
            needs_render: true,
        }
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.needs_render = true;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.needs_render = true;
    }

    /// Row of the progress bar (0-indexed).
    pub fn progress_row(&self) -> u16 {
        self.term_rows.saturating_sub(2)
    }

    /// Width of the progress bar in columns.
    pub fn progress_bar_width(&self) -> usize {
        (self.term_cols as usize).saturating_sub(14)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_playing_is_playing() {
        assert!(PlayerState::ActivePlaying.is_playing());
        assert!(!PlayerState::ActivePaused.is_playing());
        assert!(!PlayerState::Ended.is_playing());
        assert!(!PlayerState::Idle.is_playing());
    }

    #[test]
    fn new_view_state_needs_render() {
        let view = ViewState::new(80, 24);
        assert!(view.needs_render);
        assert!(!view.fullscreen);
        assert_eq!(view.progress_row(), 22);
        assert_eq!(view.progress_bar_width(), 66);
    }

    #[test]
    fn handle_resize_updates_dimensions() {
        let mut view = ViewState::new(80, 24);
        view.needs_render = false;
        view.handle_resize(120, 40);

        assert_eq!(view.term_cols, 120);
        assert_eq!(view.term_rows, 40);
        assert!(view.needs_render);
    }

    #[test]
    fn toggle_fullscreen_flips() {
        let mut view = ViewState::new(80, 24);
        view.toggle_fullscreen();
        assert!(view.fullscreen);
        view.toggle_fullscreen();
        assert!(!view.fullscreen);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let view = ViewState::new(5, 1);
        assert_eq!(view.progress_row(), 0);
        assert_eq!(view.progress_bar_width(), 0);
    }
}
