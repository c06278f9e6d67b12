//! Virtual-timeline player
//!
//! Presents an ordered set of independently generated scenes as one
//! continuous video with a single playhead, while scenes keep arriving
//! and changing status.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlayerState, transport commands, media directives and the
//!   read-only PlayerView
//! - `media/`: the media resource seam, its adapter and a simulated resource
//! - `playback/`: the playback engine and the session wiring store, engine
//!   and media together
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: UI rendering (scene strip, scene panel, progress bar, status bar)
//!
//! # Usage
//!
//! ```no_run
//! use sceneplay::player::{play_project, PlaybackResult};
//! use sceneplay::scene::ProjectSnapshot;
//! use sceneplay::Config;
//!
//! let snapshot = ProjectSnapshot::load("project.json").unwrap();
//! match play_project(snapshot, None, &Config::default()).unwrap() {
//!     PlaybackResult::Finished => println!("Finished"),
//!     PlaybackResult::Interrupted => println!("Stopped by user"),
//! }
//! ```

pub(crate) mod input;
pub mod media;
mod native;
pub mod playback;
pub mod render;
pub mod state;

pub use media::{MediaAdapter, MediaError, MediaResource, ResourceEvent, SimulatedMedia};
pub use native::{play_project, simulated_media, PlaybackResult};
pub use playback::{PlaybackEngine, Player};
pub use state::{
    Directive, InputResult, MediaEvent, PlayerState, PlayerView, StripEntry, TransportCommand,
    ViewState,
};
