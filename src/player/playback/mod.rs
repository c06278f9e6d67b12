//! Playback logic for the player.
//!
//! This module holds the virtual-timeline state machine and the session
//! that connects it to a scene store and a media resource.

mod engine;
mod session;

pub use engine::PlaybackEngine;
pub use session::Player;
