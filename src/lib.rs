//! Scene Player library
//!
//! Plays an ordered, growing set of independently generated video scenes
//! as one continuous timeline.

pub mod config;
pub mod logging;
pub mod player;
pub mod scene;
pub mod timeline;

pub use config::Config;
