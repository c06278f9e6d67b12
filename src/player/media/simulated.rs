//! Wall-clock driven media resource.
//!
//! Stands in for a real media element in the terminal player: there is no
//! decoding, only a position that advances while playing. Sources load on
//! the next `advance` call, and measured durations come from a lookup
//! table (sources missing from it never report a duration).

use std::collections::HashMap;

use super::{MediaError, MediaResource, ResourceEvent};

/// Simulated single-source media element.
#[derive(Debug, Default)]
pub struct SimulatedMedia {
    durations: HashMap<String, f64>,
    /// Length used for sources without a known duration
    default_length: f64,
    reject_play: bool,
    source: Option<String>,
    length: f64,
    position: f64,
    loading: bool,
    playing: bool,
    events: Vec<ResourceEvent>,
}

impl SimulatedMedia {
    /// Create a resource with measured durations keyed by source.
    pub fn new(durations: HashMap<String, f64>, default_length: f64) -> Self {
        Self {
            durations,
            default_length,
            ..Self::default()
        }
    }

    /// Reject every `play` call, like a blocked autoplay policy.
    pub fn rejecting_playback(mut self) -> Self {
        self.reject_play = true;
        self
    }

    pub fn set_reject_play(&mut self, reject: bool) {
        self.reject_play = reject;
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Advance the simulated clock by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        let Some(source) = self.source.clone() else {
            return;
        };

        if self.loading {
            self.loading = false;
            self.events.push(ResourceEvent::Loaded {
                source: source.clone(),
            });
            if let Some(&seconds) = self.durations.get(&source) {
                self.events
                    .push(ResourceEvent::DurationKnown { source, seconds });
            }
            return;
        }

        if !self.playing || dt <= 0.0 {
            return;
        }

        self.position += dt;
        if self.position >= self.length {
            self.position = self.length;
            self.playing = false;
            self.events.push(ResourceEvent::TimeUpdate {
                source: source.clone(),
                seconds: self.position,
            });
            self.events.push(ResourceEvent::Ended { source });
        } else {
            self.events.push(ResourceEvent::TimeUpdate {
                source,
                seconds: self.position,
            });
        }
    }
}

impl MediaResource for SimulatedMedia {
    fn load(&mut self, source: &str) {
        self.source = Some(source.to_string());
        self.length = self
            .durations
            .get(source)
            .copied()
            .unwrap_or(self.default_length);
        self.position = 0.0;
        self.loading = true;
        self.playing = false;
    }

    fn seek(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.length);
    }

    fn play(&mut self) -> Result<(), MediaError> {
        let Some(source) = &self.source else {
            return Err(MediaError::NoSource);
        };
        if self.reject_play {
            return Err(MediaError::PlaybackRejected {
                media: source.clone(),
                reason: "playback not permitted".to_string(),
            });
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn release(&mut self) {
        self.source = None;
        self.loading = false;
        self.playing = false;
        self.position = 0.0;
    }

    fn poll_events(&mut self) -> Vec<ResourceEvent> {
        std::mem::take(&mut self.events)
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
