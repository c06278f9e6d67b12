//! Media resource abstraction.
//!
//! `MediaResource` is the low-level playable element (one source at a time).
//! `MediaAdapter` wraps it with the guarantees the engine relies on:
//!
//! - `point_at` is idempotent: the same source is never reloaded
//! - `play` before the source finished loading is deferred, not dropped
//! - play failures are swallowed (logged at debug)
//! - events from a previous source are discarded

mod simulated;

pub use simulated::SimulatedMedia;

use std::collections::VecDeque;

use super::state::{Directive, MediaEvent};

/// Errors reported by a media resource.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaError {
    #[error("Playback of '{media}' was rejected: {reason}")]
    PlaybackRejected { media: String, reason: String },

    #[error("No media source loaded")]
    NoSource,
}

/// Raw event from a media resource, tagged with its source.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceEvent {
    Loaded { source: String },
    DurationKnown { source: String, seconds: f64 },
    TimeUpdate { source: String, seconds: f64 },
    Ended { source: String },
}

impl ResourceEvent {
    pub fn source(&self) -> &str {
        match self {
            Self::Loaded { source }
            | Self::DurationKnown { source, .. }
            | Self::TimeUpdate { source, .. }
            | Self::Ended { source } => source,
        }
    }
}

/// A single playable element.
///
/// Implementations load asynchronously: `load` returns immediately and a
/// `Loaded` event is reported once the source is ready.
pub trait MediaResource {
    /// Start loading a new source, replacing the current one.
    fn load(&mut self, source: &str);

    /// Seek within the current source.
    fn seek(&mut self, seconds: f64);

    /// Begin playback. May be rejected (e.g. autoplay policy).
    fn play(&mut self) -> Result<(), MediaError>;

    fn pause(&mut self);

    /// Drop the current source.
    fn release(&mut self);

    /// Drain pending events.
    fn poll_events(&mut self) -> Vec<ResourceEvent>;

    /// Whether the element is actually playing.
    fn is_playing(&self) -> bool;
}

/// Adapter enforcing the engine's media contract over a `MediaResource`.
#[derive(Debug)]
pub struct MediaAdapter<R: MediaResource> {
    resource: R,
    source: Option<String>,
    loaded: bool,
    play_pending: bool,
    load_count: usize,
    queue: VecDeque<ResourceEvent>,
}

impl<R: MediaResource> MediaAdapter<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            source: None,
            loaded: false,
            play_pending: false,
            load_count: 0,
            queue: VecDeque::new(),
        }
    }

    /// Point the element at a source. No-op if already pointing at it.
    ///
    /// Returns true if a load was issued.
    pub fn point_at(&mut self, source: &str) -> bool {
        if self.source.as_deref() == Some(source) {
            return false;
        }
        tracing::debug!(source, "loading media source");
        self.source = Some(source.to_string());
        self.loaded = false;
        self.play_pending = false;
        self.load_count += 1;
        self.resource.load(source);
        true
    }

    pub fn seek_local(&mut self, seconds: f64) {
        if self.source.is_some() {
            self.resource.seek(seconds.max(0.0));
        }
    }

    /// Start playback, deferring until the source has loaded.
    pub fn play(&mut self) {
        if self.source.is_none() {
            return;
        }
        if !self.loaded {
            self.play_pending = true;
            return;
        }
        self.start_playback();
    }

    pub fn pause(&mut self) {
        self.play_pending = false;
        self.resource.pause();
    }

    pub fn release(&mut self) {
        self.source = None;
        self.loaded = false;
        self.play_pending = false;
        self.queue.clear();
        self.resource.release();
    }

    /// Execute an engine directive.
    pub fn apply(&mut self, directive: &Directive) {
        match directive {
            Directive::PointAt(source) => {
                self.point_at(source);
            }
            Directive::SeekLocal(seconds) => self.seek_local(*seconds),
            Directive::Play => self.play(),
            Directive::Pause => self.pause(),
            Directive::Release => self.release(),
        }
    }

    /// Pull pending events from the resource into the adapter queue.
    pub fn collect(&mut self) {
        self.queue.extend(self.resource.poll_events());
    }

    /// Next event for the current source.
    ///
    /// Events are checked against the current source when popped, so
    /// directives applied between calls discard stale events.
    pub fn next_event(&mut self) -> Option<MediaEvent> {
        while let Some(event) = self.queue.pop_front() {
            if self.source.as_deref() != Some(event.source()) {
                tracing::trace!(source = event.source(), "dropping stale media event");
                continue;
            }
            match event {
                ResourceEvent::Loaded { .. } => self.mark_loaded(),
                ResourceEvent::DurationKnown { seconds, .. } => {
                    self.mark_loaded();
                    return Some(MediaEvent::DurationKnown(seconds));
                }
                ResourceEvent::TimeUpdate { seconds, .. } => {
                    return Some(MediaEvent::TimeUpdate(seconds));
                }
                ResourceEvent::Ended { .. } => return Some(MediaEvent::Ended),
            }
        }
        None
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_play_pending(&self) -> bool {
        self.play_pending
    }

    pub fn is_playing(&self) -> bool {
        self.resource.is_playing()
    }

    /// Number of loads issued so far.
    pub fn load_count(&self) -> usize {
        self.load_count
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut R {
        &mut self.resource
    }

    fn mark_loaded(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        if self.play_pending {
            self.play_pending = false;
            self.start_playback();
        }
    }

    fn start_playback(&mut self) {
        if let Err(e) = self.resource.play() {
            tracing::debug!(error = %e, "playback start rejected");
        }
    }
}
