//! Playback state machine over the virtual timeline.
//!
//! The engine is pure: every input (transport command, media event, scene
//! snapshot) re-derives the timeline and active segment completely, then
//! returns the media directives needed to match. Directives are applied by
//! the caller after the call returns, so the media element never observes a
//! half-updated state.

use crate::config::{Config, MediaConfig, PlayerConfig};
use crate::scene::{sorted_by_index, Scene};
use crate::timeline::{DurationTable, Resolution, Segment, Timeline};

use crate::player::state::{
    Directive, MediaEvent, PlayerState, PlayerView, StripEntry, TransportCommand,
};

/// How re-derivation reconciles the media element with the playhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncMode {
    /// Explicit playhead move: always seek within the active source
    Seek,
    /// Inputs changed under the playhead: seek only if drift exceeds threshold
    Reconcile,
    /// Playhead follows media time: never seek the active source
    Follow,
}

/// The source the media element currently points at.
#[derive(Debug, Clone, PartialEq)]
struct LoadedSegment {
    scene_id: String,
    source: String,
}

/// Virtual-timeline playback engine.
#[derive(Debug)]
pub struct PlaybackEngine {
    player: PlayerConfig,
    media: MediaConfig,
    scenes: Vec<Scene>,
    durations: DurationTable,
    timeline: Timeline,
    playhead: f64,
    play_intent: bool,
    active: Resolution,
    loaded: Option<LoadedSegment>,
    /// Last local position reported by (or commanded to) the media element
    media_position: Option<f64>,
}

impl PlaybackEngine {
    pub fn new(config: &Config) -> Self {
        let durations = DurationTable::new(config.player.fallback_duration);
        let timeline = Timeline::default();
        let active = timeline.resolve(0.0);
        Self {
            player: config.player.clone(),
            media: config.media.clone(),
            scenes: Vec::new(),
            durations,
            timeline,
            playhead: 0.0,
            play_intent: false,
            active,
            loaded: None,
            media_position: None,
        }
    }

    // === Inputs ===

    /// Replace the scene list (store snapshot) and re-derive.
    pub fn set_scenes(&mut self, scenes: Vec<Scene>) -> Vec<Directive> {
        self.scenes = sorted_by_index(&scenes);
        self.rederive(SyncMode::Reconcile)
    }

    /// Dispatch a transport command.
    pub fn handle(&mut self, command: TransportCommand) -> Vec<Directive> {
        match command {
            TransportCommand::TogglePlay => self.toggle_play(),
            TransportCommand::Seek(t) => self.seek(t),
            TransportCommand::Skip(delta) => self.skip(delta),
            TransportCommand::SeekStart => self.seek(0.0),
            TransportCommand::SeekEnd => self.seek(self.total_duration()),
            TransportCommand::JumpToScene(index) => self.jump_to_scene(index),
        }
    }

    /// Toggle play intent.
    ///
    /// Resuming from the end restarts at 0. No-op without playable content.
    pub fn toggle_play(&mut self) -> Vec<Directive> {
        let total = self.total_duration();
        if total <= 0.0 {
            return Vec::new();
        }

        if self.play_intent {
            self.play_intent = false;
            return vec![Directive::Pause];
        }

        self.play_intent = true;
        let mut directives = if self.playhead >= total {
            self.playhead = 0.0;
            self.rederive(SyncMode::Seek)
        } else {
            Vec::new()
        };
        if !directives.contains(&Directive::Play) {
            directives.push(Directive::Play);
        }
        directives
    }

    /// Move the playhead to a global time, clamped to the timeline.
    ///
    /// Does not change play intent, except that landing on the end pauses.
    pub fn seek(&mut self, time: f64) -> Vec<Directive> {
        let total = self.total_duration();
        if total <= 0.0 || time.is_nan() {
            return Vec::new();
        }
        self.playhead = time.clamp(0.0, total);
        self.rederive(SyncMode::Seek)
    }

    /// Seek relative to the playhead.
    pub fn skip(&mut self, delta: f64) -> Vec<Directive> {
        self.seek(self.playhead + delta)
    }

    /// Seek to the start of a ready scene. No-op if the scene is not ready.
    pub fn jump_to_scene(&mut self, index: u32) -> Vec<Directive> {
        match self.timeline.segment_at_index(index) {
            Some(segment) => {
                let start = segment.start;
                self.seek(start)
            }
            None => {
                tracing::debug!(index, "jump target is not on the timeline");
                Vec::new()
            }
        }
    }

    /// React to an event from the media adapter.
    pub fn on_media_event(&mut self, event: MediaEvent) -> Vec<Directive> {
        match event {
            MediaEvent::DurationKnown(seconds) => self.on_duration_known(seconds),
            MediaEvent::TimeUpdate(local) => self.on_time_update(local),
            MediaEvent::Ended => self.on_ended(),
        }
    }

    fn on_duration_known(&mut self, seconds: f64) -> Vec<Directive> {
        let Some(loaded) = &self.loaded else {
            return Vec::new();
        };
        if self.durations.report(&loaded.scene_id, seconds) {
            self.rederive(SyncMode::Reconcile)
        } else {
            Vec::new()
        }
    }

    fn on_time_update(&mut self, local: f64) -> Vec<Directive> {
        let Some(segment_start) = self.loaded_active_start() else {
            return Vec::new();
        };
        self.media_position = Some(local);

        let global = (segment_start + local).clamp(0.0, self.total_duration());
        if (global - self.playhead).abs() <= self.player.time_update_hysteresis {
            return Vec::new();
        }
        self.playhead = global;
        self.rederive(SyncMode::Follow)
    }

    fn on_ended(&mut self) -> Vec<Directive> {
        let Some(segment) = self.loaded_active_segment() else {
            return Vec::new();
        };
        let total = self.total_duration();
        let end = segment.end();
        // Nudge past the boundary but never beyond the middle of the next segment
        let next = self
            .timeline
            .segments()
            .iter()
            .find(|s| s.start >= end)
            .map(|following| end + self.player.end_nudge.min(following.duration / 2.0));

        if let Some(next) = next.filter(|&next| next < total) {
            tracing::debug!(next, "advancing to next segment");
            self.playhead = next;
            self.rederive(SyncMode::Seek)
        } else {
            tracing::debug!(total, "timeline ended");
            self.playhead = total;
            let mut directives = Vec::new();
            if self.play_intent {
                self.play_intent = false;
                directives.push(Directive::Pause);
            }
            directives.extend(self.rederive(SyncMode::Seek));
            directives
        }
    }

    // === Derivation ===

    fn rederive(&mut self, sync: SyncMode) -> Vec<Directive> {
        self.timeline = Timeline::build(&self.scenes, &self.durations);
        let total = self.timeline.total_duration();

        if total <= 0.0 {
            self.playhead = 0.0;
        } else {
            self.playhead = self.playhead.clamp(0.0, total);
        }
        self.active = self.timeline.resolve(self.playhead);

        let mut directives = Vec::new();
        if self.play_intent && (total <= 0.0 || self.playhead >= total) {
            self.play_intent = false;
            directives.push(Directive::Pause);
        }
        self.sync_media(sync, &mut directives);
        directives
    }

    fn sync_media(&mut self, sync: SyncMode, directives: &mut Vec<Directive>) {
        let target = self.active.segment.as_ref().and_then(|segment| {
            let source = segment.source.as_deref()?;
            Some(LoadedSegment {
                scene_id: segment.scene_id.clone(),
                source: self.media.resolve(source),
            })
        });
        let local = self.active.local_time;

        let Some(target) = target else {
            if let Some(segment) = &self.active.segment {
                tracing::warn!(scene_id = %segment.scene_id, "ready scene has no media source");
            }
            if self.loaded.take().is_some() {
                self.media_position = None;
                directives.push(Directive::Release);
            }
            return;
        };

        if self.loaded.as_ref() != Some(&target) {
            tracing::debug!(scene_id = %target.scene_id, local, "redirecting media");
            directives.push(Directive::PointAt(target.source.clone()));
            directives.push(Directive::SeekLocal(local));
            if self.play_intent {
                directives.push(Directive::Play);
            }
            self.loaded = Some(target);
            self.media_position = Some(local);
            return;
        }

        let drifted = self
            .media_position
            .map(|reported| (reported - local).abs() > self.player.resync_threshold)
            .unwrap_or(true);
        let seek = match sync {
            SyncMode::Seek => true,
            SyncMode::Reconcile => drifted,
            SyncMode::Follow => false,
        };
        if seek {
            directives.push(Directive::SeekLocal(local));
            self.media_position = Some(local);
        }
    }

    /// Active segment, if it is the one the media element points at.
    fn loaded_active_segment(&self) -> Option<Segment> {
        let loaded = self.loaded.as_ref()?;
        let segment = self.active.segment.as_ref()?;
        (segment.scene_id == loaded.scene_id).then(|| segment.clone())
    }

    fn loaded_active_start(&self) -> Option<f64> {
        self.loaded_active_segment().map(|s| s.start)
    }

    // === Queries ===

    pub fn state(&self) -> PlayerState {
        let total = self.total_duration();
        if total <= 0.0 {
            PlayerState::Idle
        } else if self.playhead >= total {
            PlayerState::Ended
        } else if self.play_intent {
            PlayerState::ActivePlaying
        } else {
            PlayerState::ActivePaused
        }
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn total_duration(&self) -> f64 {
        self.timeline.total_duration()
    }

    pub fn play_intent(&self) -> bool {
        self.play_intent
    }

    pub fn active(&self) -> &Resolution {
        &self.active
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn durations(&self) -> &DurationTable {
        &self.durations
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Scene the media element is pointed at.
    pub fn loaded_scene_id(&self) -> Option<&str> {
        self.loaded.as_ref().map(|l| l.scene_id.as_str())
    }

    /// Build the read-only view projection.
    pub fn view(&self, media_playing: bool) -> PlayerView {
        let active_id = self.active.scene_id();
        let active_scene = active_id.and_then(|id| self.scenes.iter().find(|s| s.id == id));

        let placeholder = match active_scene {
            Some(_) => None,
            None if self.scenes.is_empty() => Some("No scenes"),
            None if self.state() == PlayerState::Ended => None,
            None => Some("Waiting for renders..."),
        };

        PlayerView {
            state: self.state(),
            playhead: self.playhead,
            total_duration: self.total_duration(),
            local_time: self.active.local_time,
            scene_label: active_scene.map(Scene::label),
            placeholder,
            media_playing,
            strip: self
                .scenes
                .iter()
                .map(|s| StripEntry {
                    index: s.index,
                    status: s.status,
                    active: Some(s.id.as_str()) == active_id,
                })
                .collect(),
            boundaries: self.timeline.boundaries(),
        }
    }
}
