//! Virtual timeline over independently produced scene segments.
//!
//! Only ready scenes occupy timeline space. The timeline is rebuilt from
//! scratch from `(scenes, durations)` whenever either input changes; it is
//! never patched in place.

mod duration;

pub use duration::DurationTable;

use crate::scene::Scene;

/// A ready scene placed on the global timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub scene_id: String,
    /// Scene ordering index
    pub index: u32,
    /// Global start offset in seconds
    pub start: f64,
    /// Best-known duration in seconds
    pub duration: f64,
    /// Media source reference, if the scene carries one
    pub source: Option<String>,
}

impl Segment {
    /// Global end offset (exclusive).
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Whether `time` falls inside `[start, end)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end()
    }
}

/// Result of mapping a global time onto the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Active segment, or None past the end / with no ready scenes
    pub segment: Option<Segment>,
    /// Offset within the active segment
    pub local_time: f64,
    /// Start of the active segment, or end of the last ready segment
    pub segment_start: f64,
}

impl Resolution {
    pub fn scene_id(&self) -> Option<&str> {
        self.segment.as_ref().map(|s| s.scene_id.as_str())
    }
}

/// Ordered ready segments with cumulative offsets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    segments: Vec<Segment>,
    total_duration: f64,
}

impl Timeline {
    /// Build the timeline from a scene list (any order) and duration table.
    pub fn build(scenes: &[Scene], durations: &DurationTable) -> Self {
        let mut ordered: Vec<&Scene> = scenes.iter().collect();
        ordered.sort_by_key(|s| s.index);

        let mut segments = Vec::new();
        let mut accumulated = 0.0f64;

        for scene in ordered {
            if !scene.status.is_ready() {
                continue;
            }
            let duration = durations.get(scene);
            segments.push(Segment {
                scene_id: scene.id.clone(),
                index: scene.index,
                start: accumulated,
                duration,
                source: scene.video_url.clone(),
            });
            accumulated += duration;
        }

        Self {
            segments,
            total_duration: accumulated,
        }
    }

    /// Map a global time to a segment and local offset.
    ///
    /// Negative or NaN times resolve as 0. Times at or after the total
    /// duration resolve to no segment.
    pub fn resolve(&self, global_time: f64) -> Resolution {
        let time = if global_time.is_nan() {
            0.0
        } else {
            global_time.max(0.0)
        };

        for segment in &self.segments {
            if segment.contains(time) {
                return Resolution {
                    segment: Some(segment.clone()),
                    local_time: time - segment.start,
                    segment_start: segment.start,
                };
            }
        }

        Resolution {
            segment: None,
            local_time: 0.0,
            segment_start: self.total_duration,
        }
    }

    /// Sum of ready-scene durations.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment for a scene id, if that scene is on the timeline.
    pub fn segment_for(&self, scene_id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.scene_id == scene_id)
    }

    /// Segment for a scene ordering index, if that scene is on the timeline.
    pub fn segment_at_index(&self, index: u32) -> Option<&Segment> {
        self.segments.iter().find(|s| s.index == index)
    }

    /// Start offsets of every segment after the first.
    pub fn boundaries(&self) -> Vec<f64> {
        self.segments.iter().skip(1).map(|s| s.start).collect()
    }
}
