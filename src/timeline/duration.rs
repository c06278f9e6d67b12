//! Duration resolution per scene.
//!
//! A scene's duration is provisional (declared estimate or a fixed fallback)
//! until the media resource measures it. Measured values are authoritative
//! and sticky for the lifetime of the table.

use std::collections::HashMap;

use crate::scene::Scene;

/// Best-known duration for every scene.
#[derive(Debug, Clone)]
pub struct DurationTable {
    fallback: f64,
    measured: HashMap<String, f64>,
}

impl DurationTable {
    /// Create a table with the given provisional fallback.
    ///
    /// Non-finite or non-positive fallbacks are replaced by 10 seconds.
    pub fn new(fallback: f64) -> Self {
        let fallback = if fallback.is_finite() && fallback > 0.0 {
            fallback
        } else {
            10.0
        };
        Self {
            fallback,
            measured: HashMap::new(),
        }
    }

    /// Best-known duration for a scene, in seconds. Never negative.
    pub fn get(&self, scene: &Scene) -> f64 {
        if let Some(&measured) = self.measured.get(&scene.id) {
            return measured;
        }
        match scene.duration {
            Some(d) if d.is_finite() && d > 0.0 => d,
            _ => self.fallback,
        }
    }

    /// Record a measured duration.
    ///
    /// Returns true if the table changed. The first valid measurement for a
    /// scene wins; later reports and invalid values are ignored.
    pub fn report(&mut self, scene_id: &str, seconds: f64) -> bool {
        if !seconds.is_finite() || seconds <= 0.0 {
            tracing::debug!(scene_id, seconds, "ignoring invalid measured duration");
            return false;
        }
        if self.measured.contains_key(scene_id) {
            return false;
        }
        tracing::debug!(scene_id, seconds, "authoritative duration recorded");
        self.measured.insert(scene_id.to_string(), seconds);
        true
    }

    pub fn is_authoritative(&self, scene_id: &str) -> bool {
        self.measured.contains_key(scene_id)
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }
}

impl Default for DurationTable {
    fn default() -> Self {
        Self::new(10.0)
    }
}
