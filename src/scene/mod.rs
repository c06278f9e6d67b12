//! Scene data model
//!
//! Scenes are produced by an external generation pipeline and arrive through
//! an initial snapshot and a live update channel. The player treats them as
//! read-only records:
//!
//! - `store`: the `SceneStore` trait and an in-memory implementation
//! - `live`: parsing and applying live-channel messages
//! - `snapshot`: loading the initial project/scene snapshot
//! - `feed`: replaying recorded live messages on a background thread

pub mod feed;
pub mod live;
pub mod snapshot;
pub mod store;

use serde::{Deserialize, Serialize};

pub use feed::{read_feed, spawn_feed};
pub use live::{apply_raw, LiveMessage, LiveMessageError};
pub use snapshot::{Project, ProjectSnapshot};
pub use store::{MemorySceneStore, SceneStore};

/// Lifecycle status of a scene in the generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneStatus {
    Planned,
    GeneratingAssets,
    CodeGenerating,
    Rendering,
    Ready,
    Error,
}

impl SceneStatus {
    /// Whether the scene has playable media.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Whether the scene is still moving through the pipeline.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            Self::Planned | Self::GeneratingAssets | Self::CodeGenerating | Self::Rendering
        )
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::GeneratingAssets => "assets",
            Self::CodeGenerating => "coding",
            Self::Rendering => "rendering",
            Self::Ready => "ready",
            Self::Error => "error",
        }
    }
}

/// A single scene record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene identity
    #[serde(alias = "scene_id", alias = "_id")]
    pub id: String,
    /// Position in the timeline (unique, dense)
    pub index: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: SceneStatus,
    /// Declared duration estimate in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Media source reference, present once the scene is ready
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Scene {
    /// Create a scene with only the fields the player cares about.
    pub fn new(id: impl Into<String>, index: u32, status: SceneStatus) -> Self {
        Self {
            id: id.into(),
            index,
            title: String::new(),
            description: String::new(),
            status,
            duration: None,
            video_url: None,
            progress_message: None,
            code: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.video_url = Some(source.into());
        self
    }

    /// Human label in the form `Scene N: title` (1-based).
    pub fn label(&self) -> String {
        if self.title.is_empty() {
            format!("Scene {}", self.index + 1)
        } else {
            format!("Scene {}: {}", self.index + 1, self.title)
        }
    }

    /// Apply a partial update. Absent fields are left untouched.
    pub fn apply(&mut self, patch: &ScenePatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(url) = &patch.video_url {
            self.video_url = Some(url.clone());
        }
        if let Some(code) = &patch.code {
            self.code = Some(code.clone());
        }
        if let Some(message) = &patch.progress_message {
            self.progress_message = Some(message.clone());
        }
    }
}

/// Partial update for a single scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenePatch {
    #[serde(default)]
    pub status: Option<SceneStatus>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub progress_message: Option<String>,
}

/// Sort scenes into timeline order.
pub fn sorted_by_index(scenes: &[Scene]) -> Vec<Scene> {
    let mut sorted = scenes.to_vec();
    sorted.sort_by_key(|s| s.index);
    sorted
}
