//! Live update channel messages.
//!
//! The transport is external; this module only understands the JSON
//! message bodies and applies them to a `MemorySceneStore`. Malformed
//! messages are discarded and the store keeps its previous state.

use serde::Deserialize;

use super::store::MemorySceneStore;
use super::{Scene, ScenePatch, SceneStatus};

/// Errors produced while parsing a live-channel message.
#[derive(Debug, thiserror::Error)]
pub enum LiveMessageError {
    #[error("Malformed live message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown live message type: {0}")]
    UnknownType(String),
}

/// A parsed live-channel message.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveMessage {
    /// Full scene-list replacement
    ScenesPlanned { scenes: Vec<Scene> },
    /// Field patch for one scene
    SceneUpdate { scene_id: String, patch: ScenePatch },
    /// Pipeline finished; no store change
    ProjectComplete,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(flatten)]
    body: serde_json::Value,
}

#[derive(Deserialize)]
struct ScenesPlannedBody {
    scenes: Vec<Scene>,
}

#[derive(Deserialize)]
struct SceneUpdateBody {
    scene_id: String,
    #[serde(default)]
    status: Option<SceneStatus>,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    progress_message: Option<String>,
}

impl LiveMessage {
    /// Parse a raw message body.
    pub fn parse(text: &str) -> Result<Self, LiveMessageError> {
        let envelope: Envelope = serde_json::from_str(text)?;
        match envelope.kind.as_str() {
            "scenes_planned" => {
                let body: ScenesPlannedBody = serde_json::from_value(envelope.body)?;
                Ok(Self::ScenesPlanned {
                    scenes: body.scenes,
                })
            }
            "scene_update" => {
                let body: SceneUpdateBody = serde_json::from_value(envelope.body)?;
                Ok(Self::SceneUpdate {
                    scene_id: body.scene_id,
                    patch: ScenePatch {
                        status: body.status,
                        video_url: body.video_url,
                        code: body.code,
                        progress_message: body.progress_message,
                    },
                })
            }
            "project_complete" => Ok(Self::ProjectComplete),
            other => Err(LiveMessageError::UnknownType(other.to_string())),
        }
    }

    /// Apply this message to the store.
    pub fn apply(self, store: &mut MemorySceneStore) {
        match self {
            Self::ScenesPlanned { scenes } => {
                tracing::debug!(count = scenes.len(), "scene list replaced");
                store.replace_all(scenes);
            }
            Self::SceneUpdate { scene_id, patch } => {
                store.patch(&scene_id, &patch);
            }
            Self::ProjectComplete => {
                tracing::info!("project complete");
            }
        }
    }
}

/// Parse and apply a raw message, discarding it if malformed.
///
/// Returns true if the message was applied.
pub fn apply_raw(store: &mut MemorySceneStore, text: &str) -> bool {
    match LiveMessage::parse(text) {
        Ok(message) => {
            message.apply(store);
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "discarding live message");
            false
        }
    }
}
