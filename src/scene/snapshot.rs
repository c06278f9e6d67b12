//! Initial project snapshot.
//!
//! Mirrors the one-shot project fetch: a project record plus its scenes.
//! An optional `media` table maps source references to measured durations
//! and is only consulted by the simulated media resource.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Scene;

/// Project record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_prompt: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub target_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_video_url: Option<String>,
}

/// Project plus scene list, as returned by the initial fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default)]
    pub project: Project,
    #[serde(default)]
    pub scenes: Vec<Scene>,
    /// Measured media durations keyed by source reference
    #[serde(default)]
    pub media: HashMap<String, f64>,
}

impl ProjectSnapshot {
    /// Parse a snapshot from JSON text.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse project snapshot")
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid snapshot: {}", path.display()))
    }

    /// Display title for the project.
    pub fn title(&self) -> &str {
        if self.project.user_prompt.is_empty() {
            &self.project.id
        } else {
            &self.project.user_prompt
        }
    }
}
