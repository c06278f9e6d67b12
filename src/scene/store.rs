//! Scene store abstraction.
//!
//! The player depends on `SceneStore` rather than a concrete store so it can
//! be driven by a fake in tests. Subscribers receive the new revision number
//! after every mutation.

use std::sync::mpsc::{channel, Receiver, Sender};

use super::{Scene, ScenePatch};

/// Read-only, reactive view of the scene list.
pub trait SceneStore {
    /// Current scene records (any order).
    fn snapshot(&self) -> Vec<Scene>;

    /// Monotonic counter bumped on every mutation.
    fn revision(&self) -> u64;

    /// Subscribe to change notifications.
    ///
    /// Each mutation sends the new revision. Dropped receivers are pruned
    /// on the next send.
    fn subscribe(&mut self) -> Receiver<u64>;
}

/// In-memory scene store fed by the snapshot loader and the live channel.
#[derive(Debug, Default)]
pub struct MemorySceneStore {
    scenes: Vec<Scene>,
    revision: u64,
    subscribers: Vec<Sender<u64>>,
}

impl MemorySceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with scenes.
    pub fn with_scenes(scenes: Vec<Scene>) -> Self {
        Self {
            scenes,
            ..Self::default()
        }
    }

    /// Replace the whole scene list.
    pub fn replace_all(&mut self, scenes: Vec<Scene>) {
        self.scenes = scenes;
        self.notify();
    }

    /// Patch a single scene. Returns false if the id is unknown.
    pub fn patch(&mut self, id: &str, patch: &ScenePatch) -> bool {
        match self.scenes.iter_mut().find(|s| s.id == id) {
            Some(scene) => {
                scene.apply(patch);
                self.notify();
                true
            }
            None => {
                tracing::debug!(scene_id = id, "patch for unknown scene ignored");
                false
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    fn notify(&mut self) {
        self.revision += 1;
        let revision = self.revision;
        self.subscribers.retain(|tx| tx.send(revision).is_ok());
    }
}

impl SceneStore for MemorySceneStore {
    fn snapshot(&self) -> Vec<Scene> {
        self.scenes.clone()
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn subscribe(&mut self) -> Receiver<u64> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }
}
