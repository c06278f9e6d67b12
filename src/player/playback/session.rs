//! Player session: wires the scene store, engine and media adapter.
//!
//! All work happens synchronously on the caller's thread. `pump` drains
//! store notifications and media events one at a time; each input is fully
//! re-derived by the engine before its directives reach the adapter.

use std::sync::mpsc::Receiver;

use crate::config::Config;
use crate::player::media::{MediaAdapter, MediaResource};
use crate::player::playback::PlaybackEngine;
use crate::player::state::{Directive, PlayerView, TransportCommand};
use crate::scene::SceneStore;

/// A playback session over a scene store and a media resource.
pub struct Player<S: SceneStore, R: MediaResource> {
    engine: PlaybackEngine,
    media: MediaAdapter<R>,
    store: S,
    changes: Receiver<u64>,
}

impl<S: SceneStore, R: MediaResource> Player<S, R> {
    /// Create a session and load the store's current snapshot.
    pub fn new(mut store: S, resource: R, config: &Config) -> Self {
        let changes = store.subscribe();
        let mut player = Self {
            engine: PlaybackEngine::new(config),
            media: MediaAdapter::new(resource),
            store,
            changes,
        };
        let directives = player.engine.set_scenes(player.store.snapshot());
        player.apply(directives);
        player
    }

    /// Execute a transport command.
    pub fn handle(&mut self, command: TransportCommand) {
        tracing::debug!(?command, "transport command");
        let directives = self.engine.handle(command);
        self.apply(directives);
    }

    /// Process pending store changes and media events.
    ///
    /// Returns true if anything was processed.
    pub fn pump(&mut self) -> bool {
        let mut processed = false;

        let mut store_changed = false;
        while self.changes.try_recv().is_ok() {
            store_changed = true;
        }
        if store_changed {
            let directives = self.engine.set_scenes(self.store.snapshot());
            self.apply(directives);
            processed = true;
        }

        self.media.collect();
        while let Some(event) = self.media.next_event() {
            let directives = self.engine.on_media_event(event);
            self.apply(directives);
            processed = true;
        }

        processed
    }

    pub fn view(&self) -> PlayerView {
        self.engine.view(self.media.is_playing())
    }

    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    pub fn media(&self) -> &MediaAdapter<R> {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut MediaAdapter<R> {
        &mut self.media
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable store access; changes are picked up on the next `pump`.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn apply(&mut self, directives: Vec<Directive>) {
        for directive in &directives {
            tracing::trace!(?directive, "media directive");
            self.media.apply(directive);
        }
    }
}
