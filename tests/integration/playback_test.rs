//! End-to-end playback through the session and the simulated media element

use std::collections::HashMap;

use super::helpers::fixtures_dir;
use sceneplay::player::{simulated_media, Player, PlayerState, SimulatedMedia, TransportCommand};
use sceneplay::scene::{MemorySceneStore, ProjectSnapshot, Scene, ScenePatch, SceneStatus};
use sceneplay::Config;

type SimPlayer = Player<MemorySceneStore, SimulatedMedia>;

fn config() -> Config {
    let mut config = Config::default();
    config.media.base_url = String::new();
    config
}

fn ready(id: &str, index: u32, duration: f64) -> Scene {
    Scene::new(id, index, SceneStatus::Ready)
        .with_duration(duration)
        .with_source(format!("/v/{}.mp4", id))
}

fn player(scenes: Vec<Scene>, media: SimulatedMedia) -> SimPlayer {
    Player::new(MemorySceneStore::with_scenes(scenes), media, &config())
}

fn tick(player: &mut SimPlayer, dt: f64) {
    player.media_mut().resource_mut().advance(dt);
    player.pump();
}

/// Tick until the timeline ends, returning the scenes the media visited.
fn run_until_ended(player: &mut SimPlayer, max_ticks: usize) -> Vec<String> {
    let mut visited: Vec<String> = player
        .engine()
        .loaded_scene_id()
        .map(String::from)
        .into_iter()
        .collect();
    for _ in 0..max_ticks {
        tick(player, 0.5);
        if let Some(id) = player.engine().loaded_scene_id() {
            if visited.last().map(String::as_str) != Some(id) {
                visited.push(id.to_string());
            }
        }
        if player.view().state == PlayerState::Ended {
            break;
        }
    }
    visited
}

#[test]
fn three_scenes_play_through_to_the_end() {
    let mut player = player(
        vec![ready("a", 0, 10.0), ready("b", 1, 10.0), ready("c", 2, 10.0)],
        SimulatedMedia::new(HashMap::new(), 10.0),
    );
    player.handle(TransportCommand::TogglePlay);

    let visited = run_until_ended(&mut player, 200);

    assert_eq!(visited, vec!["a", "b", "c"]);
    assert_eq!(player.view().state, PlayerState::Ended);
    assert_eq!(player.engine().playhead(), 30.0);
    assert!(!player.engine().play_intent());
    assert_eq!(player.media().source(), None);
}

#[test]
fn toggle_after_end_restarts_from_zero() {
    let mut player = player(
        vec![ready("a", 0, 2.0)],
        SimulatedMedia::new(HashMap::new(), 2.0),
    );
    player.handle(TransportCommand::TogglePlay);
    run_until_ended(&mut player, 50);
    assert_eq!(player.view().state, PlayerState::Ended);

    player.handle(TransportCommand::TogglePlay);

    assert_eq!(player.view().state, PlayerState::ActivePlaying);
    assert_eq!(player.engine().playhead(), 0.0);
    assert_eq!(player.media().source(), Some("/v/a.mp4"));
}

#[test]
fn measured_duration_replaces_declared_estimate() {
    let snapshot = ProjectSnapshot::load(fixtures_dir().join("project.json")).unwrap();
    let config = Config::default();
    let media = simulated_media(&snapshot, &config);
    let mut player = Player::new(
        MemorySceneStore::with_scenes(snapshot.scenes.clone()),
        media,
        &config,
    );

    assert_eq!(player.view().total_duration, 10.0);
    assert_eq!(
        player.media().source(),
        Some("http://localhost:8000/videos/s0.mp4")
    );

    tick(&mut player, 0.0);

    assert_eq!(player.view().total_duration, 8.0);
    assert!(player.engine().durations().is_authoritative("s0"));
}

#[test]
fn scene_becoming_ready_after_end_waits_paused_at_boundary() {
    let mut player = player(
        vec![
            ready("a", 0, 10.0),
            Scene::new("b", 1, SceneStatus::Rendering).with_duration(5.0),
        ],
        SimulatedMedia::new(HashMap::new(), 10.0),
    );
    player.handle(TransportCommand::TogglePlay);
    run_until_ended(&mut player, 100);
    assert_eq!(player.engine().playhead(), 10.0);

    player.store_mut().patch(
        "b",
        &ScenePatch {
            status: Some(SceneStatus::Ready),
            video_url: Some("/v/b.mp4".to_string()),
            ..Default::default()
        },
    );
    player.pump();

    let view = player.view();
    assert_eq!(view.state, PlayerState::ActivePaused);
    assert_eq!(view.total_duration, 15.0);
    assert_eq!(view.playhead, 10.0);
    assert_eq!(player.media().source(), Some("/v/b.mp4"));

    player.handle(TransportCommand::TogglePlay);
    run_until_ended(&mut player, 100);
    assert_eq!(player.engine().playhead(), 15.0);
}

#[test]
fn scene_ready_during_playback_does_not_interrupt() {
    let mut player = player(
        vec![
            ready("a", 0, 10.0),
            Scene::new("b", 1, SceneStatus::Rendering),
        ],
        SimulatedMedia::new(HashMap::new(), 10.0),
    );
    player.handle(TransportCommand::TogglePlay);
    for _ in 0..5 {
        tick(&mut player, 0.5);
    }
    let before = player.engine().playhead();
    assert!(before > 0.0);

    player.store_mut().patch(
        "b",
        &ScenePatch {
            status: Some(SceneStatus::Ready),
            video_url: Some("/v/b.mp4".to_string()),
            ..Default::default()
        },
    );
    tick(&mut player, 0.5);

    let view = player.view();
    assert_eq!(view.state, PlayerState::ActivePlaying);
    assert_eq!(view.total_duration, 20.0);
    assert!(view.playhead > before);
    assert_eq!(player.media().load_count(), 1);
}

#[test]
fn seek_into_later_scene_while_playing() {
    let mut player = player(
        vec![ready("a", 0, 10.0), ready("b", 1, 10.0), ready("c", 2, 10.0)],
        SimulatedMedia::new(HashMap::new(), 10.0),
    );
    player.handle(TransportCommand::TogglePlay);
    tick(&mut player, 0.0);

    player.handle(TransportCommand::Seek(25.0));
    assert_eq!(player.media().source(), Some("/v/c.mp4"));
    assert_eq!(player.view().scene_label.as_deref(), Some("Scene 3"));

    tick(&mut player, 0.0); // load completes, deferred play starts
    tick(&mut player, 0.5);

    assert!((player.engine().playhead() - 25.5).abs() < 1e-9);
    assert!(player.view().media_playing);
}

#[test]
fn rejected_autoplay_keeps_intent_until_retried() {
    let mut player = player(
        vec![ready("a", 0, 10.0)],
        SimulatedMedia::new(HashMap::new(), 10.0).rejecting_playback(),
    );
    player.handle(TransportCommand::TogglePlay);
    for _ in 0..4 {
        tick(&mut player, 0.5);
    }

    let view = player.view();
    assert_eq!(view.state, PlayerState::ActivePlaying);
    assert!(!view.media_playing);
    assert_eq!(view.playhead, 0.0);

    player.media_mut().resource_mut().set_reject_play(false);
    player.handle(TransportCommand::TogglePlay);
    player.handle(TransportCommand::TogglePlay);
    tick(&mut player, 0.5);

    assert!(player.view().media_playing);
    assert_eq!(player.engine().playhead(), 0.5);
}
