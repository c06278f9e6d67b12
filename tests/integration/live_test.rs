//! Integration tests for live updates feeding the scene store

use super::helpers::{fixtures_dir, temp_fixture};
use sceneplay::scene::{
    apply_raw, read_feed, LiveMessage, MemorySceneStore, ProjectSnapshot, SceneStatus, SceneStore,
};
use sceneplay::timeline::{DurationTable, Timeline};

fn fixture_store() -> MemorySceneStore {
    let snapshot = ProjectSnapshot::load(fixtures_dir().join("project.json")).unwrap();
    MemorySceneStore::with_scenes(snapshot.scenes)
}

#[test]
fn snapshot_fixture_loads() {
    let (temp_dir, path) = temp_fixture("project.json");
    let snapshot = ProjectSnapshot::load(&path).unwrap();

    assert_eq!(snapshot.project.id, "proj-gravity");
    assert_eq!(snapshot.title(), "Explain how gravity works");
    assert_eq!(snapshot.scenes.len(), 3);
    assert_eq!(snapshot.media.get("/videos/s0.mp4"), Some(&8.0));

    drop(temp_dir);
}

#[test]
fn replaying_feed_makes_every_scene_ready() {
    let mut store = fixture_store();
    let changes = store.subscribe();
    let lines = read_feed(fixtures_dir().join("updates.jsonl")).unwrap();

    let applied = lines.iter().filter(|line| apply_raw(&mut store, line)).count();

    // One line in the fixture is truncated
    assert_eq!(applied, lines.len() - 1);
    assert!(store
        .snapshot()
        .iter()
        .all(|scene| scene.status == SceneStatus::Ready));
    // project_complete does not touch the store
    assert_eq!(changes.try_iter().count(), 3);
}

#[test]
fn timeline_grows_as_scenes_become_ready() {
    let mut store = fixture_store();
    let durations = DurationTable::default();

    let before = Timeline::build(&store.snapshot(), &durations);
    assert_eq!(before.total_duration(), 10.0);
    assert_eq!(before.segments().len(), 1);

    for line in read_feed(fixtures_dir().join("updates.jsonl")).unwrap() {
        apply_raw(&mut store, &line);
    }

    let after = Timeline::build(&store.snapshot(), &durations);
    // 10 declared + 12 declared + 10 fallback
    assert_eq!(after.total_duration(), 32.0);
    assert_eq!(after.boundaries(), vec![10.0, 22.0]);

    let resolution = after.resolve(23.0);
    assert_eq!(resolution.scene_id(), Some("s2"));
    assert_eq!(resolution.local_time, 1.0);
}

#[test]
fn malformed_message_leaves_store_unchanged() {
    let mut store = fixture_store();
    let before = store.snapshot();

    assert!(!apply_raw(&mut store, r#"{"type": "scene_update", "scene_id": "s1""#));
    assert!(!apply_raw(&mut store, r#"{"type": "render_started"}"#));

    assert_eq!(store.snapshot(), before);
}

#[test]
fn scenes_planned_replaces_list() {
    let mut store = fixture_store();
    let message = LiveMessage::parse(
        r#"{"type": "scenes_planned", "scenes": [
            {"scene_id": "n0", "index": 0, "title": "New intro", "status": "planned"}
        ]}"#,
    )
    .unwrap();

    message.apply(&mut store);

    let scenes = store.snapshot();
    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].id, "n0");
    assert!(Timeline::build(&scenes, &DurationTable::default()).is_empty());
}
