//! Shared fixtures for integration tests

use std::path::PathBuf;

use tempfile::TempDir;

/// Directory holding the checked-in fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy a fixture into a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dest = temp_dir.path().join(name);
    std::fs::copy(fixtures_dir().join(name), &dest).expect("Failed to copy fixture");
    (temp_dir, dest)
}
