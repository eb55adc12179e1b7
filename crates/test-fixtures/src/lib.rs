//! Test fixture loader for Roster golden datasets and session scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

// ── Typed fixtures ────────────────────────────────────────────────────────

/// A golden validation file: one base payload plus per-case overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationGolden {
    pub description: String,
    /// Starting payload every case is applied on top of.
    pub base: serde_json::Value,
    pub cases: Vec<ValidationCase>,
}

/// One submission and the outcome it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationCase {
    pub name: String,
    /// Field overrides merged into the base payload. `null` removes a field.
    #[serde(default)]
    pub overrides: BTreeMap<String, serde_json::Value>,
    /// Expected error kind per wire field name. Empty means the form is valid.
    #[serde(default)]
    pub expected_errors: BTreeMap<String, String>,
}

impl ValidationGolden {
    /// Base payload with the case's overrides applied.
    pub fn payload_for(&self, case: &ValidationCase) -> serde_json::Value {
        let mut payload = self.base.clone();
        if let Some(object) = payload.as_object_mut() {
            for (key, value) in &case.overrides {
                if value.is_null() {
                    object.remove(key);
                } else {
                    object.insert(key.clone(), value.clone());
                }
            }
        }
        payload
    }
}

/// A scripted sequence of UI events and the state after each one.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionScenario {
    pub description: String,
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioStep {
    /// `open`, `cancel`, `submit`, or `delete`.
    pub event: String,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
    #[serde(default)]
    pub index: Option<usize>,
    pub expect_len: usize,
    /// `open` or `closed`.
    pub expect_dialog: String,
    #[serde(default)]
    pub expect_error_fields: Vec<String>,
}
