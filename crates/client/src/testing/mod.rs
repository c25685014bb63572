//! Testing utilities for Jenkins client tests.
//!
//! This module provides an in-memory [`FakeJenkins`] implementing
//! [`crate::JenkinsApi`] and a loader for the JSON fixtures shared by the
//! HTTP-level tests. Available when running tests or when the `test-utils`
//! feature is enabled.
//!
//! # Example
//! ```ignore
//! use ji_client::testing::{FakeJenkins, load_fixture};
//!
//! let api = FakeJenkins::new()
//!     .with_job("web-ci", "<project/>")
//!     .with_disabled_job("web-cd", "<project/>");
//!
//! let listing = load_fixture("jobs/list_root.json");
//! ```

mod fake;

use std::path::Path;

pub use fake::{FAKE_BASE_URL, FakeJenkins};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "jobs/list_root.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}
