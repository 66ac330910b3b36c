//! Test support utilities for paramscan integration tests.
//!
//! Provides snapshot-backed test environments and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Parameters live in a JSON snapshot inside the temp directory, so
/// scans never reach AWS and tests can run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a snapshot of `(name, type, value)`.
    pub fn with_parameters(params: &[(&str, &str, &str)]) -> Self {
        let t = Self::new();
        t.write_snapshot(params);
        t
    }

    /// Path of the snapshot file.
    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.path().join(SNAPSHOT_FILE)
    }

    /// Write (or overwrite) the snapshot file.
    pub fn write_snapshot(&self, params: &[(&str, &str, &str)]) {
        let entries: Vec<_> = params
            .iter()
            .map(|(name, kind, value)| {
                serde_json::json!({ "name": name, "type": kind, "value": value })
            })
            .collect();
        std::fs::write(
            self.snapshot_path(),
            serde_json::to_string_pretty(&entries).expect("failed to encode snapshot"),
        )
        .expect("failed to write snapshot");
    }
}
