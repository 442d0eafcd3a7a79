//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_CSV: &str = "\
Project Name,Project #,Design Manager Name,Programming Start Date,Schematic Design Start Date,Design Development Start Date,Construction Document Start Date,Permit Set Delivery Date
Riverside Library,101.0,M. Okafor,2024-01-08,2024-03-04,2024-05-06,2024-08-05,2024-11-04
Lakeview Annex,210A,J. Alvarez,2024-02-01,2024-04-01,,2024-09-02,2024-12-02
,,,2024-06-03,,,,
Harbor Tower,305,M. Okafor,2024-05-01,2024-03-01,,,
";

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    snapshot: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".phaseline");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let snapshot = temp_dir.path().join("projects.csv");
        fs::write(&snapshot, SAMPLE_CSV).expect("Failed to write sample snapshot");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            snapshot,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn snapshot(&self) -> &Path {
        &self.snapshot
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.data_dir.join("cache")
    }

    pub fn overwrite_snapshot(&self, content: &str) {
        fs::write(&self.snapshot, content).expect("Failed to overwrite snapshot");
    }

    /// Command preconfigured with this fixture's workspace and snapshot.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("phaseline").expect("Failed to find phaseline binary");
        cmd.arg("--data-dir")
            .arg(self.data_dir.to_str().unwrap())
            .arg("--source")
            .arg(self.snapshot.to_str().unwrap());
        cmd
    }

    /// Command with only the workspace set (no snapshot override).
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("phaseline").expect("Failed to find phaseline binary");
        cmd.arg("--data-dir").arg(self.data_dir.to_str().unwrap());
        cmd
    }
}
