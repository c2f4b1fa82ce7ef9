//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary server directory
//! - Command builder helpers with a scrubbed `SAMP_*` environment

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated server directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty server directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with every inherited `SAMP_*` variable removed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sampcfg").expect("Failed to find sampcfg binary");
        for (key, _) in std::env::vars_os() {
            if key.to_string_lossy().starts_with("SAMP") {
                cmd.env_remove(key);
            }
        }
        cmd
    }

    /// Get the server directory path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `samp.json` into the server directory.
    pub fn write_json(&self, contents: &str) {
        std::fs::write(self.temp_path.join("samp.json"), contents)
            .expect("Failed to write samp.json");
    }

    /// Write `samp.yaml` into the server directory.
    pub fn write_yaml(&self, contents: &str) {
        std::fs::write(self.temp_path.join("samp.yaml"), contents)
            .expect("Failed to write samp.yaml");
    }
}
