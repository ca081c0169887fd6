#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a configured `outline` command suitable for integration tests.
#[allow(dead_code)]
pub fn outline_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("outline"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("OUTLINE_PLAN");
    cmd
}

/// Write a plan document into the temp dir and return its path.
#[allow(dead_code)]
pub fn write_plan(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("PROJECT_PLAN.md");
    std::fs::write(&path, contents).expect("failed to write plan fixture");
    path
}
