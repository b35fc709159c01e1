//! Shared testing utilities for launchpad CLI tests.

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `launchpad` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("launchpad").expect("Failed to locate launchpad binary");
        cmd.current_dir(self.work_dir());
        cmd
    }
}
