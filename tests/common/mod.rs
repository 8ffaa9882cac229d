//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: a
//! temporary project directory seeded with mobfiles, and helpers to run
//! the mob binary against it.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use assert_fs::TempDir;

/// Test project context
///
/// Creates a temporary directory with a `mobfiles/` root and runs the mob
/// binary with that directory as the working directory, so relative paths
/// inside target commands resolve into the project.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir_all(dir.path().join("mobfiles"))
            .expect("Failed to create mobfiles directory");
        Self { dir }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a mobfile, e.g. `mobfile("app.mobproject", "[Main]\n...")`
    pub fn mobfile(&self, file: &str, content: &str) {
        std::fs::write(self.path().join("mobfiles").join(file), content)
            .expect("Failed to write mobfile");
    }

    /// Write the default test device, `dev.mobdevice`
    pub fn default_device(&self) {
        self.mobfile("dev.mobdevice", "[Main]\nArchitecture = x86_64\n");
    }

    /// Run the mob binary with `args` in the project directory
    pub fn mob(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mob"));
        cmd.current_dir(self.path());
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute mob")
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a process stream for assertions
pub fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
