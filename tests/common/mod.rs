//! # Test Harness
//!
//! Provides utilities for integration testing smarttodo without affecting user configuration.
//! Uses thread-local storage instead of environment variables to avoid any interference
//! with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use smarttodo::set_home_override;
use tempfile::TempDir;

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment that manages temporary directories for both
/// the "home" directory (for global config) and the project directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/smarttodo/config)
    pub home_dir: TempDir,
    /// Temporary directory for the project
    pub project_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    #[allow(dead_code)]
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with temporary directories.
    ///
    /// Uses thread-local storage to redirect global config (no env var modification).
    /// Changes to the project directory for the duration of the test.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let project_dir = TempDir::new().expect("Failed to create temp project dir");

        let original_cwd = env::current_dir().expect("Failed to get current dir");

        set_home_override(Some(home_dir.path().to_path_buf()));
        env::set_current_dir(project_dir.path()).expect("Failed to change to project dir");

        Self {
            home_dir,
            project_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path to the project directory.
    #[allow(dead_code)]
    pub fn project_path(&self) -> &Path {
        self.project_dir.path()
    }

    /// Returns the path where global config would be stored.
    #[allow(dead_code)]
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("smarttodo")
            .join("config")
    }

    /// Returns the path where project config would be stored.
    #[allow(dead_code)]
    pub fn project_config_path(&self) -> PathBuf {
        self.project_dir.path().join(".smarttodo")
    }

    /// Returns the default task data file path.
    pub fn data_path(&self) -> PathBuf {
        self.project_dir.path().join("tasks.txt")
    }

    /// Returns the default CSV export path.
    pub fn export_path(&self) -> PathBuf {
        self.project_dir.path().join("tasks_export.csv")
    }

    /// Creates a global config file with the given content.
    #[allow(dead_code)]
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Creates a project config file with the given content.
    #[allow(dead_code)]
    pub fn write_project_config(&self, content: &str) {
        fs::write(self.project_config_path(), content).expect("Failed to write project config");
    }

    /// Writes raw lines to the default task data file.
    #[allow(dead_code)]
    pub fn write_tasks(&self, lines: &[&str]) {
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(self.data_path(), content).expect("Failed to write task file");
    }

    /// Reads the default task data file, or an empty string if missing.
    #[allow(dead_code)]
    pub fn read_tasks(&self) -> String {
        fs::read_to_string(self.data_path()).unwrap_or_default()
    }

    /// Reads the default CSV export.
    #[allow(dead_code)]
    pub fn read_export(&self) -> String {
        fs::read_to_string(self.export_path()).expect("Failed to read export file")
    }

    /// Creates a `todo` command configured to run in the test environment.
    #[allow(dead_code)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("todo").expect("todo binary should build");
        cmd.current_dir(self.project_dir.path());
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Restore original working directory first
        let _ = env::set_current_dir(&self.original_cwd);

        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Task Line Helpers
// =============================================================================

/// Builds one data-file line.
#[allow(dead_code)]
pub fn task_line(priority: i32, created: &str, due: &str, description: &str) -> String {
    format!("{priority}|{created}|{due}|{description}")
}

/// Formats a time `minutes` from now, in the stored date format.
#[allow(dead_code)]
pub fn minutes_from_now(minutes: i64) -> String {
    let ts = smarttodo::datetime::now() + chrono::TimeDelta::minutes(minutes);
    smarttodo::datetime::format(ts)
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Builder for creating test configurations (global or project).
#[allow(dead_code)]
#[derive(Default)]
pub struct ConfigBuilder {
    data_file: Option<String>,
    export_file: Option<String>,
    capacity: Option<usize>,
    due_soon_hours: Option<u32>,
}

#[allow(dead_code)]
impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_file(mut self, path: impl Into<String>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    pub fn export_file(mut self, path: impl Into<String>) -> Self {
        self.export_file = Some(path.into());
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn due_soon_hours(mut self, hours: u32) -> Self {
        self.due_soon_hours = Some(hours);
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();
        if let Some(v) = &self.data_file {
            lines.push(format!("data_file = \"{v}\""));
        }
        if let Some(v) = &self.export_file {
            lines.push(format!("export_file = \"{v}\""));
        }
        if let Some(v) = self.capacity {
            lines.push(format!("capacity = {v}"));
        }
        if let Some(v) = self.due_soon_hours {
            lines.push(format!("due_soon_hours = {v}"));
        }
        lines.join("\n")
    }
}
