//! # Global Configuration
//!
//! Handles the user-wide configuration stored at `~/.config/smarttodo/config`.
//! The file is optional; a missing file yields the built-in defaults.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Settings;
use crate::constants::{
    DEFAULT_CAPACITY, DEFAULT_DATA_FILE, DEFAULT_DUE_SOON_HOURS, DEFAULT_EXPORT_FILE,
    GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/smarttodo/config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalConfig {
    pub settings: Settings,
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/smarttodo/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        let home = get_home_override().or_else(dirs::home_dir)?;
        Some(
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME),
        )
    }

    /// Loads the global config, returning defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with every option documented.
    /// Returns the path if created, `None` if it already existed.
    pub fn create_default_if_missing() -> Result<Option<PathBuf>> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if path.exists() {
            return Ok(None);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, default_contents())
            .with_context(|| format!("Failed to write global config: {}", path.display()))?;

        Ok(Some(path))
    }
}

/// Commented template written by `todo setup`. Every key is optional.
fn default_contents() -> String {
    format!(
        r#"# smarttodo Global Configuration
# Applies to every directory. A `.smarttodo` file in a project directory
# (or any parent) overrides these values. Relative paths resolve against
# the directory holding `.smarttodo`, or the current directory.
# Location: ~/.config/smarttodo/config

# Task data file, one task per line.
# Default: "{DEFAULT_DATA_FILE}"
data_file = "{DEFAULT_DATA_FILE}"

# Destination of the CSV export.
# Default: "{DEFAULT_EXPORT_FILE}"
export_file = "{DEFAULT_EXPORT_FILE}"

# Maximum number of tasks. Adding beyond this is rejected.
# Default: {DEFAULT_CAPACITY}
capacity = {DEFAULT_CAPACITY}

# Tasks due within this many hours are reported as "Due Soon".
# Default: {DEFAULT_DUE_SOON_HOURS}
due_soon_hours = {DEFAULT_DUE_SOON_HOURS}
"#
    )
}
