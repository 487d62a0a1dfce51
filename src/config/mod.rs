//! # Configuration
//!
//! Merged configuration combining global (~/.config/smarttodo/config),
//! project (.smarttodo), and command-line settings. Later sources win.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;
pub mod project;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use self::{
    global::{set_home_override, GlobalConfig},
    project::ProjectConfig,
};
use crate::{
    constants::{DEFAULT_CAPACITY, DEFAULT_DATA_FILE, DEFAULT_DUE_SOON_HOURS, DEFAULT_EXPORT_FILE},
    task::TaskStore,
};

/// Options shared by every configuration layer. Unset fields fall through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Task data file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,

    /// CSV export destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_file: Option<String>,

    /// Maximum number of tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,

    /// Due-soon reminder window in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_soon_hours: Option<u32>,
}

impl Settings {
    /// Overlays `other` on top of `self`; set fields in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            data_file: other.data_file.or(self.data_file),
            export_file: other.export_file.or(self.export_file),
            capacity: other.capacity.or(self.capacity),
            due_soon_hours: other.due_soon_hours.or(self.due_soon_hours),
        }
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Task data file (absolute, or relative to the working directory)
    pub data_file: PathBuf,

    /// CSV export destination
    pub export_file: PathBuf,

    /// Maximum number of tasks
    pub capacity: usize,

    /// Due-soon reminder window in hours
    pub due_soon_hours: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
            capacity: DEFAULT_CAPACITY,
            due_soon_hours: DEFAULT_DUE_SOON_HOURS,
        }
    }
}

impl Config {
    /// Loads configuration for the current directory with CLI overrides applied.
    pub fn load(overrides: Settings) -> Result<Self> {
        let cwd = std::env::current_dir().context("Cannot get current directory")?;
        Self::load_from(&cwd, overrides)
    }

    /// Loads configuration as seen from `cwd`.
    ///
    /// Relative file paths from config files resolve against the project root
    /// (or `cwd` without one). Relative paths in `overrides` are kept as given.
    pub fn load_from(cwd: &Path, overrides: Settings) -> Result<Self> {
        let global = GlobalConfig::load()?;
        let project_root = ProjectConfig::find_project_root(cwd);
        let project = match &project_root {
            Some(root) => ProjectConfig::load(root)?,
            None => ProjectConfig::default(),
        };
        let base_dir = project_root.as_deref().unwrap_or(cwd);

        let files = global.settings.merge(project.settings);
        let resolve = |value: Option<String>, default: &str| {
            base_dir.join(value.as_deref().unwrap_or(default))
        };

        let config = Self {
            data_file: overrides
                .data_file
                .map_or_else(|| resolve(files.data_file, DEFAULT_DATA_FILE), PathBuf::from),
            export_file: overrides.export_file.map_or_else(
                || resolve(files.export_file, DEFAULT_EXPORT_FILE),
                PathBuf::from,
            ),
            capacity: overrides
                .capacity
                .or(files.capacity)
                .unwrap_or(DEFAULT_CAPACITY),
            due_soon_hours: overrides
                .due_soon_hours
                .or(files.due_soon_hours)
                .unwrap_or(DEFAULT_DUE_SOON_HOURS),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            anyhow::bail!("capacity must be at least 1");
        }
        if self.due_soon_hours == 0 {
            anyhow::bail!("due_soon_hours must be at least 1");
        }
        Ok(())
    }

    /// Creates an empty store sized and tuned by this configuration.
    pub fn new_store(&self) -> TaskStore {
        TaskStore::new(self.capacity).with_due_soon_hours(self.due_soon_hours)
    }
}
