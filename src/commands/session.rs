//! # Session
//!
//! Loads the task store described by a [`Config`] and writes it back.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use tracing::debug;

use crate::{config::Config, task::TaskStore};

/// Builds a store from the configured data file.
///
/// A missing data file yields an empty store; any other read error fails.
pub fn open_store(config: &Config) -> Result<TaskStore> {
    let mut store = config.new_store();

    match store.load(&config.data_file) {
        Ok(_) => {}
        Err(err) if err.is_not_found() => {
            debug!(path = %config.data_file.display(), "no task file yet, starting empty");
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("Failed to load tasks: {}", config.data_file.display())
            });
        }
    }

    Ok(store)
}

/// Writes the store to the configured data file.
pub fn save_store(store: &TaskStore, config: &Config) -> Result<()> {
    store
        .save(&config.data_file)
        .with_context(|| format!("Failed to save tasks: {}", config.data_file.display()))
}
