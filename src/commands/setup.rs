//! # Setup Command
//!
//! Writes a documented global config file if none exists yet.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::Write;

use anyhow::Result;

use crate::{config::GlobalConfig, ui};

/// Executes the setup command.
pub fn execute<W: Write>(out: &mut W) -> Result<()> {
    if let Some(path) = GlobalConfig::create_default_if_missing()? {
        writeln!(
            out,
            "{}",
            ui::success(&format!("Created global config: {}", path.display()))
        )?;
    } else if let Some(path) = GlobalConfig::path() {
        writeln!(
            out,
            "{}",
            ui::success(&format!("Global config already exists: {}", path.display()))
        )?;
    }
    Ok(())
}
