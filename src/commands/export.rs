//! # Export Command
//!
//! Writes every task to a CSV file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io::Write, path::Path};

use anyhow::{Context, Result};

use crate::{task::TaskStore, ui};

/// Executes the export command.
pub fn execute<W: Write>(store: &TaskStore, path: &Path, out: &mut W) -> Result<()> {
    store
        .export_csv(path)
        .with_context(|| format!("Failed to write CSV: {}", path.display()))?;

    writeln!(
        out,
        "{}",
        ui::success(&format!("Tasks exported to {}", path.display()))
    )?;
    Ok(())
}
