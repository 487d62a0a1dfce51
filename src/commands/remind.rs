//! # Remind Command
//!
//! Lists overdue and due-soon tasks.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::{task::TaskStore, ui};

/// Executes the remind command.
pub fn execute<W: Write>(store: &TaskStore, out: &mut W) -> Result<()> {
    let urgent = store.urgent_tasks();

    if urgent.is_empty() {
        writeln!(out, "{}", ui::notice("No urgent tasks at the moment."))?;
        return Ok(());
    }

    for entry in &urgent {
        debug!(urgency = %entry.urgency, due = %entry.task.due_date, "reminder");
        writeln!(out, "{}", ui::reminder_line(entry))?;
    }
    Ok(())
}
