//! # Add Command
//!
//! Inserts a task stamped with the current time.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::Write;

use anyhow::Result;

use crate::{
    constants::{PRIORITY_HIGHEST, PRIORITY_LOWEST},
    task::{self, TaskStore},
    ui,
};

/// Arguments for the add command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    pub description: String,
    /// 1 (highest) to 5 (lowest)
    pub priority: i32,
    /// `YYYY-MM-DD HH:MM`, or `None`/empty for no due date
    pub due: Option<String>,
}

/// Executes the add command.
pub fn execute<W: Write>(store: &mut TaskStore, args: &AddArgs, out: &mut W) -> Result<()> {
    if !task::is_valid_priority(args.priority) {
        anyhow::bail!(
            "Invalid priority! Please enter {PRIORITY_HIGHEST} to {PRIORITY_LOWEST}."
        );
    }

    let id = store.insert(args.priority, &args.description, args.due.as_deref())?;
    if let Some(task) = store.get(id) {
        writeln!(out, "{}", ui::success(&format!("Task added at {}", task.created_at)))?;
    }

    Ok(())
}
