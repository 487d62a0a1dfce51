//! # List & Peek Commands
//!
//! Shows every task sorted by priority, or just the next one.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{constants::UI_LIST_RULE, error::TaskError, task::TaskStore, ui};

/// Executes the list command.
pub fn execute<W: Write>(store: &TaskStore, out: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "{}", ui::notice("No tasks available!"))?;
        return Ok(());
    }

    writeln!(out, "\n{}", "Your To-Do List:".bold())?;
    writeln!(out, "{UI_LIST_RULE}")?;
    for task in store.list_all() {
        let urgency = task.urgency(store.due_soon_hours());
        writeln!(out, "{}", ui::task_line(task, urgency))?;
    }
    writeln!(out, "{UI_LIST_RULE}")?;

    Ok(())
}

/// Executes the peek command.
pub fn peek<W: Write>(store: &TaskStore, out: &mut W) -> Result<()> {
    match store.peek_top() {
        Ok(task) => writeln!(out, "{}", ui::next_task_line(task))?,
        Err(TaskError::Empty) => writeln!(out, "{}", ui::notice("No tasks available!"))?,
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
