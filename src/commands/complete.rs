//! # Complete Command
//!
//! Removes the most urgent task from the queue.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::Write;

use anyhow::Result;

use crate::{error::TaskError, task::TaskStore, ui};

/// Executes the complete command. An empty queue is reported, not an error.
pub fn execute<W: Write>(store: &mut TaskStore, out: &mut W) -> Result<()> {
    match store.remove_top() {
        Ok(task) => writeln!(out, "{}", ui::completed_line(&task))?,
        Err(TaskError::Empty) => writeln!(out, "{}", ui::notice("No tasks to remove!"))?,
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
