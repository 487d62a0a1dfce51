//! # UI Utilities
//!
//! Formats tasks, reminders, and status messages for the terminal.
//! Everything here returns strings; callers decide where to write them.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Display;

use owo_colors::OwoColorize;

use crate::{
    constants::UI_NO_DUE_DATE,
    datetime::Urgency,
    task::{Task, UrgentTask},
};

// =============================================================================
// Task Rendering
// =============================================================================

/// Returns the due date for display, or "None".
pub fn due_or_none(task: &Task) -> &str {
    task.due().unwrap_or(UI_NO_DUE_DATE)
}

/// Suffix appended to urgent tasks in the full listing.
pub const fn urgency_tag(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Overdue => " (OVERDUE)",
        Urgency::DueSoon => " (Due Soon)",
        Urgency::Normal => "",
    }
}

/// One row of the full task listing, colored by urgency.
///
/// Format: `Priority: P | Added: T | Due: D[ tag] | Task: DESC`
pub fn task_line(task: &Task, urgency: Urgency) -> String {
    let line = format!(
        "Priority: {} | Added: {} | Due: {}{} | Task: {}",
        task.priority,
        task.created_at,
        due_or_none(task),
        urgency_tag(urgency),
        task.description
    );

    match urgency {
        Urgency::Overdue => line.red().to_string(),
        Urgency::DueSoon => line.yellow().to_string(),
        Urgency::Normal => line,
    }
}

/// Summary of the task at the top of the queue.
pub fn next_task_line(task: &Task) -> String {
    format!(
        "{} {} (Priority {}, Added: {}, Due: {})",
        "Next Task:".bold(),
        task.description,
        task.priority,
        task.created_at,
        due_or_none(task)
    )
}

/// Confirmation for a completed task.
pub fn completed_line(task: &Task) -> String {
    success(&format!(
        "Completed Task: {} (Added: {})",
        task.description, task.created_at
    ))
}

/// One reminder line for an overdue or due-soon task.
pub fn reminder_line(urgent: &UrgentTask<'_>) -> String {
    let task = urgent.task;
    match urgent.urgency {
        Urgency::Overdue => format!("{} {}", "Overdue Task:".red().bold(), task.description),
        Urgency::DueSoon => format!(
            "{} {} due by {}",
            "Due Soon:".yellow().bold(),
            task.description,
            task.due_date
        ),
        Urgency::Normal => task.description.clone(),
    }
}

// =============================================================================
// Status Messages
// =============================================================================

/// Format: `✓ {message}`
pub fn success(message: &str) -> String {
    format!("{} {message}", "✓".green())
}

/// Dimmed informational text, e.g. for empty results.
pub fn notice(message: &str) -> String {
    message.dimmed().to_string()
}

/// Format: `warning: {message}`
pub fn warning(message: &str) -> String {
    format!("{} {message}", "warning:".yellow())
}

/// Format: `error: {err}`, using the alternate form for `anyhow` chains.
pub fn error(err: &impl Display) -> String {
    format!("{} {err:#}", "error:".red().bold())
}
