//! # Task
//!
//! Represents a single to-do entry and the priority bounds accepted by the CLI.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod format;
pub mod store;

use std::fmt;

use crate::{
    constants::{PRIORITY_HIGHEST, PRIORITY_LOWEST},
    datetime::{self, Urgency},
};

pub use self::store::{LoadReport, TaskStore, UrgentTask};

/// Handle returned by [`TaskStore::insert`], unique within one store.
///
/// Ids are not persisted; a reload assigns fresh ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A stored task. Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    /// 1 (most urgent) to 5 (least urgent) when entered through the CLI
    pub priority: i32,

    /// Free text, single line
    pub description: String,

    /// Insertion time, `YYYY-MM-DD HH:MM`
    pub created_at: String,

    /// Due time, `YYYY-MM-DD HH:MM`, or empty for none
    pub due_date: String,
}

impl Task {
    /// Returns the due date, or `None` when the task has none.
    pub fn due(&self) -> Option<&str> {
        (!self.due_date.is_empty()).then_some(self.due_date.as_str())
    }

    /// Returns true if the task's due date has passed.
    pub fn is_overdue(&self) -> bool {
        datetime::is_overdue(&self.due_date)
    }

    /// Returns true if the task is due within `horizon_hours`.
    pub fn is_due_soon(&self, horizon_hours: u32) -> bool {
        datetime::is_due_soon(&self.due_date, horizon_hours)
    }

    /// Classifies the task against the current time.
    pub fn urgency(&self, horizon_hours: u32) -> Urgency {
        Urgency::classify(&self.due_date, horizon_hours)
    }
}

/// Checks a user-entered priority against the accepted 1..=5 range.
///
/// The store accepts any integer; range checks belong to the input layer.
pub const fn is_valid_priority(priority: i32) -> bool {
    priority >= PRIORITY_HIGHEST && priority <= PRIORITY_LOWEST
}
