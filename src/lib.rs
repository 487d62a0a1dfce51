//! # smarttodo
//!
//! A prioritized to-do list with due-date reminders.
//!
//! Tasks live in a binary min-heap keyed by priority (1 = most urgent), are
//! persisted to a plain-text file with one task per line, and can be exported
//! to CSV.
//!
//! ## Features
//!
//! - **Priority Queue**: The most urgent task is always one step away
//! - **Reminders**: Overdue and due-soon tasks are flagged on startup
//! - **Plain Text Storage**: `priority|added|due|description`, one per line
//! - **CSV Export**: Spreadsheet-friendly snapshot of all tasks
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod datetime;
pub mod error;
pub mod shell;
pub mod task;
pub mod ui;

pub use config::{set_home_override, Config, Settings};
pub use datetime::{Timestamp, Urgency};
pub use error::{ParseError, TaskError};
pub use task::{LoadReport, Task, TaskId, TaskStore, UrgentTask};
