//! # Constants
//!
//! Centralized constants for magic values used throughout smarttodo.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Date & Time
// =============================================================================

/// `chrono` format string for every stored timestamp (`YYYY-MM-DD HH:MM`).
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Human-readable form of [`DATETIME_FORMAT`], used in prompts and errors.
pub const DATETIME_HINT: &str = "YYYY-MM-DD HH:MM";

/// Default look-ahead window for "due soon" reminders.
pub const DEFAULT_DUE_SOON_HOURS: u32 = 24;

// =============================================================================
// Task Store
// =============================================================================

/// Highest urgency priority.
pub const PRIORITY_HIGHEST: i32 = 1;

/// Lowest urgency priority.
pub const PRIORITY_LOWEST: i32 = 5;

/// Default maximum number of tasks held by a store.
pub const DEFAULT_CAPACITY: usize = 1000;

// =============================================================================
// File Formats
// =============================================================================

/// Field separator in the task data file.
pub const FIELD_DELIMITER: char = '|';

/// Header row written at the top of every CSV export.
pub const CSV_HEADER: &str = "Priority,Added,Due Date,Description";

// =============================================================================
// File System
// =============================================================================

/// Default task data file name.
pub const DEFAULT_DATA_FILE: &str = "tasks.txt";

/// Default CSV export file name.
pub const DEFAULT_EXPORT_FILE: &str = "tasks_export.csv";

/// Project configuration file name (searched upward from the working directory).
pub const PROJECT_CONFIG_FILE: &str = ".smarttodo";

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "smarttodo";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

// =============================================================================
// UI Display
// =============================================================================

/// Placeholder shown for tasks without a due date.
pub const UI_NO_DUE_DATE: &str = "None";

/// Horizontal rule framing the task list.
pub const UI_LIST_RULE: &str =
    "---------------------------------------------------------------";
