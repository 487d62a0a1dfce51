//! # Task File Formats
//!
//! Line-oriented data file codec and CSV export writer.
//!
//! Data file: one task per line, `priority|created_at|due_date|description`.
//! The description is the trailing field and runs to the end of the line, so
//! it may contain `|`. The first three fields never contain the delimiter.
//!
//! CSV: a fixed header, then `priority,"created_at","due_date","description"`
//! with embedded double quotes doubled. Quoted fields keep embedded commas
//! intact for RFC 4180 readers.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{borrow::Cow, io::Write};

use super::Task;
use crate::constants::{CSV_HEADER, FIELD_DELIMITER};

/// Serializes a task as a single data-file line (without newline).
pub fn format_line(task: &Task) -> String {
    format!(
        "{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}",
        task.priority, task.created_at, task.due_date, task.description
    )
}

/// Parses one data-file line.
///
/// Returns `None` for lines with fewer than three delimiters or a
/// non-integer priority.
pub fn parse_line(line: &str) -> Option<Task> {
    let mut fields = line.splitn(4, FIELD_DELIMITER);
    let priority = fields.next()?.trim().parse::<i32>().ok()?;
    let created_at = fields.next()?;
    let due_date = fields.next()?;
    let description = fields.next()?;

    Some(Task {
        priority,
        description: description.to_string(),
        created_at: created_at.to_string(),
        due_date: due_date.to_string(),
    })
}

/// Writes tasks in data-file format, one per line.
pub fn write_lines<'a, W, I>(writer: &mut W, tasks: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Task>,
{
    for task in tasks {
        writeln!(writer, "{}", format_line(task))?;
    }
    writer.flush()
}

/// Doubles every `"` so the value can sit inside a quoted CSV field.
pub fn csv_escape(value: &str) -> Cow<'_, str> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "\"\""))
    } else {
        Cow::Borrowed(value)
    }
}

/// Serializes a task as one CSV row (without newline).
pub fn format_csv_row(task: &Task) -> String {
    format!(
        "{},\"{}\",\"{}\",\"{}\"",
        task.priority,
        task.created_at,
        task.due_date,
        csv_escape(&task.description)
    )
}

/// Writes the CSV header followed by one row per task.
pub fn write_csv<'a, W, I>(writer: &mut W, tasks: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Task>,
{
    writeln!(writer, "{CSV_HEADER}")?;
    for task in tasks {
        writeln!(writer, "{}", format_csv_row(task))?;
    }
    writer.flush()
}
