//! # Errors
//!
//! Typed errors returned by the date-time helpers and the task store.
//! The CLI layers wrap these in `anyhow` with file-path context.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::constants::DATETIME_HINT;

/// A date-time string did not match `YYYY-MM-DD HH:MM`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date '{input}': expected {DATETIME_HINT}")]
pub struct ParseError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl ParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Errors that can occur during task store operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Insert attempted while the store holds `capacity` tasks.
    #[error("Task list full ({capacity} tasks)")]
    CapacityExceeded { capacity: usize },

    /// Remove or peek on a store without tasks.
    #[error("No tasks available")]
    Empty,

    /// Malformed due date.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The data or export file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TaskError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is an I/O error for a file that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result alias for task store operations.
pub type TaskResult<T> = Result<T, TaskError>;
