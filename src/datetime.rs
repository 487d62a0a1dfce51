//! # Date & Time
//!
//! Parses and formats `YYYY-MM-DD HH:MM` wall-clock timestamps and classifies
//! due dates as overdue, due soon, or neither.
//!
//! All values are local, naive, minute-precision times. "Now" is truncated to
//! the minute before every comparison, so a task due at the current minute is
//! neither overdue nor due soon.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};

use crate::{
    constants::{DATETIME_FORMAT, DEFAULT_DUE_SOON_HOURS},
    error::ParseError,
};

/// A minute-precision local wall-clock time.
pub type Timestamp = NaiveDateTime;

/// Urgency of a task relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    /// The due date has passed.
    Overdue,
    /// Due within the reminder horizon.
    DueSoon,
    /// No due date, an unparseable one, or one further away.
    Normal,
}

impl Urgency {
    /// Classifies a raw due-date string against the current time.
    pub fn classify(due: &str, horizon_hours: u32) -> Self {
        Self::classify_at(due, now(), horizon_hours)
    }

    /// Classifies a raw due-date string against an explicit `now`.
    ///
    /// The due date is parsed once; overdue is checked before due soon.
    pub fn classify_at(due: &str, now: Timestamp, horizon_hours: u32) -> Self {
        let Some(due) = parse_due(due) else {
            return Self::Normal;
        };
        let now = truncate_to_minute(now);

        if now > due {
            Self::Overdue
        } else if within_horizon(due - now, horizon_hours) {
            Self::DueSoon
        } else {
            Self::Normal
        }
    }

    /// Returns true for overdue and due-soon tasks.
    pub const fn is_urgent(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue => write!(f, "overdue"),
            Self::DueSoon => write!(f, "due soon"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

/// Returns the current local time truncated to the minute.
pub fn now() -> Timestamp {
    truncate_to_minute(Local::now().naive_local())
}

/// Returns [`now`] formatted as `YYYY-MM-DD HH:MM`.
pub fn now_string() -> String {
    format(now())
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM`.
pub fn format(ts: Timestamp) -> String {
    ts.format(DATETIME_FORMAT).to_string()
}

/// Parses a string strictly in `YYYY-MM-DD HH:MM` form.
///
/// Every field must be zero-padded and the whole string must match; leading
/// or trailing characters are rejected. Empty strings mean "no date" and are
/// handled by callers, but are rejected here as well.
pub fn parse(s: &str) -> Result<Timestamp, ParseError> {
    if !has_datetime_shape(s) {
        return Err(ParseError::new(s));
    }
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).map_err(|_| ParseError::new(s))
}

/// Returns true if `due` is present, valid, and strictly before now.
pub fn is_overdue(due: &str) -> bool {
    is_overdue_at(due, now())
}

/// [`is_overdue`] against an explicit `now`.
pub fn is_overdue_at(due: &str, now: Timestamp) -> bool {
    Urgency::classify_at(due, now, DEFAULT_DUE_SOON_HOURS) == Urgency::Overdue
}

/// Returns true if `due` is present, valid, not overdue, and within
/// `horizon_hours` of now.
pub fn is_due_soon(due: &str, horizon_hours: u32) -> bool {
    is_due_soon_at(due, now(), horizon_hours)
}

/// [`is_due_soon`] against an explicit `now`.
pub fn is_due_soon_at(due: &str, now: Timestamp, horizon_hours: u32) -> bool {
    Urgency::classify_at(due, now, horizon_hours) == Urgency::DueSoon
}

/// Parses a stored due date, treating empty and malformed values as absent.
fn parse_due(due: &str) -> Option<Timestamp> {
    if due.is_empty() {
        return None;
    }
    parse(due).ok()
}

fn within_horizon(remaining: TimeDelta, horizon_hours: u32) -> bool {
    remaining > TimeDelta::zero() && remaining <= TimeDelta::hours(i64::from(horizon_hours))
}

fn truncate_to_minute(ts: Timestamp) -> Timestamp {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

/// Checks the fixed `DDDD-DD-DD DD:DD` layout before handing off to chrono,
/// which would otherwise accept unpadded fields.
fn has_datetime_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            10 => b == b' ',
            13 => b == b':',
            _ => b.is_ascii_digit(),
        })
}
