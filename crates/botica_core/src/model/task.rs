//! Supervisor task domain model.
//!
//! # Responsibility
//! - Define the recurring daily task record persisted in the task list.
//! - Validate caller input before a task can exist in memory.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `time` is always a valid 24-hour time-of-day; it recurs daily and
//!   carries no date component.
//! - New tasks always start with `completed = false`.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a supervisor task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Wire format for the time-of-day field.
///
/// The persisted record stores `"HH:MM"`, the shape a time input field
/// produces; `"HH:MM:SS"` is accepted on read for forward compatibility.
const TIME_WIRE_FORMAT: &str = "%H:%M";
const TIME_WIRE_FORMAT_WITH_SECONDS: &str = "%H:%M:%S";

/// Validation error for task create/update input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Time input is empty.
    EmptyTime,
    /// Time input is present but not a valid `HH:MM` time-of-day.
    InvalidTime(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::EmptyTime => write!(f, "task time must not be empty"),
            Self::InvalidTime(value) => {
                write!(f, "task time `{value}` is not a valid HH:MM time-of-day")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// A recurring daily checklist item owned by the supervisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID assigned at creation.
    pub id: TaskId,
    /// Human-readable description shown in the checklist.
    pub title: String,
    /// Wall-clock time-of-day at which the task is due, every day.
    #[serde(with = "wire_time")]
    pub time: NaiveTime,
    /// Completion flag for the current calendar day.
    pub completed: bool,
}

impl Task {
    /// Creates a task from raw caller input with a generated stable ID.
    ///
    /// # Errors
    /// - [`TaskValidationError::EmptyTitle`] for blank titles.
    /// - [`TaskValidationError::EmptyTime`] / [`TaskValidationError::InvalidTime`]
    ///   for unusable time input.
    pub fn new(title: &str, time: &str) -> Result<Self, TaskValidationError> {
        Ok(Self {
            id: Uuid::new_v4(),
            title: validate_title(title)?,
            time: parse_wire_time(time)?,
            completed: false,
        })
    }

    /// Replaces the mutable fields from raw caller input.
    ///
    /// `id` and `completed` are preserved; validation failure leaves the
    /// task untouched.
    pub fn apply_edit(&mut self, title: &str, time: &str) -> Result<(), TaskValidationError> {
        let title = validate_title(title)?;
        let time = parse_wire_time(time)?;
        self.title = title;
        self.time = time;
        Ok(())
    }

    /// Formats the due time the way the persisted record stores it.
    pub fn wire_time(&self) -> String {
        self.time.format(TIME_WIRE_FORMAT).to_string()
    }
}

fn validate_title(title: &str) -> Result<String, TaskValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Parses `HH:MM` (or `HH:MM:SS`) caller/wire input into a time-of-day.
pub fn parse_wire_time(value: &str) -> Result<NaiveTime, TaskValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTime);
    }
    NaiveTime::parse_from_str(trimmed, TIME_WIRE_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, TIME_WIRE_FORMAT_WITH_SECONDS))
        .map_err(|_| TaskValidationError::InvalidTime(trimmed.to_string()))
}

mod wire_time {
    use super::{parse_wire_time, TIME_WIRE_FORMAT};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_WIRE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse_wire_time(&value).map_err(serde::de::Error::custom)
    }
}
