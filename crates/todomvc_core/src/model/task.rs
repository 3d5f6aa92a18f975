//! Task record.
//!
//! # Responsibility
//! - Define the record persisted as `{id, title, completed}`.
//! - Validate the record before it enters the live list.
//!
//! # Invariants
//! - `id` is non-empty and unique across the live list.
//! - `title` is trimmed and never blank.

use super::id::new_id;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque correlation key shared by a task and its rendered row.
pub type TaskId = String;

/// Validation failures for [`Task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyId,
    BlankTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
            Self::BlankTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Creates an open task with a generated id.
    ///
    /// Returns `None` when `raw_title` trims to nothing.
    pub fn new(raw_title: &str) -> Option<Self> {
        Self::with_id(new_id(), raw_title).ok()
    }

    /// Creates an open task with a caller-provided id.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is empty.
    /// - `BlankTitle` when `raw_title` trims to nothing.
    pub fn with_id(id: impl Into<TaskId>, raw_title: &str) -> Result<Self, TaskValidationError> {
        let task = Self {
            id: id.into(),
            title: raw_title.trim().to_string(),
            completed: false,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks the record invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        Ok(())
    }

    /// Returns whether the task still needs doing.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
