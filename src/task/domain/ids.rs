//! Identifier type for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier of a task row.
///
/// Identifiers are positive and never reused once a task is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i32);

impl TaskId {
    /// Wraps an identifier produced by the task store.
    #[must_use]
    pub const fn from_persisted(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl FromStr for TaskId {
    type Err = TaskDomainError;

    /// Parses a raw request value such as a form field.
    ///
    /// Surrounding whitespace is ignored. Empty input yields
    /// [`TaskDomainError::MissingTaskId`]; anything that is not a positive
    /// 32-bit integer yields [`TaskDomainError::InvalidTaskId`].
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::MissingTaskId);
        }
        match trimmed.parse::<i32>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(TaskDomainError::InvalidTaskId(raw.to_owned())),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
