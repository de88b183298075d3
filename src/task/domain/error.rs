//! Error types for task domain validation and parsing.

use super::Deadline;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing or validating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The assignee is empty after trimming.
    #[error("task assignee must not be empty")]
    EmptyAssignee,

    /// No task identifier was supplied.
    #[error("task id is required")]
    MissingTaskId,

    /// The task identifier is not a positive integer.
    #[error("invalid task id '{0}', expected a positive integer")]
    InvalidTaskId(String),

    /// The deadline is not an ISO calendar date.
    #[error("invalid deadline '{0}', expected YYYY-MM-DD")]
    InvalidDeadline(String),

    /// The deadline falls before the current calendar date.
    #[error("deadline {deadline} has already passed (today is {today})")]
    DeadlinePassed {
        /// Requested deadline.
        deadline: Deadline,
        /// Calendar date the request was validated against.
        today: NaiveDate,
    },
}
