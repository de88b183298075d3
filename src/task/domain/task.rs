//! Task aggregate root and related lifecycle types.

use super::{Deadline, TaskDomainError, TaskId};
use serde::{Deserialize, Serialize};

/// The mutable fields of a task, validated for creation and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    description: String,
    assignee: String,
    deadline: Deadline,
}

impl TaskDetails {
    /// Creates validated task details.
    ///
    /// Description and assignee are trimmed before being stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] or
    /// [`TaskDomainError::EmptyAssignee`] when the respective field is empty
    /// after trimming.
    pub fn new(
        description: impl Into<String>,
        assignee: impl Into<String>,
        deadline: Deadline,
    ) -> Result<Self, TaskDomainError> {
        let raw_description = description.into();
        let raw_assignee = assignee.into();
        let trimmed_description = raw_description.trim();
        if trimmed_description.is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }
        let trimmed_assignee = raw_assignee.trim();
        if trimmed_assignee.is_empty() {
            return Err(TaskDomainError::EmptyAssignee);
        }

        Ok(Self {
            description: trimmed_description.to_owned(),
            assignee: trimmed_assignee.to_owned(),
            deadline,
        })
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the free-text assignee.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    details: TaskDetails,
    is_done: bool,
}

/// Parameter object for reconstructing a persisted task.
///
/// Persisted values are trusted as stored; rows written before assignees were
/// required may carry an empty assignee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted description.
    pub description: String,
    /// Persisted assignee, empty when the column is `NULL`.
    pub assignee: String,
    /// Persisted deadline.
    pub deadline: Deadline,
    /// Persisted completion flag.
    pub is_done: bool,
}

impl Task {
    /// Creates a freshly inserted, not yet completed task.
    #[must_use]
    pub const fn new(id: TaskId, details: TaskDetails) -> Self {
        Self {
            id,
            details,
            is_done: false,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            details: TaskDetails {
                description: data.description,
                assignee: data.assignee,
                deadline: data.deadline,
            },
            is_done: data.is_done,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the mutable task fields.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.details.description()
    }

    /// Returns the free-text assignee.
    #[must_use]
    pub fn assignee(&self) -> &str {
        self.details.assignee()
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.details.deadline()
    }

    /// Returns whether the task has been marked done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_done
    }

    /// Replaces description, assignee and deadline, keeping the completion
    /// flag.
    pub fn replace_details(&mut self, details: TaskDetails) {
        self.details = details;
    }

    /// Marks the task done. Marking an already completed task is a no-op.
    pub const fn mark_done(&mut self) {
        self.is_done = true;
    }
}
