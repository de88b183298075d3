//! Presentation-ready task data consumed by templates and JSON responses.

use crate::task::domain::Task;
use serde::{Deserialize, Serialize};

/// Flattened task with its deadline rendered for a particular view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: i32,
    /// Task description.
    pub description: String,
    /// Free-text assignee.
    pub assignee: String,
    /// Formatted deadline.
    pub deadline: String,
    /// Completion flag.
    pub is_done: bool,
}

impl TaskView {
    /// Formats a task for listing views, deadline as `DD-MM-YYYY`.
    #[must_use]
    pub fn for_display(task: &Task) -> Self {
        Self::with_deadline(task, task.deadline().display_format())
    }

    /// Formats a task for pre-filling an edit form, deadline as
    /// `YYYY-MM-DD`.
    #[must_use]
    pub fn for_edit(task: &Task) -> Self {
        Self::with_deadline(task, task.deadline().edit_format())
    }

    fn with_deadline(task: &Task, deadline: String) -> Self {
        Self {
            id: task.id().value(),
            description: task.description().to_owned(),
            assignee: task.assignee().to_owned(),
            deadline,
            is_done: task.is_done(),
        }
    }
}
