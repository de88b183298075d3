//! Repository port for task persistence.

use crate::task::domain::{Task, TaskDetails, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every mutation is a single atomic statement in the backing store.
/// Operations addressing a task by identifier report
/// [`TaskRepositoryError::NotFound`] when no row was affected, rather than
/// succeeding silently.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new, not yet completed task and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on constraint violations
    /// or storage failures.
    async fn insert(&self, details: &TaskDetails) -> TaskRepositoryResult<TaskId>;

    /// Returns all tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the query fails.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the query fails.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Overwrites description, assignee and deadline of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, id: TaskId, details: &TaskDetails) -> TaskRepositoryResult<()>;

    /// Marks an existing task done. Repeating the call succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn mark_done(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The storage call did not complete in time. Writes reported this way
    /// have not been applied.
    #[error("persistence call timed out after {0:?}")]
    Timeout(Duration),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
