//! Service layer for task creation, editing, completion and removal.

use super::{TaskView, validate_create, validate_update};
use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task from raw form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    description: String,
    assignee: String,
    deadline: String,
}

impl CreateTaskRequest {
    /// Creates a request. The deadline is an ISO `YYYY-MM-DD` date.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        assignee: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            assignee: assignee.into(),
            deadline: deadline.into(),
        }
    }
}

/// Request payload for overwriting the fields of an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    description: String,
    assignee: String,
    deadline: String,
}

impl UpdateTaskRequest {
    /// Creates a request. The deadline is an ISO `YYYY-MM-DD` date.
    #[must_use]
    pub fn new(
        id: TaskId,
        description: impl Into<String>,
        assignee: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            assignee: assignee.into(),
            deadline: deadline.into(),
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns `true` when the caller supplied invalid input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns `true` when the addressed task does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::NotFound(_)))
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Holds no task state of its own; every call is a round trip to the
/// repository.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates and stores a new task, returning its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when validation fails, in which
    /// case nothing is stored, or [`TaskLifecycleError::Repository`] when the
    /// insert fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<TaskId> {
        let now = self.clock.local();
        let details = validate_create(
            &request.description,
            &request.assignee,
            &request.deadline,
            &now,
        )?;
        let id = self.repository.insert(&details).await?;
        tracing::info!(task_id = %id, deadline = %details.deadline(), "task created");
        Ok(id)
    }

    /// Lists all tasks formatted for display.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the query fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<TaskView>> {
        let tasks = self.repository.list().await?;
        Ok(tasks.iter().map(TaskView::for_display).collect())
    }

    /// Fetches a task formatted for its edit form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<TaskView> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        Ok(TaskView::for_edit(&task))
    }

    /// Overwrites description, assignee and deadline of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when validation fails or
    /// [`TaskLifecycleError::Repository`] when the task does not exist or
    /// the update fails.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<()> {
        let details =
            validate_update(&request.description, &request.assignee, &request.deadline)?;
        self.repository.update(request.id, &details).await?;
        tracing::info!(task_id = %request.id, "task updated");
        Ok(())
    }

    /// Marks a task done. Completing a finished task again succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist or the update fails.
    pub async fn mark_done(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.mark_done(id).await?;
        tracing::info!(task_id = %id, "task marked done");
        Ok(())
    }

    /// Permanently deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist or the delete fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }
}
