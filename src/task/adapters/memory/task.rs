//! In-memory repository for task lifecycle tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskDetails, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are allocated from a monotonic counter, so deleted ids are
/// never handed out again.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i32,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Looks up a stored task for mutation.
fn existing_task(state: &mut InMemoryTaskState, id: TaskId) -> TaskRepositoryResult<&mut Task> {
    state
        .tasks
        .get_mut(&id)
        .ok_or(TaskRepositoryError::NotFound(id))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, details: &TaskDetails) -> TaskRepositoryResult<TaskId> {
        let mut state = self.write()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other("task id sequence exhausted"))
        })?;
        state.last_id = next;

        let id = TaskId::from_persisted(next);
        state.tasks.insert(id, Task::new(id, details.clone()));
        Ok(id)
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn update(&self, id: TaskId, details: &TaskDetails) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        existing_task(&mut state, id)?.replace_details(details.clone());
        Ok(())
    }

    async fn mark_done(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        existing_task(&mut state, id)?.mark_done();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .map(drop)
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
