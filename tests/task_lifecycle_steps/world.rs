//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskId,
    services::{CreateTaskRequest, TaskLifecycleResult, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub service: TestTaskService,
    pub pending_request: Option<CreateTaskRequest>,
    pub last_task_id: Option<TaskId>,
    pub last_create_result: Option<TaskLifecycleResult<TaskId>>,
    pub last_action_result: Option<TaskLifecycleResult<()>>,
}

impl TaskLifecycleWorld {
    /// Creates a world with an empty store and no pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            pending_request: None,
            last_task_id: None,
            last_create_result: None,
            last_action_result: None,
        }
    }

    /// Returns the identifier of the task the scenario operates on.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been stored yet.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.last_task_id
            .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
