//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskDetailsChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{Deadline, PersistedTaskData, Task, TaskDetails, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use std::time::Duration;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Upper bound applied to each storage call unless configured otherwise.
pub const DEFAULT_STATEMENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Extra time the client waits beyond the server-side limit, covering pool
/// checkout and the round trip of the cancellation itself.
const CLIENT_TIMEOUT_GRACE: Duration = Duration::from_millis(500);

/// `PostgreSQL`-backed task repository.
///
/// Statements are cancelled by the server once they exceed the
/// `statement_timeout` installed on pooled connections (see
/// [`task_pool_builder`](super::task_pool_builder)); the client-side bound
/// only triggers when the server stops responding.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
    statement_timeout: Duration,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self {
            pool,
            statement_timeout: DEFAULT_STATEMENT_TIMEOUT,
        }
    }

    /// Overrides the per-call timeout. It should match the limit the pool
    /// installs on its connections.
    #[must_use]
    pub const fn with_statement_timeout(mut self, timeout: Duration) -> Self {
        self.statement_timeout = timeout;
        self
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let limit = self.statement_timeout;
        let call = tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        });

        let outcome = tokio::time::timeout(limit.saturating_add(CLIENT_TIMEOUT_GRACE), call)
            .await
            .map_err(|_| TaskRepositoryError::Timeout(limit))?
            .map_err(TaskRepositoryError::persistence)?;
        outcome.map_err(|err| classify_cancellation(err, limit))
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, details: &TaskDetails) -> TaskRepositoryResult<TaskId> {
        let new_row = to_new_row(details);

        self.run_blocking(move |connection| {
            let id = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(tasks::id)
                .get_result::<i32>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(TaskId::from_persisted(id))
        })
        .await
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn update(&self, id: TaskId, details: &TaskDetails) -> TaskRepositoryResult<()> {
        let changeset = to_changeset(details);

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            require_affected(affected, id)
        })
        .await
    }

    async fn mark_done(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(id.value()))
                .set(tasks::is_done.eq(true))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            require_affected(affected, id)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            require_affected(affected, id)
        })
        .await
    }
}

/// Reports a statement cancelled by the server-side `statement_timeout` as
/// [`TaskRepositoryError::Timeout`]. The statement was rolled back.
fn classify_cancellation(err: TaskRepositoryError, limit: Duration) -> TaskRepositoryError {
    let cancelled = matches!(
        &err,
        TaskRepositoryError::Persistence(source) if matches!(
            source.downcast_ref::<diesel::result::Error>(),
            Some(diesel::result::Error::DatabaseError(_, info))
                if info.message().contains(STATEMENT_TIMEOUT_MESSAGE)
        )
    );
    if cancelled {
        return TaskRepositoryError::Timeout(limit);
    }
    err
}

/// Message `PostgreSQL` reports with SQLSTATE 57014 when `statement_timeout`
/// fires.
const STATEMENT_TIMEOUT_MESSAGE: &str = "canceling statement due to statement timeout";

/// Maps a zero-row write to [`TaskRepositoryError::NotFound`].
const fn require_affected(affected: usize, id: TaskId) -> TaskRepositoryResult<()> {
    if affected == 0 {
        return Err(TaskRepositoryError::NotFound(id));
    }
    Ok(())
}

fn to_new_row(details: &TaskDetails) -> NewTaskRow {
    NewTaskRow {
        description: details.description().to_owned(),
        assignee: Some(details.assignee().to_owned()),
        deadline: details.deadline().to_timestamp(),
        is_done: false,
    }
}

fn to_changeset(details: &TaskDetails) -> TaskDetailsChangeset {
    TaskDetailsChangeset {
        description: details.description().to_owned(),
        assignee: Some(details.assignee().to_owned()),
        deadline: details.deadline().to_timestamp(),
    }
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        description,
        assignee,
        deadline,
        is_done,
    } = row;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::from_persisted(id),
        description,
        assignee: assignee.unwrap_or_default(),
        deadline: Deadline::from_timestamp(deadline),
        is_done,
    })
}
