//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::BoxError;
use super::cluster::{TemporaryDatabase, postgres_cluster, postgres_required, report_skip};
use diesel::prelude::*;
use diesel::r2d2::ConnectionManager;
use std::time::Duration;
use taskboard::task::adapters::postgres::{
    DEFAULT_STATEMENT_TIMEOUT, PostgresTaskRepository, TaskPgPool, ensure_schema,
    task_pool_builder,
};

/// Repository bound to a freshly created database.
///
/// Field order matters: the pool must close before the database is dropped.
pub struct PgTestContext {
    pub repository: PostgresTaskRepository,
    pub pool: TaskPgPool,
    database: TemporaryDatabase,
}

impl PgTestContext {
    /// Runs raw SQL against the test database.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the statement fails.
    pub fn execute_sql(&self, sql: &str) -> Result<usize, BoxError> {
        let mut conn = self.pool.get()?;
        Ok(diesel::sql_query(sql).execute(&mut conn)?)
    }

    /// Opens a dedicated connection outside the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn connect(&self) -> Result<PgConnection, BoxError> {
        Ok(PgConnection::establish(self.database.url())?)
    }

    /// Builds a second repository over the same database whose pool and
    /// client bound both use `limit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be built.
    pub fn repository_with_timeout(
        &self,
        limit: Duration,
    ) -> Result<PostgresTaskRepository, BoxError> {
        let pool = build_pool(self.database.url(), limit)?;
        Ok(PostgresTaskRepository::new(pool).with_statement_timeout(limit))
    }
}

fn build_pool(url: &str, statement_timeout: Duration) -> Result<TaskPgPool, BoxError> {
    let manager = ConnectionManager::<PgConnection>::new(url);
    Ok(task_pool_builder(statement_timeout)
        .max_size(2)
        .build(manager)?)
}

/// Creates a database with the task table and a repository over it.
///
/// Returns `Ok(None)` when no cluster is available and the test should skip;
/// the skip is reported on stderr.
///
/// # Errors
///
/// Returns an error if database creation or schema setup fails, or if no
/// cluster is available while `TASKBOARD_REQUIRE_POSTGRES` is set.
pub async fn setup_context() -> Result<Option<PgTestContext>, BoxError> {
    tokio::task::spawn_blocking(|| -> Result<Option<PgTestContext>, BoxError> {
        let cluster = match postgres_cluster() {
            Ok(cluster) => cluster,
            Err(reason) if postgres_required() => {
                return Err(format!("SKIP-TEST-CLUSTER not allowed: {reason}").into());
            }
            Err(reason) => {
                report_skip(reason);
                return Ok(None);
            }
        };
        let database = cluster.temporary_database()?;

        let pool = build_pool(database.url(), DEFAULT_STATEMENT_TIMEOUT)?;
        ensure_schema(&mut *pool.get()?)?;

        Ok(Some(PgTestContext {
            repository: PostgresTaskRepository::new(pool.clone()),
            pool,
            database,
        }))
    })
    .await?
}
