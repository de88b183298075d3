//! Schema bootstrap and connection settings for the task table.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{self, Builder, ConnectionManager, CustomizeConnection};
use diesel::result::QueryResult;
use std::time::Duration;

/// Idempotent DDL creating the task table.
pub const CREATE_TASK_TABLE_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_task/up.sql");

/// Creates the task table when it does not exist yet.
///
/// # Errors
///
/// Returns the Diesel error raised while executing the DDL.
pub fn ensure_schema(connection: &mut PgConnection) -> QueryResult<()> {
    connection.batch_execute(CREATE_TASK_TABLE_SQL)
}

/// Sets the server-side `statement_timeout` on every pooled connection.
///
/// `PostgreSQL` aborts and rolls back any statement exceeding the limit, so a
/// call reported as timed out never commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementTimeout(Duration);

impl StatementTimeout {
    /// Creates a customizer applying `limit` to each new connection.
    #[must_use]
    pub const fn new(limit: Duration) -> Self {
        Self(limit)
    }

    fn sql(self) -> String {
        format!("SET statement_timeout = {}", self.0.as_millis())
    }
}

impl CustomizeConnection<PgConnection, r2d2::Error> for StatementTimeout {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), r2d2::Error> {
        connection
            .batch_execute(&self.sql())
            .map_err(r2d2::Error::QueryError)
    }
}

/// Returns a pool builder whose connections enforce `statement_timeout`.
#[must_use]
pub fn task_pool_builder(statement_timeout: Duration) -> Builder<ConnectionManager<PgConnection>> {
    r2d2::Pool::builder().connection_customizer(Box::new(StatementTimeout::new(statement_timeout)))
}
