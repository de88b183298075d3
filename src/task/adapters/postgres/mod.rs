//! `PostgreSQL` adapters for task lifecycle persistence.

mod models;
mod repository;
mod schema;
mod setup;

pub use repository::{DEFAULT_STATEMENT_TIMEOUT, PostgresTaskRepository, TaskPgPool};
pub use setup::{CREATE_TASK_TABLE_SQL, StatementTimeout, ensure_schema, task_pool_builder};
