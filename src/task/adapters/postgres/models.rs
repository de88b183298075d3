//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Task description.
    pub description: String,
    /// Assignee; `NULL` in rows written without one.
    pub assignee: Option<String>,
    /// Deadline timestamp.
    pub deadline: DateTime<Utc>,
    /// Completion flag.
    pub is_done: bool,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task description.
    pub description: String,
    /// Assignee.
    pub assignee: Option<String>,
    /// Deadline timestamp.
    pub deadline: DateTime<Utc>,
    /// Completion flag, always `false` on insert.
    pub is_done: bool,
}

/// Changeset overwriting the mutable task fields in one statement.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskDetailsChangeset {
    /// Task description.
    pub description: String,
    /// Assignee.
    pub assignee: Option<String>,
    /// Deadline timestamp.
    pub deadline: DateTime<Utc>,
}
