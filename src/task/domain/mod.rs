//! Domain model for the task lifecycle.
//!
//! A task carries a description, an assignee, a calendar-date deadline and a
//! completion flag. Everything here is free of infrastructure concerns; the
//! storage representation of deadlines lives behind the [`Deadline`]
//! conversions.

mod deadline;
mod error;
mod ids;
mod task;

pub use deadline::Deadline;
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskDetails};
