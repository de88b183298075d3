//! Application services for task lifecycle orchestration.

mod lifecycle;
mod validation;
mod view;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
    UpdateTaskRequest,
};
pub use validation::{validate_create, validate_update};
pub use view::TaskView;
