//! Application services for task lifecycle orchestration.

mod lifecycle;
mod requests;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleStore};
pub use requests::{CreateTaskRequest, UpdateTaskRequest};
