//! Request payloads for task creation and editing.

use crate::task::domain::{TaskDetails, TaskDomainError, TaskId};

/// Request payload for creating a task from form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    price: String,
    is_paid: bool,
}

impl CreateTaskRequest {
    /// Creates a request from the raw service name and price text.
    #[must_use]
    pub fn new(name: impl Into<String>, price: impl Into<String>, is_paid: bool) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            is_paid,
        }
    }

    pub(super) fn details(&self) -> Result<TaskDetails, TaskDomainError> {
        TaskDetails::from_input(&self.name, &self.price, self.is_paid)
    }
}

/// Request payload for editing an active task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    name: String,
    price: String,
    is_paid: bool,
}

impl UpdateTaskRequest {
    /// Creates a request replacing the editable fields of a task.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        name: impl Into<String>,
        price: impl Into<String>,
        is_paid: bool,
    ) -> Self {
        Self {
            task_id,
            name: name.into(),
            price: price.into(),
            is_paid,
        }
    }

    /// Returns the task to edit.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub(super) fn details(&self) -> Result<TaskDetails, TaskDomainError> {
        TaskDetails::from_input(&self.name, &self.price, self.is_paid)
    }
}
