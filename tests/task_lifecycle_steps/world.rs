//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use servicetask::storage::{adapters::InMemoryKeyValueStore, ports::StorageConfig};
use servicetask::task::{
    domain::{Task, TaskId},
    services::{TaskLifecycleError, TaskLifecycleStore},
};

/// Store type used by the BDD world.
pub type TestStore = TaskLifecycleStore<InMemoryKeyValueStore, DefaultClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub store: TestStore,
    pub original: Option<Task>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = TaskLifecycleStore::open(
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(DefaultClock),
            StorageConfig::default(),
        );

        Self {
            store,
            original: None,
            last_result: None,
        }
    }

    /// Returns the identifier of the task the scenario is following.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn current_id(&self) -> Result<TaskId, eyre::Report> {
        self.original
            .as_ref()
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }

    /// Records the outcome of a lifecycle operation.
    pub fn record(&mut self, result: Result<Task, TaskLifecycleError>) {
        self.last_result = Some(result);
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
