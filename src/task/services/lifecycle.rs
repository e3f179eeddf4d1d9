//! The task lifecycle store: single source of truth for tasks and settings.

use mockable::Clock;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{CreateTaskRequest, UpdateTaskRequest};
use crate::settings::domain::{Settings, SettingsPatch};
use crate::settings::services::Appearance;
use crate::storage::ports::{KeyValueStore, StorageConfig, StorageKey};
use crate::task::domain::{
    Collection, CollectionCounts, Task, TaskDomainError, TaskId, TaskLedger, TaskTotals,
};

const ACTIVE_ONLY: &[Collection] = &[Collection::Active];
const ARCHIVE_ONLY: &[Collection] = &[Collection::Archive];
const TRASH_ONLY: &[Collection] = &[Collection::Trash];
const TRASHABLE: &[Collection] = &[Collection::Active, Collection::Archive];

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The task is not in any of the collections the operation acts on.
    #[error("task {task_id} not found in {}", describe(.searched))]
    NotFound {
        /// Requested task.
        task_id: TaskId,
        /// Collections that were searched.
        searched: &'static [Collection],
    },
}

/// Result type for task lifecycle operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

fn describe(collections: &[Collection]) -> String {
    collections
        .iter()
        .map(|collection| collection.as_str())
        .collect::<Vec<_>>()
        .join(" or ")
}

const fn not_found(task_id: TaskId, searched: &'static [Collection]) -> TaskLifecycleError {
    TaskLifecycleError::NotFound { task_id, searched }
}

const fn storage_key_for(collection: Collection) -> StorageKey {
    match collection {
        Collection::Active => StorageKey::Tasks,
        Collection::Archive => StorageKey::Archive,
        Collection::Trash => StorageKey::Trash,
    }
}

/// Owner of the task collections and the settings record.
///
/// Every mutation is applied to memory in one step and then written to the
/// key-value store before the call returns. Write failures are logged and
/// counted but never undo the in-memory change, which stays authoritative
/// for the session.
pub struct TaskLifecycleStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    storage: Arc<S>,
    clock: Arc<C>,
    config: StorageConfig,
    ledger: TaskLedger,
    settings: Settings,
    persistence_failures: usize,
}

impl<S, C> TaskLifecycleStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Opens a store, loading any previously persisted state.
    ///
    /// Absent values start empty or at their defaults. Values that cannot
    /// be read or parsed are logged and replaced by defaults.
    #[must_use]
    pub fn open(storage: Arc<S>, clock: Arc<C>, config: StorageConfig) -> Self {
        let active: Vec<Task> =
            load_value(&*storage, &config, StorageKey::Tasks).unwrap_or_default();
        let archive: Vec<Task> =
            load_value(&*storage, &config, StorageKey::Archive).unwrap_or_default();
        let trash: Vec<Task> =
            load_value(&*storage, &config, StorageKey::Trash).unwrap_or_default();
        let settings: Settings =
            load_value(&*storage, &config, StorageKey::Settings).unwrap_or_default();

        let (ledger, dropped) = TaskLedger::from_persisted(active, archive, trash);
        for task_id in dropped {
            warn!(%task_id, "dropping task stored in more than one collection");
        }

        let counts = ledger.counts();
        info!(
            namespace = %config.namespace,
            active = counts.active,
            archive = counts.archive,
            trash = counts.trash,
            "opened task store"
        );

        Self {
            storage,
            clock,
            config,
            ledger,
            settings,
            persistence_failures: 0,
        }
    }

    /// Creates a task and prepends it to the active collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the name is empty after
    /// trimming.
    pub fn create(&mut self, request: &CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let details = request.details()?;
        let task = loop {
            let candidate = Task::new(details.clone(), &*self.clock);
            if self.ledger.insert_active(candidate.clone()) {
                break candidate;
            }
            warn!(
                task_id = %candidate.id(),
                "generated task identifier already in use, retrying"
            );
        };
        self.persist(&[StorageKey::Tasks]);
        debug!(task_id = %task.id(), name = %task.name(), "created task");
        Ok(task)
    }

    /// Replaces name, price and payment status of an active task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the name is empty after
    /// trimming, or [`TaskLifecycleError::NotFound`] when the task is not
    /// active.
    pub fn update(&mut self, request: &UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let details = request.details()?;
        let task_id = request.task_id();
        let task = self
            .ledger
            .active_task_mut(task_id)
            .ok_or_else(|| not_found(task_id, ACTIVE_ONLY))?;
        task.revise(details);
        let updated = task.clone();
        self.persist(&[StorageKey::Tasks]);
        debug!(%task_id, "updated task");
        Ok(updated)
    }

    /// Flips the payment status of an active task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task is not active.
    pub fn toggle_paid(&mut self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let task = self
            .ledger
            .active_task_mut(task_id)
            .ok_or_else(|| not_found(task_id, ACTIVE_ONLY))?;
        task.toggle_paid();
        let toggled = task.clone();
        self.persist(&[StorageKey::Tasks]);
        debug!(%task_id, is_paid = toggled.is_paid(), "toggled payment status");
        Ok(toggled)
    }

    /// Moves an active task to the archive.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task is not active.
    pub fn archive(&mut self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let archived = self
            .ledger
            .archive(task_id, &*self.clock)
            .cloned()
            .ok_or_else(|| not_found(task_id, ACTIVE_ONLY))?;
        self.persist(&[StorageKey::Tasks, StorageKey::Archive]);
        debug!(%task_id, "archived task");
        Ok(archived)
    }

    /// Moves an active or archived task to the trash.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task is neither
    /// active nor archived.
    pub fn trash(&mut self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let (source, trashed) = self
            .ledger
            .trash(task_id, &*self.clock)
            .map(|(source, task)| (source, task.clone()))
            .ok_or_else(|| not_found(task_id, TRASHABLE))?;
        self.persist(&[storage_key_for(source), StorageKey::Trash]);
        debug!(%task_id, %source, "moved task to trash");
        Ok(trashed)
    }

    /// Moves a trashed task back to the active collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task is not in the
    /// trash.
    pub fn restore_from_trash(&mut self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let restored = self
            .ledger
            .restore_from_trash(task_id, &*self.clock)
            .cloned()
            .ok_or_else(|| not_found(task_id, TRASH_ONLY))?;
        self.persist(&[StorageKey::Tasks, StorageKey::Trash]);
        debug!(%task_id, "restored task from trash");
        Ok(restored)
    }

    /// Moves an archived task back to the active collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task is not
    /// archived.
    pub fn restore_from_archive(&mut self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let restored = self
            .ledger
            .restore_from_archive(task_id)
            .cloned()
            .ok_or_else(|| not_found(task_id, ARCHIVE_ONLY))?;
        self.persist(&[StorageKey::Tasks, StorageKey::Archive]);
        debug!(%task_id, "restored task from archive");
        Ok(restored)
    }

    /// Removes a trashed task irreversibly and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task is not in the
    /// trash.
    pub fn permanently_delete(&mut self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let removed = self
            .ledger
            .purge(task_id)
            .ok_or_else(|| not_found(task_id, TRASH_ONLY))?;
        self.persist(&[StorageKey::Trash]);
        debug!(%task_id, "permanently deleted task");
        Ok(removed)
    }

    /// Removes every task from the trash, returning how many were purged.
    pub fn empty_trash(&mut self) -> usize {
        let purged = self.ledger.empty_trash();
        self.persist(&[StorageKey::Trash]);
        debug!(purged, "emptied trash");
        purged
    }

    /// Merges a validated partial update into the settings record.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Settings {
        self.settings.apply(patch);
        self.persist(&[StorageKey::Settings]);
        debug!(
            theme = %self.settings.theme(),
            primary_color = %self.settings.primary_color(),
            "updated settings"
        );
        self.settings
    }

    /// Returns the tasks of a collection, newest first.
    #[must_use]
    pub fn tasks_in(&self, collection: Collection) -> &[Task] {
        self.ledger.tasks(collection)
    }

    /// Returns the active tasks, newest first.
    #[must_use]
    pub fn active(&self) -> &[Task] {
        self.tasks_in(Collection::Active)
    }

    /// Returns the archived tasks, newest first.
    #[must_use]
    pub fn archived(&self) -> &[Task] {
        self.tasks_in(Collection::Archive)
    }

    /// Returns the trashed tasks, newest first.
    #[must_use]
    pub fn trashed(&self) -> &[Task] {
        self.tasks_in(Collection::Trash)
    }

    /// Returns a task together with the collection holding it.
    #[must_use]
    pub fn find(&self, task_id: TaskId) -> Option<(Collection, &Task)> {
        self.ledger.find(task_id)
    }

    /// Returns the read-only ledger snapshot.
    #[must_use]
    pub const fn ledger(&self) -> &TaskLedger {
        &self.ledger
    }

    /// Returns the settings record.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the appearance derived from the current settings.
    #[must_use]
    pub const fn appearance(&self) -> Appearance {
        Appearance::derive(&self.settings)
    }

    /// Returns paid and pending totals over the active collection.
    #[must_use]
    pub fn totals(&self) -> TaskTotals {
        self.ledger.totals()
    }

    /// Returns the number of tasks per collection.
    #[must_use]
    pub fn counts(&self) -> CollectionCounts {
        self.ledger.counts()
    }

    /// Returns how many writes have failed since the store was opened.
    #[must_use]
    pub const fn persistence_failures(&self) -> usize {
        self.persistence_failures
    }

    fn persist(&mut self, keys: &[StorageKey]) {
        for &key in keys {
            let storage_key = self.config.key(key);
            let encoded = match key {
                StorageKey::Tasks => serde_json::to_string(self.ledger.tasks(Collection::Active)),
                StorageKey::Archive => {
                    serde_json::to_string(self.ledger.tasks(Collection::Archive))
                }
                StorageKey::Trash => serde_json::to_string(self.ledger.tasks(Collection::Trash)),
                StorageKey::Settings => serde_json::to_string(&self.settings),
            };
            let outcome = encoded.map_err(|err| err.to_string()).and_then(|value| {
                self.storage
                    .save(&storage_key, &value)
                    .map_err(|err| err.to_string())
            });
            if let Err(reason) = outcome {
                self.persistence_failures = self.persistence_failures.saturating_add(1);
                warn!(
                    key = %storage_key,
                    %reason,
                    "failed to persist value, keeping in-memory state"
                );
            }
        }
    }
}

fn load_value<T: DeserializeOwned>(
    storage: &impl KeyValueStore,
    config: &StorageConfig,
    key: StorageKey,
) -> Option<T> {
    let storage_key = config.key(key);
    let raw = storage
        .load(&storage_key)
        .inspect_err(|err| {
            warn!(key = %storage_key, error = %err, "failed to read stored value, using default");
        })
        .ok()
        .flatten()?;
    serde_json::from_str(&raw)
        .inspect_err(|err| {
            warn!(key = %storage_key, error = %err, "stored value is malformed, using default");
        })
        .ok()
}
