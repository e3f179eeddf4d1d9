//! The three task collections and the moves between them.

use super::{Collection, CollectionCounts, Task, TaskId, TaskTotals};
use mockable::Clock;

/// Owner of the active, archive and trash collections.
///
/// Each collection is ordered newest-first by insertion. A task identifier
/// appears in at most one collection; every move removes the task from its
/// source and prepends it to its destination within a single `&mut` borrow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskLedger {
    active: Vec<Task>,
    archive: Vec<Task>,
    trash: Vec<Task>,
}

impl TaskLedger {
    /// Creates a ledger with three empty collections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from persisted collections.
    ///
    /// A task whose identifier was already seen in an earlier collection
    /// (active, then archive, then trash) or earlier in the same collection
    /// is dropped. Stamps that do not belong to a task's collection are
    /// cleared. Returns the ledger and the identifiers that were dropped.
    #[must_use]
    pub fn from_persisted(
        active: Vec<Task>,
        archive: Vec<Task>,
        trash: Vec<Task>,
    ) -> (Self, Vec<TaskId>) {
        let mut ledger = Self::new();
        let mut dropped = Vec::new();
        for (collection, tasks) in Collection::ALL.into_iter().zip([active, archive, trash]) {
            for mut task in tasks {
                if ledger.locate(task.id()).is_some() {
                    dropped.push(task.id());
                    continue;
                }
                task.clear_foreign_stamps(
                    collection == Collection::Archive,
                    collection == Collection::Trash,
                );
                ledger.collection_mut(collection).push(task);
            }
        }
        (ledger, dropped)
    }

    /// Returns the tasks of a collection, newest first.
    #[must_use]
    pub fn tasks(&self, collection: Collection) -> &[Task] {
        match collection {
            Collection::Active => &self.active,
            Collection::Archive => &self.archive,
            Collection::Trash => &self.trash,
        }
    }

    /// Returns the collection currently holding the task.
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<Collection> {
        self.find(id).map(|(collection, _)| collection)
    }

    /// Returns the task together with the collection holding it.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<(Collection, &Task)> {
        Collection::ALL.into_iter().find_map(|collection| {
            self.tasks(collection)
                .iter()
                .find(|task| task.id() == id)
                .map(|task| (collection, task))
        })
    }

    /// Prepends a new task to the active collection.
    ///
    /// Returns `false` without inserting when the identifier is already
    /// present in any collection.
    pub fn insert_active(&mut self, task: Task) -> bool {
        if self.locate(task.id()).is_some() {
            return false;
        }
        self.active.insert(0, task);
        true
    }

    /// Returns a mutable reference to an active task.
    pub fn active_task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.active.iter_mut().find(|task| task.id() == id)
    }

    /// Moves a task from active to archive, stamping `archived_at`.
    pub fn archive(&mut self, id: TaskId, clock: &impl Clock) -> Option<&Task> {
        let mut task = take(&mut self.active, id)?;
        task.mark_archived(clock.utc());
        prepend(&mut self.archive, task)
    }

    /// Moves a task from active or archive to trash, stamping `deleted_at`
    /// and clearing `archived_at`.
    ///
    /// The active collection is searched first. Returns the source
    /// collection alongside the trashed task.
    pub fn trash(&mut self, id: TaskId, clock: &impl Clock) -> Option<(Collection, &Task)> {
        let (source, mut task) = take(&mut self.active, id)
            .map(|task| (Collection::Active, task))
            .or_else(|| take(&mut self.archive, id).map(|task| (Collection::Archive, task)))?;
        task.mark_deleted(clock.utc());
        prepend(&mut self.trash, task).map(|task| (source, task))
    }

    /// Moves a task from trash back to active, clearing `deleted_at` and
    /// stamping `restored_at`.
    ///
    /// The task always returns to the active collection, even when it was
    /// archived before it was trashed.
    pub fn restore_from_trash(&mut self, id: TaskId, clock: &impl Clock) -> Option<&Task> {
        let mut task = take(&mut self.trash, id)?;
        task.mark_restored(clock.utc());
        prepend(&mut self.active, task)
    }

    /// Moves a task from archive back to active, clearing `archived_at`.
    pub fn restore_from_archive(&mut self, id: TaskId) -> Option<&Task> {
        let mut task = take(&mut self.archive, id)?;
        task.clear_archived();
        prepend(&mut self.active, task)
    }

    /// Removes a task from the trash for good.
    pub fn purge(&mut self, id: TaskId) -> Option<Task> {
        take(&mut self.trash, id)
    }

    /// Removes every task from the trash, returning how many were purged.
    pub fn empty_trash(&mut self) -> usize {
        let purged = self.trash.len();
        self.trash.clear();
        purged
    }

    /// Returns the number of tasks per collection.
    #[must_use]
    pub fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            active: self.active.len(),
            archive: self.archive.len(),
            trash: self.trash.len(),
        }
    }

    /// Returns paid and pending totals over the active collection.
    #[must_use]
    pub fn totals(&self) -> TaskTotals {
        TaskTotals::from_tasks(&self.active)
    }

    fn collection_mut(&mut self, collection: Collection) -> &mut Vec<Task> {
        match collection {
            Collection::Active => &mut self.active,
            Collection::Archive => &mut self.archive,
            Collection::Trash => &mut self.trash,
        }
    }
}

fn take(tasks: &mut Vec<Task>, id: TaskId) -> Option<Task> {
    let position = tasks.iter().position(|task| task.id() == id)?;
    Some(tasks.remove(position))
}

fn prepend(tasks: &mut Vec<Task>, task: Task) -> Option<&Task> {
    tasks.insert(0, task);
    tasks.first()
}
