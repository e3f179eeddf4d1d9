//! Task entity and the user-editable task details.

use super::{Price, ServiceName, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// User-editable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    name: ServiceName,
    price: Price,
    is_paid: bool,
}

impl TaskDetails {
    /// Creates task details from validated values.
    #[must_use]
    pub const fn new(name: ServiceName, price: Price, is_paid: bool) -> Self {
        Self {
            name,
            price,
            is_paid,
        }
    }

    /// Creates task details from raw form input.
    ///
    /// The name is trimmed; the price text falls back to zero when it is
    /// empty, malformed or negative.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyServiceName`] when the name is empty
    /// after trimming.
    pub fn from_input(name: &str, price: &str, is_paid: bool) -> Result<Self, TaskDomainError> {
        Ok(Self::new(
            ServiceName::new(name)?,
            Price::parse_lenient(price),
            is_paid,
        ))
    }

    /// Returns the service name.
    #[must_use]
    pub const fn name(&self) -> &ServiceName {
        &self.name
    }

    /// Returns the price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns whether the task is paid.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        self.is_paid
    }
}

/// A recorded service job.
///
/// Lifecycle stamps are only written by [`super::TaskLedger`] moves, so
/// `archived_at` is present exactly while the task sits in the archive and
/// `deleted_at` exactly while it sits in the trash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    name: ServiceName,
    price: Price,
    is_paid: bool,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    archived_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    restored_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new active task stamped with the current time.
    #[must_use]
    pub fn new(details: TaskDetails, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            name: details.name,
            price: details.price,
            is_paid: details.is_paid,
            created_at: clock.utc(),
            archived_at: None,
            deleted_at: None,
            restored_at: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the service name.
    #[must_use]
    pub const fn name(&self) -> &ServiceName {
        &self.name
    }

    /// Returns the price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns whether the task has been paid.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        self.is_paid
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the task entered the archive, if it is archived.
    #[must_use]
    pub const fn archived_at(&self) -> Option<DateTime<Utc>> {
        self.archived_at
    }

    /// Returns when the task entered the trash, if it is trashed.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns when the task was last restored from the trash.
    #[must_use]
    pub const fn restored_at(&self) -> Option<DateTime<Utc>> {
        self.restored_at
    }

    /// Replaces the editable fields, keeping identity and timestamps.
    pub fn revise(&mut self, details: TaskDetails) {
        self.name = details.name;
        self.price = details.price;
        self.is_paid = details.is_paid;
    }

    /// Flips the payment status.
    pub const fn toggle_paid(&mut self) {
        self.is_paid = !self.is_paid;
    }

    pub(super) const fn mark_archived(&mut self, at: DateTime<Utc>) {
        self.archived_at = Some(at);
    }

    pub(super) const fn clear_archived(&mut self) {
        self.archived_at = None;
    }

    pub(super) const fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.archived_at = None;
        self.deleted_at = Some(at);
    }

    pub(super) const fn mark_restored(&mut self, at: DateTime<Utc>) {
        self.deleted_at = None;
        self.restored_at = Some(at);
    }

    /// Drops stamps that do not belong to the collection the task was
    /// loaded into.
    pub(super) const fn clear_foreign_stamps(&mut self, keep_archived: bool, keep_deleted: bool) {
        if !keep_archived {
            self.archived_at = None;
        }
        if !keep_deleted {
            self.deleted_at = None;
        }
    }
}
