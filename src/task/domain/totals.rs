//! Read-only summaries derived from the task collections.

use super::{Price, Task};

/// Payment summary over the active collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskTotals {
    /// Sum of prices of unpaid tasks.
    pub pending: Price,
    /// Sum of prices of paid tasks.
    pub paid: Price,
    /// Number of unpaid tasks.
    pub pending_count: usize,
    /// Number of paid tasks.
    pub paid_count: usize,
}

impl TaskTotals {
    /// Summarises the given tasks.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |totals, task| {
            if task.is_paid() {
                Self {
                    paid: totals.paid.saturating_add(task.price()),
                    paid_count: totals.paid_count.saturating_add(1),
                    ..totals
                }
            } else {
                Self {
                    pending: totals.pending.saturating_add(task.price()),
                    pending_count: totals.pending_count.saturating_add(1),
                    ..totals
                }
            }
        })
    }
}

/// Number of tasks held in each collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionCounts {
    /// Tasks in the active collection.
    pub active: usize,
    /// Tasks in the archive.
    pub archive: usize,
    /// Tasks in the trash.
    pub trash: usize,
}
