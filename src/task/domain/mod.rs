//! Domain model for the service task lifecycle.
//!
//! The task domain models task details, the three disjoint task collections
//! and the moves between them, while keeping persistence concerns outside of
//! the domain boundary.

mod collection;
mod error;
mod ids;
mod ledger;
mod price;
mod task;
mod totals;

pub use collection::Collection;
pub use error::{ParseCollectionError, ParsePriceError, TaskDomainError};
pub use ids::{ServiceName, TaskId};
pub use ledger::TaskLedger;
pub use price::Price;
pub use task::{Task, TaskDetails};
pub use totals::{CollectionCounts, TaskTotals};
