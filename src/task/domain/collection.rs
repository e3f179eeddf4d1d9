//! The three disjoint collections a task can belong to.

use super::ParseCollectionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection membership of a task, the sole representation of its
/// lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Working set of tasks that are neither archived nor deleted.
    Active,
    /// Completed or inactive tasks, reversible back to active.
    Archive,
    /// Soft-deleted tasks awaiting restore or permanent removal.
    Trash,
}

impl Collection {
    /// All collections in lookup precedence order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Archive, Self::Trash];

    /// Returns the canonical name of the collection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archive => "archive",
            Self::Trash => "trash",
        }
    }
}

impl TryFrom<&str> for Collection {
    type Error = ParseCollectionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "archive" => Ok(Self::Archive),
            "trash" => Ok(Self::Trash),
            _ => Err(ParseCollectionError(value.to_owned())),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
