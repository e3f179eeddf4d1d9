//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The service name is empty after trimming.
    #[error("service name must not be empty")]
    EmptyServiceName,
}

/// Error returned while parsing a price from user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid price: {0:?}")]
pub struct ParsePriceError(pub String);

/// Error returned while parsing a collection name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task collection: {0}")]
pub struct ParseCollectionError(pub String);
