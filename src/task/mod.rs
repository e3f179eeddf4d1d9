//! Task lifecycle management for servicetask.
//!
//! A task is created into the active list, may be edited and toggled between
//! paid and pending while active, and moves between the active, archive and
//! trash collections until it is restored or permanently deleted. Collection
//! membership is the only representation of lifecycle state. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration and persistence in [`services`]

pub mod domain;
pub mod services;
