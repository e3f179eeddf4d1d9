//! Servicetask: a single-user ledger for repair and service jobs.
//!
//! This crate records service tasks with their price and payment status and
//! moves them through a soft-delete lifecycle (active, archive, trash). All
//! state is held in memory and written through to a local key-value store
//! after every mutation.
//!
//! # Architecture
//!
//! Servicetask follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`task`]: Task ledger and the lifecycle store
//! - [`settings`]: Theme and accent colour preferences
//! - [`storage`]: Key-value persistence port and adapters

pub mod settings;
pub mod storage;
pub mod task;
