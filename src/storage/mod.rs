//! Durable key-value persistence for servicetask.
//!
//! The lifecycle store writes its collections and settings through the
//! [`ports::KeyValueStore`] port after every mutation and reads them back
//! once when it is opened.
//!
//! - Port contracts and configuration in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod ports;

#[cfg(test)]
mod tests;
