//! Step definitions for task lifecycle behaviour tests.

pub mod then;
pub mod when;
pub mod world;
