//! Appearance preferences for servicetask.
//!
//! Settings are independent of task data and only affect presentation: the
//! light or dark theme and an accent colour chosen from a fixed palette.
//!
//! - Domain types in [`domain`]
//! - Derived presentation values in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
