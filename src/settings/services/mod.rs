//! Presentation values derived from settings.

mod appearance;

pub use appearance::{Appearance, AppearanceError};
