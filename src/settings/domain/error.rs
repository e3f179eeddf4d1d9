//! Error types for settings validation.

use thiserror::Error;

/// Errors returned while building a settings update from raw values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The theme is neither `light` nor `dark`.
    #[error("unknown theme '{0}', expected light or dark")]
    UnknownTheme(String),

    /// The colour is not part of the palette.
    #[error("unknown colour preset '{0}'")]
    UnknownColor(String),
}
