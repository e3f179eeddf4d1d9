//! Domain model for appearance settings.

mod error;
mod palette;
mod settings;
mod theme;

pub use error::SettingsError;
pub use palette::ColorPreset;
pub use settings::{Settings, SettingsPatch};
pub use theme::Theme;
