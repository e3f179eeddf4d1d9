//! The settings record and typed partial updates.

use super::{ColorPreset, SettingsError, Theme};
use serde::{Deserialize, Serialize};

/// Appearance preferences.
///
/// Missing fields in a stored record fall back to their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    theme: Theme,
    primary_color: ColorPreset,
}

impl Settings {
    /// Creates a settings record.
    #[must_use]
    pub const fn new(theme: Theme, primary_color: ColorPreset) -> Self {
        Self {
            theme,
            primary_color,
        }
    }

    /// Returns the background mode.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the accent colour.
    #[must_use]
    pub const fn primary_color(&self) -> ColorPreset {
        self.primary_color
    }

    /// Merges the fields present in `patch`.
    pub const fn apply(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(primary_color) = patch.primary_color {
            self.primary_color = primary_color;
        }
    }
}

/// Partial settings update; absent fields are left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    theme: Option<Theme>,
    primary_color: Option<ColorPreset>,
}

impl SettingsPatch {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            theme: None,
            primary_color: None,
        }
    }

    /// Builds a patch from raw values, validating enum and palette
    /// membership before anything is merged.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownTheme`] or
    /// [`SettingsError::UnknownColor`] when a value is outside its set.
    pub fn parse(theme: Option<&str>, primary_color: Option<&str>) -> Result<Self, SettingsError> {
        Ok(Self {
            theme: theme.map(Theme::try_from).transpose()?,
            primary_color: primary_color.map(ColorPreset::try_from).transpose()?,
        })
    }

    /// Sets the theme.
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Sets the accent colour.
    #[must_use]
    pub const fn with_primary_color(mut self, primary_color: ColorPreset) -> Self {
        self.primary_color = Some(primary_color);
        self
    }

    /// Returns the theme to apply, if any.
    #[must_use]
    pub const fn theme(&self) -> Option<Theme> {
        self.theme
    }

    /// Returns the accent colour to apply, if any.
    #[must_use]
    pub const fn primary_color(&self) -> Option<ColorPreset> {
        self.primary_color
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.theme.is_none() && self.primary_color.is_none()
    }
}
