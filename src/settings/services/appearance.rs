//! Visual theme derived from the settings record.

use minijinja::{Environment, context};
use thiserror::Error;

use crate::settings::domain::{ColorPreset, Settings, Theme};

const STYLESHEET_TEMPLATE: &str = "\
:root {
  color-scheme: {{ scheme }};
  --primary: {{ accent }};
  --ring: {{ accent }};
  --destructive: {{ accent }};
}";

/// Errors returned while rendering appearance output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppearanceError {
    /// The stylesheet template failed to render.
    #[error("failed to render appearance stylesheet: {0}")]
    Render(String),
}

/// Background mode and accent colour applied by the front-end.
///
/// Theme and primary colour fully determine the appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    dark_mode: bool,
    accent: ColorPreset,
}

impl Appearance {
    /// Derives the appearance for a settings record.
    #[must_use]
    pub const fn derive(settings: &Settings) -> Self {
        Self {
            dark_mode: matches!(settings.theme(), Theme::Dark),
            accent: settings.primary_color(),
        }
    }

    /// Returns `true` when the dark background is active.
    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Returns the accent colour.
    #[must_use]
    pub const fn accent(&self) -> ColorPreset {
        self.accent
    }

    /// Returns the class to put on the document root, if any.
    #[must_use]
    pub const fn root_class(&self) -> Option<&'static str> {
        if self.dark_mode { Some("dark") } else { None }
    }

    /// Renders the CSS custom properties for this appearance.
    ///
    /// # Errors
    ///
    /// Returns [`AppearanceError::Render`] when template rendering fails.
    pub fn to_css(&self) -> Result<String, AppearanceError> {
        let environment = Environment::new();
        let scheme = if self.dark_mode {
            Theme::Dark.as_str()
        } else {
            Theme::Light.as_str()
        };
        environment
            .render_str(
                STYLESHEET_TEMPLATE,
                context! { scheme => scheme, accent => self.accent.hsl() },
            )
            .map_err(|error| AppearanceError::Render(error.to_string()))
    }
}
