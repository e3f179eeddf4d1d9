//! Fixed palette of accent colours.

use super::SettingsError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Named accent colour from the fixed palette.
///
/// Stored as a `{ name, hsl, hex }` swatch; either that object or the bare
/// palette name is accepted when reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorPreset {
    /// Red, the default accent.
    #[default]
    Red,
    /// Orange.
    Orange,
    /// Amber.
    Amber,
    /// Green.
    Green,
    /// Teal.
    Teal,
    /// Blue.
    Blue,
    /// Violet.
    Violet,
    /// Pink.
    Pink,
}

impl ColorPreset {
    /// Every preset in palette order.
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Orange,
        Self::Amber,
        Self::Green,
        Self::Teal,
        Self::Blue,
        Self::Violet,
        Self::Pink,
    ];

    /// Returns the display name of the preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Amber => "Amber",
            Self::Green => "Green",
            Self::Teal => "Teal",
            Self::Blue => "Blue",
            Self::Violet => "Violet",
            Self::Pink => "Pink",
        }
    }

    /// Returns the colour as a space-separated HSL triple.
    #[must_use]
    pub const fn hsl(self) -> &'static str {
        match self {
            Self::Red => "0 84% 60%",
            Self::Orange => "24 95% 53%",
            Self::Amber => "43 96% 56%",
            Self::Green => "142 71% 45%",
            Self::Teal => "173 80% 40%",
            Self::Blue => "217 91% 60%",
            Self::Violet => "263 70% 50%",
            Self::Pink => "330 81% 60%",
        }
    }

    /// Returns the colour as a hex string.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Red => "#ef4444",
            Self::Orange => "#f97316",
            Self::Amber => "#f59e0b",
            Self::Green => "#22c55e",
            Self::Teal => "#14b8a6",
            Self::Blue => "#3b82f6",
            Self::Violet => "#7c3aed",
            Self::Pink => "#ec4899",
        }
    }
}

impl TryFrom<&str> for ColorPreset {
    type Error = SettingsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| SettingsError::UnknownColor(value.to_owned()))
    }
}

impl fmt::Display for ColorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for ColorPreset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut swatch = serializer.serialize_struct("ColorPreset", 3)?;
        swatch.serialize_field("name", self.name())?;
        swatch.serialize_field("hsl", self.hsl())?;
        swatch.serialize_field("hex", self.hex())?;
        swatch.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPreset {
    Name(String),
    Swatch { name: String },
}

impl<'de> Deserialize<'de> for ColorPreset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (StoredPreset::Name(name) | StoredPreset::Swatch { name }) =
            StoredPreset::deserialize(deserializer)?;
        Self::try_from(name.as_str()).map_err(<D::Error as serde::de::Error>::custom)
    }
}
