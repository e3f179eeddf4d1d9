//! Monetary amount charged for a service task.

use super::ParsePriceError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

/// Non-negative price held as whole cents.
///
/// Prices are entered as decimal text (`"45.50"`) and stored as an integer
/// number of cents so that totals never accumulate rounding error. Stored
/// records carry the price as a plain decimal number (`45.5`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(0);

    /// Creates a price from a number of cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the price in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Parses user input, falling back to zero when the text is empty,
    /// malformed or negative.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::ZERO)
    }

    /// Adds two prices, saturating at the numeric bound.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl FromStr for Price {
    type Err = ParsePriceError;

    /// Accepts `digits[.digits][e[+-]digits]` with an optional leading `+`.
    /// Fractions beyond two places are rounded half up to the nearest cent.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_cents(raw)
            .map(Self)
            .ok_or_else(|| ParsePriceError(raw.to_owned()))
    }
}

fn parse_cents(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let (mantissa, exponent_text) = unsigned.split_once(['e', 'E']).unwrap_or((unsigned, "0"));
    let exponent: i64 = exponent_text.parse().ok()?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let digits = whole
        .chars()
        .chain(fraction.chars())
        .map(|c| c.to_digit(10).map(u64::from))
        .collect::<Option<Vec<u64>>>()?;

    // Leading digits that make up whole cents once the exponent is applied.
    let cent_places = i64::try_from(whole.len())
        .ok()?
        .checked_add(exponent)?
        .checked_add(2)?;
    let Ok(kept) = usize::try_from(cent_places) else {
        return Some(0);
    };

    let truncated = digits
        .iter()
        .take(kept)
        .try_fold(0_u64, |acc, &digit| acc.checked_mul(10)?.checked_add(digit))?;
    let padding = u32::try_from(kept.saturating_sub(digits.len())).ok()?;
    let cents = if truncated == 0 {
        0
    } else {
        truncated.checked_mul(10_u64.checked_pow(padding)?)?
    };
    if digits.get(kept).is_some_and(|&digit| digit >= 5) {
        cents.checked_add(1)
    } else {
        Some(cents)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number = Number::from_str(&self.to_string())
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    /// Reads a stored decimal number. Negative amounts load as zero, matching
    /// how form input is treated.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = Number::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&number.to_string()))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0.div_euclid(100), self.0.rem_euclid(100))
    }
}
