//! Embed accent colours.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::ui::error::PlatformError;

/// A 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    /// Pure red, used by the fallback error embed.
    pub const RED: Self = Self(0x00FF_0000);

    /// Largest representable colour value.
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Creates a colour from a packed RGB value, if it fits in 24 bits.
    #[must_use]
    pub const fn from_rgb_value(value: u32) -> Option<Self> {
        if value > Self::MAX {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Returns the packed RGB value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for Color {
    type Err = PlatformError;

    /// Parses `#RRGGBB`, `0xRRGGBB` or bare `RRGGBB`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PlatformError::InvalidColor(raw.to_owned()));
        }

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| PlatformError::InvalidColor(raw.to_owned()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}
