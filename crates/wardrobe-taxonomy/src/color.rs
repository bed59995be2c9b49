//! Garment colors
//!
//! Colors travel as CSS hex strings. The store uses the literal string
//! `"null"` for an absent secondary color; [`secondary_color`] maps that
//! sentinel to `Option::None`.

use crate::error::{TaxonomyError, TaxonomyResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Sentinel the store uses for "no color"
pub const NULL_COLOR: &str = "null";

/// A color string such as `#3f6492`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Parse and normalize a `#rgb` or `#rrggbb` hex color to lowercase `#rrggbb`
    pub fn hex(s: &str) -> TaxonomyResult<Self> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| TaxonomyError::InvalidColor(s.to_string()))?;

        let expanded = match digits.len() {
            6 => digits.to_ascii_lowercase(),
            3 => digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_lowercase(),
            _ => return Err(TaxonomyError::InvalidColor(s.to_string())),
        };

        Ok(Self(format!("#{expanded}")))
    }

    /// Wrap a color string from a trusted source without validation
    #[inline]
    #[must_use]
    pub fn from_raw(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Color picker default
    #[inline]
    #[must_use]
    pub fn white() -> Self {
        Self("#ffffff".to_string())
    }

    /// Hex text as stored
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serde adapter for an optional color encoded with the `"null"` sentinel
pub mod secondary_color {
    use super::{Color, NULL_COLOR};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `None` as `"null"`
    pub fn serialize<S: Serializer>(value: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(color) => serializer.serialize_str(color.as_str()),
            None => serializer.serialize_str(NULL_COLOR),
        }
    }

    /// Deserialize `"null"`, `""` or JSON `null` as `None`
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Color>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .filter(|s| !s.is_empty() && s != NULL_COLOR)
            .map(Color::from_raw))
    }
}
