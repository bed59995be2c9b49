//! Index entries and closet filters

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use wardrobe_resolver::AssetRef;
use wardrobe_taxonomy::{Category, Color, TaxonomyError};

/// Resolved display data for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingIndexEntry {
    /// Picture to draw; `None` when the item's attributes are unresolvable
    pub asset: Option<AssetRef>,
    /// Background colour behind the picture
    pub primary_color: Color,
    pub category: Category,
    /// Normalized description, empty when the item has none
    pub description: String,
}

impl ClothingIndexEntry {
    /// Whether hovering should show text instead of the picture
    #[inline]
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Category filter of the closet view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[inline]
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(c) => Display::fmt(c, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}
