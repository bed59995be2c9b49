//! Canonical assets and the catalog that locates them
//!
//! [`AssetKey`] is the closed set of garment pictures the resolver can
//! choose from. Where a picture actually lives is the business of an
//! [`AssetCatalog`], injected so tests and front ends can substitute their own.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Canonical garment picture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKey {
    /// Formal long-sleeve top
    ButtonDown,
    LongSleeve,
    ShortSleeve,
    NoSleeve,
    Skirt,
    DressPants,
    Jeans,
    Sweatpants,
    JeanShorts,
    Shorts,
    Dress,
    Suit,
    Romper,
    Sneakers,
    Boots,
    Sandals,
    Sweatshirt,
    Jacket,
    Cardigan,
    Hat,
    Scarf,
    Bag,
}

impl AssetKey {
    /// Every asset, in declaration order
    pub const ALL: [Self; 22] = [
        Self::ButtonDown,
        Self::LongSleeve,
        Self::ShortSleeve,
        Self::NoSleeve,
        Self::Skirt,
        Self::DressPants,
        Self::Jeans,
        Self::Sweatpants,
        Self::JeanShorts,
        Self::Shorts,
        Self::Dress,
        Self::Suit,
        Self::Romper,
        Self::Sneakers,
        Self::Boots,
        Self::Sandals,
        Self::Sweatshirt,
        Self::Jacket,
        Self::Cardigan,
        Self::Hat,
        Self::Scarf,
        Self::Bag,
    ];

    /// File stem of the bundled icon
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::ButtonDown => "buttondown",
            Self::LongSleeve => "longsleeve",
            Self::ShortSleeve => "shortsleeve",
            Self::NoSleeve => "nosleeve",
            Self::Skirt => "skirt",
            Self::DressPants => "dresspants",
            Self::Jeans => "jeans",
            Self::Sweatpants => "sweatpants",
            Self::JeanShorts => "jeanshorts",
            Self::Shorts => "shorts",
            Self::Dress => "dress",
            Self::Suit => "suit",
            Self::Romper => "romper",
            Self::Sneakers => "sneakers",
            Self::Boots => "boots",
            Self::Sandals => "sandals",
            Self::Sweatshirt => "sweatshirt",
            Self::Jacket => "jacket",
            Self::Cardigan => "cardigan",
            Self::Hat => "hat",
            Self::Scarf => "scarf",
            Self::Bag => "bag",
        }
    }
}

impl Display for AssetKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Opaque reference to an image, as handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    #[inline]
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AssetRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup table from canonical asset to image reference
///
/// Implementations must be total over [`AssetKey::ALL`] and free of side
/// effects; the resolver treats `lookup` as a pure function.
pub trait AssetCatalog: Send + Sync + fmt::Debug {
    /// Image reference for `key`
    fn lookup(&self, key: AssetKey) -> AssetRef;
}

impl<C: AssetCatalog + ?Sized> AssetCatalog for &C {
    fn lookup(&self, key: AssetKey) -> AssetRef {
        (**self).lookup(key)
    }
}

impl<C: AssetCatalog + ?Sized> AssetCatalog for std::sync::Arc<C> {
    fn lookup(&self, key: AssetKey) -> AssetRef {
        (**self).lookup(key)
    }
}

/// Catalog of bundled icons: `{base}/{stem}.{extension}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAssetCatalog {
    base: String,
    extension: String,
}

impl StaticAssetCatalog {
    /// Default location of the bundled clothing icons
    pub const DEFAULT_BASE: &'static str = "icons/clothes";

    /// Create catalog rooted at `base`
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            extension: "png".to_string(),
        }
    }

    /// Use a different file extension
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

impl Default for StaticAssetCatalog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE)
    }
}

impl AssetCatalog for StaticAssetCatalog {
    fn lookup(&self, key: AssetKey) -> AssetRef {
        if self.base.is_empty() {
            AssetRef::new(format!("{}.{}", key.file_stem(), self.extension))
        } else {
            AssetRef::new(format!("{}/{}.{}", self.base, key.file_stem(), self.extension))
        }
    }
}
