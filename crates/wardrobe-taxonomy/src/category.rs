//! Category and subcategory enumerations
//!
//! Every [`Subcategory`] belongs to exactly one [`Category`]; the three
//! subcategories of each category form a fixed, non-overlapping set.

use crate::error::{TaxonomyError, TaxonomyResult};
use crate::wire::WireCode;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Top-level garment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "u8")]
pub enum Category {
    /// Shirts and blouses
    Top,
    /// Pants, shorts, skirts
    Bottom,
    /// Footwear
    Shoe,
    /// One-piece garments that replace a top and bottom
    FullBody,
    /// Layers worn over a top
    Outerwear,
    /// Hats, scarves, bags
    Accessory,
}

impl Category {
    /// All categories in code order
    pub const ALL: [Self; 6] = [
        Self::Top,
        Self::Bottom,
        Self::Shoe,
        Self::FullBody,
        Self::Outerwear,
        Self::Accessory,
    ];

    /// Integer wire code
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode from integer wire code
    pub fn from_code(code: u8) -> TaxonomyResult<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(TaxonomyError::UnknownCode {
                kind: "category",
                code: u64::from(code),
            })
    }

    /// Stable kebab-case name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoe => "shoe",
            Self::FullBody => "full-body",
            Self::Outerwear => "outerwear",
            Self::Accessory => "accessory",
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Shoe => "Shoe",
            Self::FullBody => "Full Body",
            Self::Outerwear => "Outerwear",
            Self::Accessory => "Accessory",
        }
    }

    /// Valid subcategories, in the order the intake form offers them
    #[must_use]
    pub fn subcategories(self) -> [Subcategory; 3] {
        type S = Subcategory;
        match self {
            Self::Top => [S::LongSleeve, S::ShortSleeve, S::NoSleeve],
            Self::Bottom => [S::Pants, S::Shorts, S::Skirt],
            Self::FullBody => [S::Dress, S::Romper, S::Suit],
            Self::Shoe => [S::Sneaker, S::Boot, S::Sandal],
            Self::Outerwear => [S::Jacket, S::Sweatshirt, S::Cardigan],
            Self::Accessory => [S::Headwear, S::Scarf, S::Bag],
        }
    }

    /// Whether `sub` is a valid subcategory of this category
    #[inline]
    #[must_use]
    pub fn admits(self, sub: Subcategory) -> bool {
        sub.category() == self
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|c| normalize_name(c.as_str()) == wanted)
            .ok_or_else(|| TaxonomyError::unknown_name("category", s))
    }
}

impl TryFrom<WireCode> for Category {
    type Error = TaxonomyError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        Self::from_code(value.into_code("category")?)
    }
}

impl From<Category> for u8 {
    fn from(value: Category) -> Self {
        value.code()
    }
}

/// Garment shape within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "u8")]
pub enum Subcategory {
    /// Top: long sleeves
    LongSleeve,
    /// Top: short sleeves
    ShortSleeve,
    /// Top: sleeveless
    NoSleeve,
    /// Bottom: skirt
    Skirt,
    /// Bottom: full-length pants
    Pants,
    /// Bottom: shorts
    Shorts,
    /// Shoe: sneakers
    Sneaker,
    /// Shoe: boots
    Boot,
    /// Shoe: sandals
    Sandal,
    /// Full body: dress
    Dress,
    /// Full body: suit
    Suit,
    /// Full body: romper or jumpsuit
    Romper,
    /// Outerwear: sweatshirt or hoodie
    Sweatshirt,
    /// Outerwear: jacket or coat
    Jacket,
    /// Outerwear: cardigan
    Cardigan,
    /// Accessory: hats and caps
    Headwear,
    /// Accessory: scarf
    Scarf,
    /// Accessory: bag
    Bag,
}

impl Subcategory {
    /// All subcategories in code order
    pub const ALL: [Self; 18] = [
        Self::LongSleeve,
        Self::ShortSleeve,
        Self::NoSleeve,
        Self::Skirt,
        Self::Pants,
        Self::Shorts,
        Self::Sneaker,
        Self::Boot,
        Self::Sandal,
        Self::Dress,
        Self::Suit,
        Self::Romper,
        Self::Sweatshirt,
        Self::Jacket,
        Self::Cardigan,
        Self::Headwear,
        Self::Scarf,
        Self::Bag,
    ];

    /// Integer wire code
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode from integer wire code
    pub fn from_code(code: u8) -> TaxonomyResult<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(TaxonomyError::UnknownCode {
                kind: "subcategory",
                code: u64::from(code),
            })
    }

    /// The single category this subcategory belongs to
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::LongSleeve | Self::ShortSleeve | Self::NoSleeve => Category::Top,
            Self::Skirt | Self::Pants | Self::Shorts => Category::Bottom,
            Self::Sneaker | Self::Boot | Self::Sandal => Category::Shoe,
            Self::Dress | Self::Suit | Self::Romper => Category::FullBody,
            Self::Sweatshirt | Self::Jacket | Self::Cardigan => Category::Outerwear,
            Self::Headwear | Self::Scarf | Self::Bag => Category::Accessory,
        }
    }

    /// Stable kebab-case name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LongSleeve => "long-sleeve",
            Self::ShortSleeve => "short-sleeve",
            Self::NoSleeve => "no-sleeve",
            Self::Skirt => "skirt",
            Self::Pants => "pants",
            Self::Shorts => "shorts",
            Self::Sneaker => "sneaker",
            Self::Boot => "boot",
            Self::Sandal => "sandal",
            Self::Dress => "dress",
            Self::Suit => "suit",
            Self::Romper => "romper",
            Self::Sweatshirt => "sweatshirt",
            Self::Jacket => "jacket",
            Self::Cardigan => "cardigan",
            Self::Headwear => "headwear",
            Self::Scarf => "scarf",
            Self::Bag => "bag",
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LongSleeve => "Long Sleeve",
            Self::ShortSleeve => "Short Sleeve",
            Self::NoSleeve => "No Sleeve",
            Self::Skirt => "Skirt",
            Self::Pants => "Pants",
            Self::Shorts => "Shorts",
            Self::Sneaker => "Sneaker",
            Self::Boot => "Boot",
            Self::Sandal => "Sandal",
            Self::Dress => "Dress",
            Self::Suit => "Suit",
            Self::Romper => "Romper",
            Self::Sweatshirt => "Sweatshirt",
            Self::Jacket => "Jacket",
            Self::Cardigan => "Cardigan",
            Self::Headwear => "Headwear",
            Self::Scarf => "Scarf",
            Self::Bag => "Bag",
        }
    }
}

impl Display for Subcategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subcategory {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|c| normalize_name(c.as_str()) == wanted)
            .ok_or_else(|| TaxonomyError::unknown_name("subcategory", s))
    }
}

impl TryFrom<WireCode> for Subcategory {
    type Error = TaxonomyError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        Self::from_code(value.into_code("subcategory")?)
    }
}

impl From<Subcategory> for u8 {
    fn from(value: Subcategory) -> Self {
        value.code()
    }
}

/// Lowercase and drop separators so "Full Body", "full-body" and "FullBody" compare equal
pub(crate) fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
