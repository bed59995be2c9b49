//! Clothing item records
//!
//! [`ClothingAttributes`] is the store's source of truth for one garment.
//! [`Description`] is stored separately and joined by id.

use crate::attributes::{Formality, Material};
use crate::category::{Category, Subcategory};
use crate::color::{secondary_color, Color};
use crate::error::TaxonomyError;
use crate::wire::WireCode;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Identifier of a clothing item, unique per user
///
/// Serialized in string form, which is also the index key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "String")]
pub struct ItemId(u64);

impl ItemId {
    /// Wrap a raw id
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw id
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| TaxonomyError::InvalidId(s.to_string()))
    }
}

impl TryFrom<WireCode> for ItemId {
    type Error = TaxonomyError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        value
            .non_negative()
            .map(Self)
            .ok_or_else(|| TaxonomyError::InvalidId(value.to_string()))
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.to_string()
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Attributes of one stored clothing item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingAttributes {
    /// Store-assigned id
    pub id: ItemId,
    /// Garment category
    pub category: Category,
    /// Shape within `category`
    pub subcategory: Subcategory,
    /// Main colour
    #[serde(rename = "primary")]
    pub primary_color: Color,
    /// Accent colour; the wire's null sentinel decodes to `None`
    #[serde(
        rename = "secondary",
        alias = "accent",
        with = "secondary_color",
        default
    )]
    pub secondary_color: Option<Color>,
    /// Fabric family
    pub material: Material,
    /// Dress code
    pub formality: Formality,
}

impl ClothingAttributes {
    /// Whether category and subcategory agree
    #[inline]
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.category.admits(self.subcategory)
    }
}

/// Free-text description attached to an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Id of the described item, in string form
    pub id: String,
    /// Normalized text
    #[serde(rename = "desc")]
    pub text: String,
}

impl Description {
    /// Create description for an item
    #[must_use]
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            text: text.into(),
        }
    }

    /// Whether this description belongs to `id`
    #[inline]
    #[must_use]
    pub fn describes(&self, id: ItemId) -> bool {
        self.id == id.to_string()
    }
}

/// A validated item ready to be added; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClothing {
    /// Garment category
    pub category: Category,
    /// Shape within `category`
    pub subcategory: Subcategory,
    /// Main colour
    #[serde(rename = "primary")]
    pub primary_color: Color,
    /// Accent colour, if any
    #[serde(rename = "secondary", with = "secondary_color", default)]
    pub secondary_color: Option<Color>,
    /// Fabric family
    pub material: Material,
    /// Dress code
    pub formality: Formality,
    /// Normalized description, possibly empty
    pub description: String,
}

impl NewClothing {
    /// Attach the id assigned by the store
    #[must_use]
    pub fn with_id(&self, id: ItemId) -> ClothingAttributes {
        ClothingAttributes {
            id,
            category: self.category,
            subcategory: self.subcategory,
            primary_color: self.primary_color.clone(),
            secondary_color: self.secondary_color.clone(),
            material: self.material,
            formality: self.formality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_store_payload() {
        let json = r##"{
            "id": "7",
            "category": "1",
            "subcategory": "4",
            "formality": "0",
            "primary": "#112233",
            "accent": "null",
            "material": "3"
        }"##;
        let item: ClothingAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::new(7));
        assert_eq!(item.category, Category::Bottom);
        assert_eq!(item.subcategory, Subcategory::Pants);
        assert_eq!(item.formality, Formality::Formal);
        assert_eq!(item.material, Material::Denim);
        assert_eq!(item.secondary_color, None);
        assert!(item.is_consistent());
    }

    #[test]
    fn encodes_sentinel_for_missing_secondary() {
        let item = ClothingAttributes {
            id: ItemId::new(2),
            category: Category::Top,
            subcategory: Subcategory::NoSleeve,
            primary_color: Color::white(),
            secondary_color: None,
            material: Material::Other,
            formality: Formality::Flex,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], "2");
        assert_eq!(value["secondary"], "null");
        assert_eq!(value["category"], 0);
    }

    #[test]
    fn inconsistent_pair_detected() {
        let item = ClothingAttributes {
            id: ItemId::new(1),
            category: Category::Shoe,
            subcategory: Subcategory::Scarf,
            primary_color: Color::white(),
            secondary_color: None,
            material: Material::Other,
            formality: Formality::Flex,
        };
        assert!(!item.is_consistent());
    }

    #[test]
    fn description_matches_by_string_id() {
        let d = Description::new(ItemId::new(12), "Red Scarf");
        assert!(d.describes(ItemId::new(12)));
        assert!(!d.describes(ItemId::new(1)));
    }

    #[test]
    fn negative_id_rejected() {
        assert!(serde_json::from_str::<ItemId>("-1").is_err());
        assert!("abc".parse::<ItemId>().is_err());
    }
}
