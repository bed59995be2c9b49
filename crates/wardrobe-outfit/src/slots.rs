//! Outfit slots
//!
//! An outfit is six named slots, each holding zero or one item reference.
//! On the wire an empty slot is the sentinel `"-1"`; any negative or
//! unparsable value is read as empty.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use wardrobe_taxonomy::wire::WireCode;
use wardrobe_taxonomy::{Category, ItemId};

/// Wire sentinel for an empty slot
pub const EMPTY_SLOT: &str = "-1";

/// Content of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "WireCode", into = "String")]
pub enum SlotRef {
    #[default]
    Empty,
    Item(ItemId),
}

impl SlotRef {
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    #[must_use]
    pub fn item(self) -> Option<ItemId> {
        match self {
            Self::Empty => None,
            Self::Item(id) => Some(id),
        }
    }
}

impl From<WireCode> for SlotRef {
    fn from(value: WireCode) -> Self {
        value
            .non_negative()
            .map_or(Self::Empty, |id| Self::Item(ItemId::new(id)))
    }
}

impl From<SlotRef> for String {
    fn from(value: SlotRef) -> Self {
        value.to_string()
    }
}

impl From<Option<ItemId>> for SlotRef {
    fn from(value: Option<ItemId>) -> Self {
        value.map_or(Self::Empty, Self::Item)
    }
}

impl From<ItemId> for SlotRef {
    fn from(value: ItemId) -> Self {
        Self::Item(value)
    }
}

impl Display for SlotRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_SLOT),
            Self::Item(id) => Display::fmt(id, f),
        }
    }
}

/// Identifier of a stored outfit
///
/// Empty for an outfit that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "WireCode", into = "String")]
pub struct OutfitId(String);

impl OutfitId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the store has assigned this id
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        !self.0.is_empty() && self.0 != EMPTY_SLOT
    }
}

impl From<WireCode> for OutfitId {
    fn from(value: WireCode) -> Self {
        Self(value.to_string())
    }
}

impl From<OutfitId> for String {
    fn from(value: OutfitId) -> Self {
        value.0
    }
}

impl Display for OutfitId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named position in an outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Top,
    Bottom,
    Outerwear,
    Fullbody,
    Accessory,
    Shoe,
}

impl SlotKind {
    pub const ALL: [Self; 6] = [
        Self::Top,
        Self::Bottom,
        Self::Outerwear,
        Self::Fullbody,
        Self::Accessory,
        Self::Shoe,
    ];

    /// Category of items this slot holds
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::Top => Category::Top,
            Self::Bottom => Category::Bottom,
            Self::Outerwear => Category::Outerwear,
            Self::Fullbody => Category::FullBody,
            Self::Accessory => Category::Accessory,
            Self::Shoe => Category::Shoe,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Outerwear => "outerwear",
            Self::Fullbody => "fullbody",
            Self::Accessory => "accessory",
            Self::Shoe => "shoe",
        }
    }
}

impl Display for SlotKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated or saved outfit
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutfitSlots {
    pub id: OutfitId,
    pub top: SlotRef,
    pub bottom: SlotRef,
    pub outerwear: SlotRef,
    pub fullbody: SlotRef,
    pub accessory: SlotRef,
    pub shoe: SlotRef,
}

impl OutfitSlots {
    /// Create outfit with every slot empty
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_slot(mut self, kind: SlotKind, slot: impl Into<SlotRef>) -> Self {
        *self.slot_mut(kind) = slot.into();
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: OutfitId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn slot(&self, kind: SlotKind) -> SlotRef {
        match kind {
            SlotKind::Top => self.top,
            SlotKind::Bottom => self.bottom,
            SlotKind::Outerwear => self.outerwear,
            SlotKind::Fullbody => self.fullbody,
            SlotKind::Accessory => self.accessory,
            SlotKind::Shoe => self.shoe,
        }
    }

    pub fn slot_mut(&mut self, kind: SlotKind) -> &mut SlotRef {
        match kind {
            SlotKind::Top => &mut self.top,
            SlotKind::Bottom => &mut self.bottom,
            SlotKind::Outerwear => &mut self.outerwear,
            SlotKind::Fullbody => &mut self.fullbody,
            SlotKind::Accessory => &mut self.accessory,
            SlotKind::Shoe => &mut self.shoe,
        }
    }

    /// Whether every slot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        SlotKind::ALL.iter().all(|k| self.slot(*k).is_empty())
    }

    /// Clear every slot and the id
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace wholesale with `other`
    pub fn replace_with(&mut self, other: Self) {
        *self = other;
    }

    /// Whether any slot references `id`
    #[must_use]
    pub fn references(&self, id: ItemId) -> bool {
        SlotKind::ALL.iter().any(|k| self.slot(*k).item() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_negatives_are_empty() {
        let slots: OutfitSlots = serde_json::from_str(
            r#"{"id":"7","top":"-1","bottom":-3,"outerwear":"x","fullbody":"12","shoe":4}"#,
        )
        .unwrap();
        assert_eq!(slots.id.as_str(), "7");
        assert!(slots.top.is_empty());
        assert!(slots.bottom.is_empty());
        assert!(slots.outerwear.is_empty());
        assert!(slots.accessory.is_empty());
        assert_eq!(slots.fullbody, SlotRef::Item(ItemId::new(12)));
        assert_eq!(slots.shoe, SlotRef::Item(ItemId::new(4)));
    }

    #[test]
    fn serializes_sentinel() {
        let slots = OutfitSlots::new().with_slot(SlotKind::Shoe, ItemId::new(3));
        let json = serde_json::to_value(&slots).unwrap();
        assert_eq!(json["top"], "-1");
        assert_eq!(json["shoe"], "3");
    }

    #[test]
    fn reset_and_replace() {
        let mut slots = OutfitSlots::new()
            .with_id(OutfitId::new("2"))
            .with_slot(SlotKind::Top, ItemId::new(1));
        assert!(!slots.is_empty());
        assert!(slots.references(ItemId::new(1)));

        slots.reset();
        assert!(slots.is_empty());
        assert!(!slots.id.is_assigned());

        slots.replace_with(OutfitSlots::new().with_slot(SlotKind::Accessory, ItemId::new(5)));
        assert_eq!(slots.accessory.item(), Some(ItemId::new(5)));
        assert!(slots.top.is_empty());
    }
}
