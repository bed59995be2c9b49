//! Per-category image rules
//!
//! Category dispatches to a category-specific rule. Each rule consults only
//! the inputs it needs:
//!
//! | Category  | Inputs consulted         |
//! |-----------|--------------------------|
//! | Top       | subcategory, formality   |
//! | Bottom    | subcategory, material, formality |
//! | FullBody, Shoe, Outerwear, Accessory | subcategory |
//!
//! A subcategory that does not belong to the category yields `None`.

use crate::asset::AssetKey;
use wardrobe_taxonomy::{Category, Formality, Material, Subcategory};

/// Classify attributes to a canonical asset
///
/// Pure and deterministic. Total over valid (category, subcategory) pairs,
/// `None` for every other pair.
#[must_use]
pub fn resolve_key(
    category: Category,
    subcategory: Subcategory,
    material: Material,
    formality: Formality,
) -> Option<AssetKey> {
    match category {
        Category::Top => top(subcategory, formality),
        Category::Bottom => bottom(subcategory, material, formality),
        Category::FullBody => full_body(subcategory),
        Category::Shoe => shoe(subcategory),
        Category::Outerwear => outerwear(subcategory),
        Category::Accessory => accessory(subcategory),
    }
}

// Second discriminant is formality, not material.
fn top(subcategory: Subcategory, formality: Formality) -> Option<AssetKey> {
    match subcategory {
        Subcategory::LongSleeve if formality.is_formal() => Some(AssetKey::ButtonDown),
        Subcategory::LongSleeve => Some(AssetKey::LongSleeve),
        Subcategory::ShortSleeve => Some(AssetKey::ShortSleeve),
        Subcategory::NoSleeve => Some(AssetKey::NoSleeve),
        _ => None,
    }
}

fn bottom(subcategory: Subcategory, material: Material, formality: Formality) -> Option<AssetKey> {
    match subcategory {
        Subcategory::Skirt => Some(AssetKey::Skirt),
        Subcategory::Pants if formality.is_formal() => Some(AssetKey::DressPants),
        Subcategory::Pants if material.is_jean_like() => Some(AssetKey::Jeans),
        Subcategory::Pants => Some(AssetKey::Sweatpants),
        Subcategory::Shorts if material.is_jean_like() => Some(AssetKey::JeanShorts),
        Subcategory::Shorts => Some(AssetKey::Shorts),
        _ => None,
    }
}

fn full_body(subcategory: Subcategory) -> Option<AssetKey> {
    match subcategory {
        Subcategory::Dress => Some(AssetKey::Dress),
        Subcategory::Suit => Some(AssetKey::Suit),
        Subcategory::Romper => Some(AssetKey::Romper),
        _ => None,
    }
}

fn shoe(subcategory: Subcategory) -> Option<AssetKey> {
    match subcategory {
        Subcategory::Sneaker => Some(AssetKey::Sneakers),
        Subcategory::Boot => Some(AssetKey::Boots),
        Subcategory::Sandal => Some(AssetKey::Sandals),
        _ => None,
    }
}

fn outerwear(subcategory: Subcategory) -> Option<AssetKey> {
    match subcategory {
        Subcategory::Sweatshirt => Some(AssetKey::Sweatshirt),
        Subcategory::Jacket => Some(AssetKey::Jacket),
        Subcategory::Cardigan => Some(AssetKey::Cardigan),
        _ => None,
    }
}

fn accessory(subcategory: Subcategory) -> Option<AssetKey> {
    match subcategory {
        Subcategory::Headwear => Some(AssetKey::Hat),
        Subcategory::Scarf => Some(AssetKey::Scarf),
        Subcategory::Bag => Some(AssetKey::Bag),
        _ => None,
    }
}
