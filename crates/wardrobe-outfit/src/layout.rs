//! Layout planning
//!
//! Decides which slot boxes an outfit occupies. A full-body garment takes
//! the place of top and bottom; shoe, outerwear and accessory are
//! independent of it.

use crate::slots::{OutfitSlots, SlotKind};
use serde::Serialize;

/// Box in the outfit display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotBox {
    pub kind: SlotKind,
}

/// Boxes to draw for one outfit, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutPlan {
    /// Main column: fullbody and shoe, or top, bottom and shoe
    pub main: Vec<SlotBox>,
    /// Side column: outerwear and accessory
    pub side: Vec<SlotBox>,
}

impl LayoutPlan {
    /// Every planned slot, main column first
    pub fn slots(&self) -> impl Iterator<Item = SlotKind> + '_ {
        self.main.iter().chain(self.side.iter()).map(|b| b.kind)
    }

    #[must_use]
    pub fn contains(&self, kind: SlotKind) -> bool {
        self.slots().any(|k| k == kind)
    }

    /// Whether the full-body arrangement was chosen
    #[must_use]
    pub fn is_fullbody(&self) -> bool {
        self.main.iter().any(|b| b.kind == SlotKind::Fullbody)
    }
}

/// Plan the boxes for `slots`
#[must_use]
pub fn determine_layout(slots: &OutfitSlots) -> LayoutPlan {
    let main = if slots.fullbody.is_empty() {
        vec![SlotKind::Top, SlotKind::Bottom, SlotKind::Shoe]
    } else {
        vec![SlotKind::Fullbody, SlotKind::Shoe]
    };

    LayoutPlan {
        main: main.into_iter().map(|kind| SlotBox { kind }).collect(),
        side: [SlotKind::Outerwear, SlotKind::Accessory]
            .into_iter()
            .map(|kind| SlotBox { kind })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_taxonomy::ItemId;

    #[test]
    fn fullbody_suppresses_top_and_bottom() {
        let slots = OutfitSlots::new()
            .with_slot(SlotKind::Fullbody, ItemId::new(1))
            .with_slot(SlotKind::Top, ItemId::new(2))
            .with_slot(SlotKind::Bottom, ItemId::new(3));
        let plan = determine_layout(&slots);
        assert!(plan.is_fullbody());
        assert!(!plan.contains(SlotKind::Top));
        assert!(!plan.contains(SlotKind::Bottom));
        assert!(plan.contains(SlotKind::Shoe));
    }

    #[test]
    fn separates_plan_all_but_fullbody() {
        let plan = determine_layout(&OutfitSlots::new());
        let kinds: Vec<_> = plan.slots().collect();
        assert_eq!(
            kinds,
            vec![
                SlotKind::Top,
                SlotKind::Bottom,
                SlotKind::Shoe,
                SlotKind::Outerwear,
                SlotKind::Accessory
            ]
        );
    }
}
