//! Slot rendering
//!
//! Turns a slot reference into what should be drawn for it: the item's
//! picture on its primary colour, or its description while hovered.

use crate::layout::determine_layout;
use crate::slots::{OutfitId, OutfitSlots, SlotKind, SlotRef};
use serde::Serialize;
use wardrobe_index::IndexLookup;
use wardrobe_resolver::AssetRef;
use wardrobe_taxonomy::{Color, ItemId};

/// Pointer hover over a slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    item: Option<ItemId>,
    outfit: Option<OutfitId>,
}

impl HoverState {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the slot showing `item`, inside `outfit` if saved
    pub fn enter(&mut self, item: ItemId, outfit: Option<OutfitId>) {
        self.item = Some(item);
        self.outfit = outfit;
    }

    /// Pointer left a slot
    pub fn leave(&mut self) {
        self.item = None;
        self.outfit = None;
    }

    #[inline]
    #[must_use]
    pub fn item(&self) -> Option<ItemId> {
        self.item
    }

    #[inline]
    #[must_use]
    pub fn outfit(&self) -> Option<&OutfitId> {
        self.outfit.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self, item: ItemId) -> bool {
        self.item == Some(item)
    }
}

/// What to draw in one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlotVisual {
    /// Description text overlay
    Description { text: String },
    /// Item picture on its primary colour
    Image { asset: AssetRef, background: Color },
}

/// Where an outfit is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutfitView {
    /// The single freshly generated outfit
    Generated,
    /// One of several saved outfits
    Saved,
}

impl OutfitView {
    /// Whether hover effects apply to `outfit` in this view
    ///
    /// The saved view lists many outfits that may share items, so hover
    /// only counts inside the outfit under the pointer.
    #[must_use]
    pub fn is_hovered_outfit(self, hover: &HoverState, outfit: &OutfitSlots) -> bool {
        match self {
            Self::Generated => true,
            Self::Saved => hover.outfit() == Some(&outfit.id),
        }
    }
}

/// Render one slot
///
/// Returns `None` for an empty slot, for an id missing from the index, and
/// for an entry whose attributes never resolved to a picture.
pub fn render_slot<L: IndexLookup + ?Sized>(
    slot: SlotRef,
    index: &L,
    hover: &HoverState,
    is_hovered_outfit: bool,
) -> Option<SlotVisual> {
    let id = slot.item()?;
    let Some(entry) = index.lookup(id) else {
        tracing::debug!(item = %id, "Slot references item missing from index");
        return None;
    };

    if is_hovered_outfit && hover.is_over(id) && entry.has_description() {
        return Some(SlotVisual::Description {
            text: entry.description.clone(),
        });
    }

    entry.asset.clone().map(|asset| SlotVisual::Image {
        asset,
        background: entry.primary_color.clone(),
    })
}

/// One planned box with its visual
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSlot {
    pub kind: SlotKind,
    pub item: Option<ItemId>,
    pub visual: Option<SlotVisual>,
}

/// Render every planned box of `outfit`
pub fn render_outfit<L: IndexLookup + ?Sized>(
    outfit: &OutfitSlots,
    index: &L,
    hover: &HoverState,
    view: OutfitView,
) -> Vec<RenderedSlot> {
    let hovered = view.is_hovered_outfit(hover, outfit);
    determine_layout(outfit)
        .slots()
        .map(|kind| {
            let slot = outfit.slot(kind);
            RenderedSlot {
                kind,
                item: slot.item(),
                visual: render_slot(slot, index, hover, hovered),
            }
        })
        .collect()
}
