//! Wardrobe Outfit Model
//!
//! Slots of a generated or saved outfit, the layout that decides which of
//! them are shown, and per-slot rendering against the closet index.
//!
//! - [`OutfitSlots`]: six slots, each empty or holding an item id
//! - [`determine_layout`]: full-body garments replace top and bottom
//! - [`render_slot`] / [`render_outfit`]: picture or hovered description
//! - [`SavedOutfits`]: local list with optimistic removal

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod layout;
pub mod render;
pub mod saved;
pub mod slots;

pub use layout::{determine_layout, LayoutPlan, SlotBox};
pub use render::{render_outfit, render_slot, HoverState, OutfitView, RenderedSlot, SlotVisual};
pub use saved::{SaveOutcome, SavedOutfits};
pub use slots::{OutfitId, OutfitSlots, SlotKind, SlotRef, EMPTY_SLOT};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
