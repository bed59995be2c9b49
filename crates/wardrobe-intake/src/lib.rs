//! Wardrobe Intake
//!
//! Multi-step validation of a new clothing item before it reaches the
//! item store.
//!
//! # Flow
//!
//! ```text
//! type → shape → main colour (→ secondary colour) → material → formality
//!                                                        ↓ submit
//!                                     Rejected (draft kept) | Complete
//! ```
//!
//! Every option button toggles: pressing the selected option again clears
//! it. Submission normalizes the description with [`normalize_description`].
//!
//! # Example
//!
//! ```rust
//! use wardrobe_intake::{IntakeFlow, IntakePhase};
//! use wardrobe_taxonomy::{Category, Formality, Material, Subcategory};
//!
//! let mut flow = IntakeFlow::new();
//! flow.select_category(Category::Shoe)?;
//! flow.select_subcategory(Subcategory::Sandal)?;
//! flow.toggle_primary()?;
//! flow.select_material(Material::Leather)?;
//! flow.select_formality(Formality::Flex)?;
//! assert_eq!(flow.phase(), IntakePhase::FormalityChosen);
//!
//! let item = flow.submit()?;
//! assert_eq!(item.subcategory, Subcategory::Sandal);
//! # Ok::<(), wardrobe_intake::IntakeError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod draft;
pub mod error;
pub mod flow;
pub mod normalize;
pub mod phase;

pub use draft::{
    ColorChoice, ColorPicker, GarmentChoice, IntakeDraft, IntakeField, IntakeOption,
    DESCRIPTION_LIMIT,
};
pub use error::{IntakeError, IntakeResult};
pub use flow::IntakeFlow;
pub use normalize::normalize_description;
pub use phase::{allowed_transitions, validate_transition, IntakePhase};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for intake work
    pub use crate::{IntakeDraft, IntakeError, IntakeField, IntakeFlow, IntakePhase};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
