//! Wardrobe Taxonomy
//!
//! Closed enumerations that describe a clothing item, and the item records
//! exchanged with the item store.
//!
//! # Overview
//!
//! - **Category / Subcategory**: garment kind; each category owns exactly
//!   three subcategories
//! - **Material / Formality**: secondary attributes consulted by some
//!   image rules
//! - **ClothingAttributes / Description**: store records, joined by id
//!
//! # Example
//!
//! ```rust
//! use wardrobe_taxonomy::{Category, Subcategory};
//!
//! assert!(Category::Bottom.admits(Subcategory::Skirt));
//! assert!(!Category::Top.admits(Subcategory::Skirt));
//! assert_eq!(Subcategory::Jacket.category(), Category::Outerwear);
//! ```

#![warn(missing_docs)]

pub mod attributes;
pub mod category;
pub mod color;
pub mod context;
pub mod error;
pub mod item;
pub mod wire;

// Re-exports
pub use attributes::{Formality, Material};
pub use category::{Category, Subcategory};
pub use color::{Color, NULL_COLOR};
pub use context::{PageType, WeatherType, CLOUD_THRESHOLD, RAIN_THRESHOLD, SNOWFALL_THRESHOLD};
pub use error::{TaxonomyError, TaxonomyResult};
pub use item::{ClothingAttributes, Description, ItemId, NewClothing};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for taxonomy work
    pub use crate::{
        Category, ClothingAttributes, Color, Description, Formality, ItemId, Material,
        NewClothing, Subcategory,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
