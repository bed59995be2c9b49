//! Wardrobe Clothing Index
//!
//! Derived, rebuildable mapping from item id to the data needed to draw an
//! item: resolved picture, background colour, category and description.
//!
//! # Lifecycle
//!
//! 1. The store lists items and descriptions
//! 2. [`build_index`] resolves and joins them into [`IndexEntries`]
//! 3. [`ClothingIndex::replace`] swaps the new entries in atomically
//! 4. [`ClothingIndex::remove`] drops a single deleted item locally
//!
//! # Example
//!
//! ```rust
//! use wardrobe_index::{ClothingIndex, IndexLookup};
//! use wardrobe_resolver::{ImageResolver, StaticAssetCatalog};
//! use wardrobe_taxonomy::prelude::*;
//!
//! let item = ClothingAttributes {
//!     id: ItemId::new(1),
//!     category: Category::Shoe,
//!     subcategory: Subcategory::Boot,
//!     primary_color: Color::white(),
//!     secondary_color: None,
//!     material: Material::Leather,
//!     formality: Formality::Flex,
//! };
//! let index = ClothingIndex::new();
//! let resolver = ImageResolver::new(StaticAssetCatalog::default());
//! index.rebuild(&[item], &[Description::new(ItemId::new(1), "Winter")], &resolver);
//!
//! let snapshot = index.snapshot();
//! assert_eq!(snapshot.lookup(ItemId::new(1)).unwrap().description, "Winter");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod builder;
pub mod entry;
pub mod index;

pub use builder::{build_index, IndexEntries};
pub use entry::{CategoryFilter, ClothingIndexEntry};
pub use index::{ClothingIndex, IndexLookup, IndexSnapshot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
