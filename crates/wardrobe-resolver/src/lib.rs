//! Wardrobe Image Resolver
//!
//! Maps a clothing item's (category, subcategory, material, formality) to a
//! canonical picture.
//!
//! # Core Concepts
//!
//! - [`resolve_key`]: pure classification to an [`AssetKey`]
//! - [`AssetCatalog`]: injected lookup from [`AssetKey`] to [`AssetRef`]
//! - [`ImageResolver`]: classification plus catalog lookup
//!
//! # Example
//!
//! ```rust
//! use wardrobe_resolver::{resolve_key, AssetKey};
//! use wardrobe_taxonomy::{Category, Formality, Material, Subcategory};
//!
//! let key = resolve_key(Category::Bottom, Subcategory::Pants, Material::WoolCotton, Formality::Informal);
//! assert_eq!(key, Some(AssetKey::Sweatpants));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod asset;
mod resolver;
mod rules;

pub use asset::{AssetCatalog, AssetKey, AssetRef, StaticAssetCatalog};
pub use resolver::ImageResolver;
pub use rules::resolve_key;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
