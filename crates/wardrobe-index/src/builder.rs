//! Index construction from store listings

use crate::entry::ClothingIndexEntry;
use indexmap::IndexMap;
use wardrobe_resolver::{AssetCatalog, ImageResolver};
use wardrobe_taxonomy::{ClothingAttributes, Description, ItemId};

/// Id-keyed entries in listing order
pub type IndexEntries = IndexMap<ItemId, ClothingIndexEntry>;

/// Build the index for one store listing
///
/// Each item is resolved through `resolver` and joined to its description
/// by id. The join is a linear scan per item; when several descriptions
/// carry the same id, the last one wins. Items whose attributes do not
/// resolve still get an entry, with no asset.
///
/// Duplicate item ids keep the position of the first occurrence and the
/// data of the last.
#[must_use]
pub fn build_index<C: AssetCatalog>(
    items: &[ClothingAttributes],
    descriptions: &[Description],
    resolver: &ImageResolver<C>,
) -> IndexEntries {
    let mut entries = IndexEntries::with_capacity(items.len());

    for item in items {
        let asset = resolver.resolve_item(item);
        if asset.is_none() {
            tracing::warn!(
                item = %item.id,
                category = %item.category,
                subcategory = %item.subcategory,
                "Unresolvable clothing attributes, omitting picture"
            );
        }

        let description = descriptions
            .iter()
            .rev()
            .find(|d| d.describes(item.id))
            .map(|d| d.text.clone())
            .unwrap_or_default();

        entries.insert(
            item.id,
            ClothingIndexEntry {
                asset,
                primary_color: item.primary_color.clone(),
                category: item.category,
                description,
            },
        );
    }

    tracing::debug!("Built clothing index: {} entries", entries.len());
    entries
}
