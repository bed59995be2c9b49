//! Live closet index
//!
//! [`ClothingIndex`] holds the current [`IndexSnapshot`] behind a
//! `parking_lot::RwLock`. Rebuilds swap the whole snapshot; readers keep
//! whatever snapshot they cloned. Local deletion is copy-on-write.

use crate::builder::{build_index, IndexEntries};
use crate::entry::{CategoryFilter, ClothingIndexEntry};
use parking_lot::RwLock;
use std::sync::Arc;
use wardrobe_resolver::{AssetCatalog, ImageResolver};
use wardrobe_taxonomy::{ClothingAttributes, Description, ItemId};

/// Immutable view of the index at one point in time
pub type IndexSnapshot = Arc<IndexEntries>;

/// Read access by item id
///
/// Renderers depend on this rather than on a concrete map so tests can
/// hand them any lookup.
pub trait IndexLookup {
    /// Entry for `id`, if present
    fn lookup(&self, id: ItemId) -> Option<&ClothingIndexEntry>;
}

impl IndexLookup for IndexEntries {
    fn lookup(&self, id: ItemId) -> Option<&ClothingIndexEntry> {
        self.get(&id)
    }
}

impl IndexLookup for std::collections::HashMap<ItemId, ClothingIndexEntry> {
    fn lookup(&self, id: ItemId) -> Option<&ClothingIndexEntry> {
        self.get(&id)
    }
}

impl<L: IndexLookup + ?Sized> IndexLookup for Arc<L> {
    fn lookup(&self, id: ItemId) -> Option<&ClothingIndexEntry> {
        (**self).lookup(id)
    }
}

/// Shared, atomically replaceable closet index
#[derive(Debug, Default)]
pub struct ClothingIndex {
    current: RwLock<IndexSnapshot>,
}

impl ClothingIndex {
    /// Create empty index
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create index holding `entries`
    #[must_use]
    pub fn from_entries(entries: IndexEntries) -> Self {
        Self {
            current: RwLock::new(Arc::new(entries)),
        }
    }

    /// Swap in a freshly built set of entries
    pub fn replace(&self, entries: IndexEntries) {
        *self.current.write() = Arc::new(entries);
    }

    /// Rebuild from a store listing and swap it in
    pub fn rebuild<C: AssetCatalog>(
        &self,
        items: &[ClothingAttributes],
        descriptions: &[Description],
        resolver: &ImageResolver<C>,
    ) {
        self.replace(build_index(items, descriptions, resolver));
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.replace(IndexEntries::new());
    }

    /// Current snapshot
    #[must_use]
    pub fn snapshot(&self) -> IndexSnapshot {
        Arc::clone(&self.current.read())
    }

    /// Cloned entry for `id`
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<ClothingIndexEntry> {
        self.current.read().get(&id).cloned()
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.current.read().contains_key(&id)
    }

    /// Remove one entry, leaving all others and their order untouched
    ///
    /// Outstanding snapshots are not affected.
    pub fn remove(&self, id: ItemId) -> Option<ClothingIndexEntry> {
        let mut guard = self.current.write();
        if !guard.contains_key(&id) {
            return None;
        }
        Arc::make_mut(&mut *guard).shift_remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }

    /// Entries passing `filter`, in listing order
    #[must_use]
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<(ItemId, ClothingIndexEntry)> {
        self.current
            .read()
            .iter()
            .filter(|(_, entry)| filter.matches(entry.category))
            .map(|(id, entry)| (*id, entry.clone()))
            .collect()
    }
}
