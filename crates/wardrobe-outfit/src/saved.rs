//! Saved outfits list

use crate::slots::{OutfitId, OutfitSlots};

/// Result of asking to save the current outfit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Handed to the outfit store
    Saved,
    /// Every slot was empty; nothing was sent
    Empty,
    /// The store refused or was unreachable
    Failed,
}

/// Locally held list of saved outfits
///
/// Removal is optimistic: the outfit leaves the list before the store is told.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedOutfits {
    outfits: Vec<OutfitSlots>,
}

impl SavedOutfits {
    #[must_use]
    pub fn new(outfits: Vec<OutfitSlots>) -> Self {
        Self { outfits }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[OutfitSlots] {
        &self.outfits
    }

    #[must_use]
    pub fn get(&self, id: &OutfitId) -> Option<&OutfitSlots> {
        self.outfits.iter().find(|o| &o.id == id)
    }

    /// Drop every outfit with `id`; returns how many were dropped
    pub fn remove(&mut self, id: &OutfitId) -> usize {
        let before = self.outfits.len();
        self.outfits.retain(|o| &o.id != id);
        before - self.outfits.len()
    }

    pub fn replace(&mut self, outfits: Vec<OutfitSlots>) {
        self.outfits = outfits;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutfitSlots> {
        self.outfits.iter()
    }
}

impl<'a> IntoIterator for &'a SavedOutfits {
    type Item = &'a OutfitSlots;
    type IntoIter = std::slice::Iter<'a, OutfitSlots>;

    fn into_iter(self) -> Self::IntoIter {
        self.outfits.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_filters_by_id() {
        let mut saved = SavedOutfits::new(vec![
            OutfitSlots::new().with_id(OutfitId::new("1")),
            OutfitSlots::new().with_id(OutfitId::new("2")),
            OutfitSlots::new().with_id(OutfitId::new("3")),
        ]);
        assert_eq!(saved.remove(&OutfitId::new("2")), 1);
        assert_eq!(saved.remove(&OutfitId::new("2")), 0);
        let ids: Vec<_> = saved.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
