//! JSON file collaborators for local use

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use wardrobe_core::{
    ClosetListing, GeoLocation, ItemStore, OutfitStore, StoreError, UserId, WeatherProvider,
    WeatherReport,
};
use wardrobe_outfit::{OutfitId, OutfitSlots};
use wardrobe_taxonomy::{Description, Formality, ItemId, NewClothing};

/// On-disk layout: a store listing plus saved outfits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct WardrobeFile {
    #[serde(flatten)]
    pub(crate) listing: ClosetListing,
    #[serde(default)]
    pub(crate) outfits: Vec<OutfitSlots>,
}

/// Item and outfit store backed by one JSON file
///
/// A missing file reads as an empty wardrobe. Every user sees the same file.
#[derive(Debug)]
pub(crate) struct FileStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileStore {
    pub(crate) fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            guard: Mutex::new(()),
        }
    }

    async fn read(&self) -> Result<WardrobeFile, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|e| StoreError::Decode(format!("{}: {e}", self.path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(WardrobeFile::default()),
            Err(e) => Err(StoreError::unavailable(format!(
                "{}: {e}",
                self.path.display()
            ))),
        }
    }

    async fn write(&self, file: &WardrobeFile) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(file)
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        tokio::fs::write(&self.path, text)
            .await
            .map_err(|e| StoreError::unavailable(format!("{}: {e}", self.path.display())))
    }

    async fn update<R, F>(&self, apply: F) -> Result<R, StoreError>
    where
        R: Send,
        F: FnOnce(&mut WardrobeFile) -> R + Send,
    {
        let _guard = self.guard.lock().await;
        let mut file = self.read().await?;
        let result = apply(&mut file);
        self.write(&file).await?;
        Ok(result)
    }
}

#[async_trait]
impl ItemStore for FileStore {
    async fn list_items(&self, _user: &UserId) -> Result<ClosetListing, StoreError> {
        Ok(self.read().await?.listing)
    }

    async fn add_item(&self, _user: &UserId, item: NewClothing) -> Result<ItemId, StoreError> {
        self.update(|file| {
            let listing = &mut file.listing;
            let next = listing.items.iter().map(|i| i.id.get()).max().unwrap_or(0) + 1;
            let id = ItemId::new(next);
            listing.items.push(item.with_id(id));
            if !item.description.is_empty() {
                listing
                    .descriptions
                    .push(Description::new(id, item.description));
            }
            id
        })
        .await
    }

    async fn remove_item(&self, _user: &UserId, id: ItemId) -> Result<(), StoreError> {
        self.update(|file| {
            file.listing.items.retain(|i| i.id != id);
            file.listing.descriptions.retain(|d| !d.describes(id));
        })
        .await
    }
}

#[async_trait]
impl OutfitStore for FileStore {
    async fn generate_outfit(
        &self,
        _user: &UserId,
        _formality: Formality,
        _location: GeoLocation,
    ) -> Result<OutfitSlots, StoreError> {
        Err(StoreError::rejected("no outfit generator for local files"))
    }

    async fn list_outfits(&self, _user: &UserId) -> Result<Vec<OutfitSlots>, StoreError> {
        Ok(self.read().await?.outfits)
    }

    async fn add_outfit(&self, _user: &UserId, outfit: OutfitSlots) -> Result<(), StoreError> {
        self.update(|file| {
            let next = file
                .outfits
                .iter()
                .filter_map(|o| o.id.as_str().parse::<u64>().ok())
                .max()
                .unwrap_or(0)
                + 1;
            file.outfits.push(outfit.with_id(OutfitId::new(next.to_string())));
        })
        .await
    }

    async fn remove_outfit(&self, _user: &UserId, id: OutfitId) -> Result<(), StoreError> {
        self.update(|file| file.outfits.retain(|o| o.id != id)).await
    }
}

/// Weather provider for offline use
#[derive(Debug, Default)]
pub(crate) struct NoWeather;

#[async_trait]
impl WeatherProvider for NoWeather {
    async fn current(&self, _location: GeoLocation) -> Result<WeatherReport, StoreError> {
        Err(StoreError::unavailable("weather lookups are disabled"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_taxonomy::{Category, Color, Material, Subcategory};

    fn user() -> UserId {
        UserId::new("local")
    }

    fn boots() -> NewClothing {
        NewClothing {
            category: Category::Shoe,
            subcategory: Subcategory::Boot,
            primary_color: Color::from_raw("#3b2f2f"),
            secondary_color: None,
            material: Material::Leather,
            formality: Formality::Flex,
            description: "Chelsea Boots".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("closet.json"));
        let listing = store.list_items(&user()).await.unwrap();
        assert!(listing.items.is_empty());
    }

    #[tokio::test]
    async fn add_then_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("closet.json"));

        let id = store.add_item(&user(), boots()).await.unwrap();
        assert_eq!(id, ItemId::new(1));
        let listing = store.list_items(&user()).await.unwrap();
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.descriptions[0].text, "Chelsea Boots");

        store.remove_item(&user(), id).await.unwrap();
        let listing = store.list_items(&user()).await.unwrap();
        assert!(listing.items.is_empty());
        assert!(listing.descriptions.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("closet.json");
        std::fs::write(&path, "not json").unwrap();
        let err = FileStore::new(&path).list_items(&user()).await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[tokio::test]
    async fn saved_outfits_get_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("closet.json"));
        store.add_outfit(&user(), OutfitSlots::new()).await.unwrap();
        let outfits = store.list_outfits(&user()).await.unwrap();
        assert_eq!(outfits[0].id, OutfitId::new("1"));
    }

    #[tokio::test]
    async fn outfit_ids_are_not_reused_after_removal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("closet.json"));
        store.add_outfit(&user(), OutfitSlots::new()).await.unwrap();
        store.add_outfit(&user(), OutfitSlots::new()).await.unwrap();
        store.remove_outfit(&user(), OutfitId::new("1")).await.unwrap();
        store.add_outfit(&user(), OutfitSlots::new()).await.unwrap();

        let ids: Vec<_> = store
            .list_outfits(&user())
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![OutfitId::new("2"), OutfitId::new("3")]);

        store.remove_outfit(&user(), OutfitId::new("2")).await.unwrap();
        assert_eq!(store.list_outfits(&user()).await.unwrap().len(), 1);
    }
}
