//! Testing utilities for the wardrobe workspace
//!
//! Item fixtures and in-memory collaborators with failure injection.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use wardrobe_core::{
    ClosetListing, Collaborators, GeoLocation, ItemStore, OutfitStore, StaticSession, StoreError,
    UserId, WardrobeConfig, WardrobeSession, WeatherProvider, WeatherReport,
};
use wardrobe_outfit::{OutfitId, OutfitSlots, SlotKind};
use wardrobe_taxonomy::{
    Category, ClothingAttributes, Color, Description, Formality, ItemId, Material, NewClothing,
    Subcategory,
};

pub fn item(id: u64, subcategory: Subcategory, material: Material) -> ClothingAttributes {
    ClothingAttributes {
        id: ItemId::new(id),
        category: subcategory.category(),
        subcategory,
        primary_color: Color::from_raw("#1f2a44"),
        secondary_color: None,
        material,
        formality: Formality::Informal,
    }
}

pub fn shirt(id: u64) -> ClothingAttributes {
    item(id, Subcategory::LongSleeve, Material::WoolCotton)
}

pub fn jeans(id: u64) -> ClothingAttributes {
    item(id, Subcategory::Pants, Material::Denim)
}

pub fn sneakers(id: u64) -> ClothingAttributes {
    item(id, Subcategory::Sneaker, Material::PlasticNylon)
}

pub fn dress(id: u64) -> ClothingAttributes {
    item(id, Subcategory::Dress, Material::WoolCotton)
}

pub fn description(id: u64, text: &str) -> Description {
    Description::new(ItemId::new(id), text)
}

pub fn new_clothing(category: Category, subcategory: Subcategory) -> NewClothing {
    NewClothing {
        category,
        subcategory,
        primary_color: Color::white(),
        secondary_color: None,
        material: Material::WoolCotton,
        formality: Formality::Informal,
        description: String::new(),
    }
}

/// Top, bottom and shoe outfit
pub fn casual_outfit(top: u64, bottom: u64, shoe: u64) -> OutfitSlots {
    OutfitSlots::new()
        .with_slot(SlotKind::Top, ItemId::new(top))
        .with_slot(SlotKind::Bottom, ItemId::new(bottom))
        .with_slot(SlotKind::Shoe, ItemId::new(shoe))
}

/// Item store over an in-memory listing
///
/// With a latch, listing takes its snapshot first and then waits for
/// [`Notify::notify_one`] before answering.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    listing: Mutex<ClosetListing>,
    latch: Option<Arc<Notify>>,
    failing: AtomicBool,
    list_calls: AtomicUsize,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ClothingAttributes>, descriptions: Vec<Description>) -> Self {
        Self {
            listing: Mutex::new(ClosetListing {
                items,
                descriptions,
            }),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_latch(mut self, latch: Arc<Notify>) -> Self {
        self.latch = Some(latch);
        self
    }

    /// Make every call fail until cleared
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn items(&self) -> Vec<ClothingAttributes> {
        self.listing.lock().items.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::unavailable("item store offline"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list_items(&self, _user: &UserId) -> Result<ClosetListing, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let listing = self.listing.lock().clone();
        if let Some(latch) = &self.latch {
            latch.notified().await;
        }
        Ok(listing)
    }

    async fn add_item(&self, _user: &UserId, item: NewClothing) -> Result<ItemId, StoreError> {
        self.check()?;
        let mut listing = self.listing.lock();
        let next = listing.items.iter().map(|i| i.id.get()).max().unwrap_or(0) + 1;
        let id = ItemId::new(next);
        listing.items.push(item.with_id(id));
        if !item.description.is_empty() {
            listing
                .descriptions
                .push(Description::new(id, item.description));
        }
        Ok(id)
    }

    async fn remove_item(&self, _user: &UserId, id: ItemId) -> Result<(), StoreError> {
        self.check()?;
        let mut listing = self.listing.lock();
        listing.items.retain(|i| i.id != id);
        listing.descriptions.retain(|d| !d.describes(id));
        Ok(())
    }
}

/// Outfit store that hands out queued outfits
///
/// With a latch, generation waits for [`Notify::notify_one`] before
/// answering, so tests can interleave navigation with an in-flight request.
#[derive(Debug, Default)]
pub struct InMemoryOutfitStore {
    generated: Mutex<VecDeque<OutfitSlots>>,
    saved: Mutex<Vec<OutfitSlots>>,
    latch: Option<Arc<Notify>>,
    failing: AtomicBool,
    next_id: AtomicU64,
}

impl InMemoryOutfitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outfit for the next generation
    #[must_use]
    pub fn with_generated(self, outfit: OutfitSlots) -> Self {
        self.generated.lock().push_back(outfit);
        self
    }

    #[must_use]
    pub fn with_saved(self, outfits: Vec<OutfitSlots>) -> Self {
        *self.saved.lock() = outfits;
        self
    }

    #[must_use]
    pub fn with_latch(mut self, latch: Arc<Notify>) -> Self {
        self.latch = Some(latch);
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn saved(&self) -> Vec<OutfitSlots> {
        self.saved.lock().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::unavailable("outfit store offline"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OutfitStore for InMemoryOutfitStore {
    async fn generate_outfit(
        &self,
        _user: &UserId,
        _formality: Formality,
        _location: GeoLocation,
    ) -> Result<OutfitSlots, StoreError> {
        if let Some(latch) = &self.latch {
            latch.notified().await;
        }
        self.check()?;
        Ok(self.generated.lock().pop_front().unwrap_or_default())
    }

    async fn list_outfits(&self, _user: &UserId) -> Result<Vec<OutfitSlots>, StoreError> {
        self.check()?;
        Ok(self.saved.lock().clone())
    }

    async fn add_outfit(&self, _user: &UserId, outfit: OutfitSlots) -> Result<(), StoreError> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.saved
            .lock()
            .push(outfit.with_id(OutfitId::new(format!("outfit-{id}"))));
        Ok(())
    }

    async fn remove_outfit(&self, _user: &UserId, id: OutfitId) -> Result<(), StoreError> {
        self.check()?;
        self.saved.lock().retain(|o| o.id != id);
        Ok(())
    }
}

/// Weather provider with a fixed answer
#[derive(Debug, Clone, Default)]
pub struct FixedWeather {
    report: Option<WeatherReport>,
}

impl FixedWeather {
    /// Always answer with `report`
    pub fn reporting(report: WeatherReport) -> Self {
        Self {
            report: Some(report),
        }
    }

    /// Clear and mild at `current` degrees
    pub fn clear(current: f64) -> Self {
        Self::reporting(WeatherReport {
            high: current + 5.0,
            low: current - 10.0,
            current,
            ..WeatherReport::default()
        })
    }

    /// Every lookup fails
    pub fn unavailable() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WeatherProvider for FixedWeather {
    async fn current(&self, _location: GeoLocation) -> Result<WeatherReport, StoreError> {
        self.report
            .clone()
            .ok_or_else(|| StoreError::unavailable("no forecast"))
    }
}

pub fn test_user() -> UserId {
    UserId::new("test-user")
}

/// Signed-in session over the given stores with default config
pub fn setup_test_session(
    items: Arc<InMemoryItemStore>,
    outfits: Arc<InMemoryOutfitStore>,
) -> WardrobeSession {
    WardrobeSession::new(
        WardrobeConfig::new(),
        Collaborators {
            items,
            outfits,
            session: Arc::new(StaticSession::signed_in(test_user())),
            weather: Arc::new(FixedWeather::clear(70.0)),
        },
    )
}
