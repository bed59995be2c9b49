//! Wardrobe session
//!
//! [`WardrobeSession`] owns everything the user sees: the closet index, the
//! generated outfit, saved outfits, the intake form and the weather cache.
//! Core operations are synchronous; the only suspension points are calls to
//! collaborators. Responses are applied only if no newer request or
//! navigation happened in the meantime.
//!
//! Collaborator failures never escape as errors from fetches: they are
//! logged and the affected view falls back to an empty result.

use crate::collaborators::{
    ItemStore, OutfitStore, SessionProvider, UserId, WeatherProvider, WeatherReport,
};
use crate::config::{GeoLocation, WardrobeConfig};
use crate::error::{WardrobeError, WardrobeResult};
use crate::requests::{Channel, FetchOutcome, RequestToken, RequestTracker};
use crate::weather::WeatherCache;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use wardrobe_index::{CategoryFilter, ClothingIndex, ClothingIndexEntry};
use wardrobe_intake::IntakeFlow;
use wardrobe_outfit::{
    render_outfit, HoverState, OutfitId, OutfitSlots, OutfitView, RenderedSlot, SaveOutcome,
    SavedOutfits,
};
use wardrobe_resolver::{AssetCatalog, ImageResolver};
use wardrobe_taxonomy::{Formality, ItemId, PageType};

/// External services a session talks to
#[derive(Clone)]
pub struct Collaborators {
    pub items: Arc<dyn ItemStore>,
    pub outfits: Arc<dyn OutfitStore>,
    pub session: Arc<dyn SessionProvider>,
    pub weather: Arc<dyn WeatherProvider>,
}

#[derive(Debug)]
struct SessionState {
    page: PageType,
    current: OutfitSlots,
    formality: Formality,
    saved: SavedOutfits,
    hover: HoverState,
    location: GeoLocation,
}

/// One user's view of their wardrobe
pub struct WardrobeSession {
    config: WardrobeConfig,
    resolver: ImageResolver<Arc<dyn AssetCatalog>>,
    collaborators: Collaborators,
    index: ClothingIndex,
    state: RwLock<SessionState>,
    intake: Mutex<IntakeFlow>,
    weather_cache: WeatherCache,
    requests: RequestTracker,
}

impl std::fmt::Debug for WardrobeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WardrobeSession")
            .field("config", &self.config)
            .field("index_len", &self.index.len())
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}

impl WardrobeSession {
    /// Create session with the bundled icon catalog from `config`
    #[must_use]
    pub fn new(config: WardrobeConfig, collaborators: Collaborators) -> Self {
        let catalog: Arc<dyn AssetCatalog> = Arc::new(config.catalog());
        Self {
            resolver: ImageResolver::new(catalog),
            collaborators,
            index: ClothingIndex::new(),
            state: RwLock::new(SessionState {
                page: PageType::Home,
                current: OutfitSlots::new(),
                formality: Formality::default(),
                saved: SavedOutfits::default(),
                hover: HoverState::new(),
                location: config.default_location,
            }),
            intake: Mutex::new(IntakeFlow::new()),
            weather_cache: WeatherCache::from_config(&config),
            requests: RequestTracker::new(),
            config,
        }
    }

    /// Use a different icon catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<dyn AssetCatalog>) -> Self {
        self.resolver = ImageResolver::new(catalog);
        self
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &WardrobeConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> &ClothingIndex {
        &self.index
    }

    #[must_use]
    pub fn page(&self) -> PageType {
        self.state.read().page
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Switch page
    ///
    /// Drops every in-flight response, clears the generated outfit and
    /// hover, then reloads what the new page shows.
    pub async fn navigate(&self, page: PageType) {
        self.requests.invalidate_all();
        {
            let mut state = self.state.write();
            state.page = page;
            state.current.reset();
            state.hover.leave();
        }
        tracing::debug!("Navigated to {}", page.as_str());

        if page.uses_index() {
            let _ = self.refresh_closet().await;
        }
        if page == PageType::Saved {
            let _ = self.load_saved_outfits().await;
        }
    }

    // ------------------------------------------------------------------
    // Closet
    // ------------------------------------------------------------------

    /// Rebuild the closet index from the item store
    pub async fn refresh_closet(&self) -> FetchOutcome<usize> {
        let token = self.requests.begin(Channel::Closet);
        let Some(user) = self.collaborators.session.current_user() else {
            self.index.clear();
            return FetchOutcome::Unavailable;
        };

        let result = self.collaborators.items.list_items(&user).await;
        if !self.is_current(token) {
            return FetchOutcome::Stale;
        }

        match result {
            Ok(listing) => {
                self.index
                    .rebuild(&listing.items, &listing.descriptions, &self.resolver);
                FetchOutcome::Applied(self.index.len())
            }
            Err(err) => {
                tracing::warn!(user = %user, "Failed to list clothing: {}", err);
                FetchOutcome::Unavailable
            }
        }
    }

    /// Closet entries passing `filter`, in listing order
    #[must_use]
    pub fn closet(&self, filter: CategoryFilter) -> Vec<(ItemId, ClothingIndexEntry)> {
        self.index.filtered(filter)
    }

    /// Delete an item
    ///
    /// The entry leaves the index at once; the store is told afterwards and
    /// its answer is not waited on for the local view. A closet listing
    /// already in flight predates the delete and is dropped.
    pub async fn delete_item(&self, id: ItemId) -> bool {
        self.requests.invalidate(Channel::Closet);
        let removed = self.index.remove(id).is_some();
        if let Some(user) = self.collaborators.session.current_user() {
            if let Err(err) = self.collaborators.items.remove_item(&user, id).await {
                tracing::warn!(item = %id, "Failed to remove clothing: {}", err);
            }
        }
        removed
    }

    // ------------------------------------------------------------------
    // Intake
    // ------------------------------------------------------------------

    /// Run `f` against the intake form
    pub fn with_intake<R>(&self, f: impl FnOnce(&mut IntakeFlow) -> R) -> R {
        f(&mut self.intake.lock())
    }

    /// Submit the intake form and add the item to the store
    ///
    /// An incomplete draft is rejected locally and nothing is sent.
    pub async fn submit_intake(&self) -> WardrobeResult<ItemId> {
        let user = self
            .collaborators
            .session
            .current_user()
            .ok_or(WardrobeError::NoSession)?;
        let item = self.intake.lock().submit()?;

        let id = match self.collaborators.items.add_item(&user, item).await {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!("Failed to add clothing: {}", err);
                return Err(err.into());
            }
        };
        tracing::info!("Added clothing item {}", id);

        if self.config.refresh_after_add {
            let _ = self.refresh_closet().await;
        }
        Ok(id)
    }

    // ------------------------------------------------------------------
    // Generated outfit
    // ------------------------------------------------------------------

    #[must_use]
    pub fn formality(&self) -> Formality {
        self.state.read().formality
    }

    /// Advance the formality toggle
    pub fn cycle_formality(&self) -> Formality {
        let mut state = self.state.write();
        state.formality = state.formality.cycle();
        state.formality
    }

    /// Location used for generation and weather
    pub fn set_location(&self, location: GeoLocation) {
        self.state.write().location = location;
    }

    #[must_use]
    pub fn current_outfit(&self) -> OutfitSlots {
        self.state.read().current.clone()
    }

    /// Ask the generator for a new outfit and show it
    pub async fn generate_outfit(&self) -> FetchOutcome<OutfitSlots> {
        let token = self.requests.begin(Channel::Outfit);
        let (formality, location) = {
            let state = self.state.read();
            (state.formality, state.location)
        };
        let Some(user) = self.collaborators.session.current_user() else {
            self.state.write().current.reset();
            return FetchOutcome::Unavailable;
        };

        let result = self
            .collaborators
            .outfits
            .generate_outfit(&user, formality, location)
            .await;
        if !self.is_current(token) {
            return FetchOutcome::Stale;
        }

        let mut state = self.state.write();
        match result {
            Ok(outfit) => {
                state.current.replace_with(outfit.clone());
                FetchOutcome::Applied(outfit)
            }
            Err(err) => {
                tracing::warn!("Failed to generate outfit: {}", err);
                state.current.reset();
                FetchOutcome::Unavailable
            }
        }
    }

    /// Save the generated outfit
    pub async fn save_current_outfit(&self) -> SaveOutcome {
        let current = self.current_outfit();
        if current.is_empty() {
            return SaveOutcome::Empty;
        }
        let Some(user) = self.collaborators.session.current_user() else {
            return SaveOutcome::Failed;
        };

        match self.collaborators.outfits.add_outfit(&user, current).await {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                tracing::warn!("Failed to save outfit: {}", err);
                SaveOutcome::Failed
            }
        }
    }

    // ------------------------------------------------------------------
    // Saved outfits
    // ------------------------------------------------------------------

    /// Reload saved outfits from the store
    pub async fn load_saved_outfits(&self) -> FetchOutcome<usize> {
        let token = self.requests.begin(Channel::Saved);
        let Some(user) = self.collaborators.session.current_user() else {
            self.state.write().saved.replace(Vec::new());
            return FetchOutcome::Unavailable;
        };

        let result = self.collaborators.outfits.list_outfits(&user).await;
        if !self.is_current(token) {
            return FetchOutcome::Stale;
        }

        let mut state = self.state.write();
        match result {
            Ok(outfits) => {
                let count = outfits.len();
                state.saved.replace(outfits);
                FetchOutcome::Applied(count)
            }
            Err(err) => {
                tracing::warn!("Failed to list outfits: {}", err);
                state.saved.replace(Vec::new());
                FetchOutcome::Unavailable
            }
        }
    }

    #[must_use]
    pub fn saved_outfits(&self) -> SavedOutfits {
        self.state.read().saved.clone()
    }

    /// Remove a saved outfit locally, then tell the store
    pub async fn remove_saved_outfit(&self, id: &OutfitId) -> bool {
        let removed = self.state.write().saved.remove(id) > 0;
        if let Some(user) = self.collaborators.session.current_user() {
            if let Err(err) = self
                .collaborators
                .outfits
                .remove_outfit(&user, id.clone())
                .await
            {
                tracing::warn!(outfit = %id, "Failed to remove outfit: {}", err);
            }
        }
        removed
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Pointer entered a slot
    pub fn hover_enter(&self, item: ItemId, outfit: Option<OutfitId>) {
        self.state.write().hover.enter(item, outfit);
    }

    /// Pointer left a slot
    pub fn hover_leave(&self) {
        self.state.write().hover.leave();
    }

    /// Render the generated outfit
    #[must_use]
    pub fn render_current(&self) -> Vec<RenderedSlot> {
        let snapshot = self.index.snapshot();
        let state = self.state.read();
        render_outfit(&state.current, &snapshot, &state.hover, OutfitView::Generated)
    }

    /// Render every saved outfit
    #[must_use]
    pub fn render_saved(&self) -> Vec<(OutfitId, Vec<RenderedSlot>)> {
        let snapshot = self.index.snapshot();
        let state = self.state.read();
        state
            .saved
            .iter()
            .map(|outfit| {
                (
                    outfit.id.clone(),
                    render_outfit(outfit, &snapshot, &state.hover, OutfitView::Saved),
                )
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Weather
    // ------------------------------------------------------------------

    /// Current weather, cached; `None` when unavailable
    pub async fn current_weather(&self) -> Option<WeatherReport> {
        let location = self.state.read().location;
        self.weather_cache
            .get_or_fetch(&*self.collaborators.weather, location)
            .await
    }

    /// Drop the cached report and ask again
    pub async fn refresh_weather(&self) -> Option<WeatherReport> {
        let location = self.state.read().location;
        self.weather_cache.invalidate(location).await;
        self.current_weather().await
    }

    /// Signed-in user, if any
    #[must_use]
    pub fn user(&self) -> Option<UserId> {
        self.collaborators.session.current_user()
    }

    fn is_current(&self, token: RequestToken) -> bool {
        let current = self.requests.is_current(token);
        if !current {
            tracing::debug!("Discarding stale {:?} response", token.channel());
        }
        current
    }
}
