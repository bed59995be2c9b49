//! External collaborators
//!
//! The session talks to the outside world only through these traits. The
//! CLI and tests plug in their own implementations.

use crate::config::GeoLocation;
use crate::error::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use wardrobe_outfit::{OutfitId, OutfitSlots};
use wardrobe_taxonomy::{
    ClothingAttributes, Description, Formality, ItemId, NewClothing, WeatherType,
};

/// Opaque signed-in user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One store listing: items and their descriptions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosetListing {
    #[serde(default)]
    pub items: Vec<ClothingAttributes>,
    #[serde(default)]
    pub descriptions: Vec<Description>,
}

/// Conditions at a location for the next few hours
///
/// Temperatures are in degrees Fahrenheit. `rain` and `cloud` are
/// percentages; `snowfall` is in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Day's high
    pub high: f64,
    /// Day's low
    pub low: f64,
    /// Temperature right now
    pub current: f64,
    /// Average chance of rain
    pub rain: f64,
    /// Cloud cover
    pub cloud: f64,
    /// Expected snowfall
    pub snowfall: f64,
}

impl WeatherReport {
    /// Icon condition for this report
    #[must_use]
    pub fn weather_type(&self) -> WeatherType {
        WeatherType::classify(self.cloud, self.rain, self.snowfall)
    }
}

/// Remote clothing item store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every item of `user`, with descriptions
    async fn list_items(&self, user: &UserId) -> Result<ClosetListing, StoreError>;

    /// Store a new item; the store assigns its id
    async fn add_item(&self, user: &UserId, item: NewClothing) -> Result<ItemId, StoreError>;

    async fn remove_item(&self, user: &UserId, id: ItemId) -> Result<(), StoreError>;
}

/// Remote outfit store and generator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OutfitStore: Send + Sync {
    /// Ask the generator for an outfit of the given formality
    async fn generate_outfit(
        &self,
        user: &UserId,
        formality: Formality,
        location: GeoLocation,
    ) -> Result<OutfitSlots, StoreError>;

    async fn list_outfits(&self, user: &UserId) -> Result<Vec<OutfitSlots>, StoreError>;

    async fn add_outfit(&self, user: &UserId, outfit: OutfitSlots) -> Result<(), StoreError>;

    async fn remove_outfit(&self, user: &UserId, id: OutfitId) -> Result<(), StoreError>;
}

/// Authentication state
#[cfg_attr(test, mockall::automock)]
pub trait SessionProvider: Send + Sync {
    /// Signed-in user, if any
    fn current_user(&self) -> Option<UserId>;
}

/// Weather lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, location: GeoLocation) -> Result<WeatherReport, StoreError>;
}

/// Session provider with a fixed answer
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<UserId>,
}

impl StaticSession {
    #[must_use]
    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<UserId> {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_decodes_store_payload() {
        let listing: ClosetListing = serde_json::from_str(
            r##"{
                "items": [{"id":"3","category":"1","subcategory":"4","primary":"#000000",
                           "accent":"null","material":"3","formality":"1"}],
                "descriptions": [{"id":"3","desc":"Black Jeans"}]
            }"##,
        )
        .unwrap();
        assert_eq!(listing.items.len(), 1);
        assert!(listing.descriptions[0].describes(ItemId::new(3)));
    }

    #[test]
    fn report_classifies() {
        let report = WeatherReport {
            high: 58.0,
            low: 44.0,
            current: 51.0,
            rain: 70.0,
            cloud: 90.0,
            snowfall: 0.0,
        };
        assert_eq!(report.weather_type(), WeatherType::Rainy);
        let snowy = WeatherReport {
            snowfall: 3.0,
            ..report
        };
        assert_eq!(snowy.weather_type(), WeatherType::Snow);
    }

    #[test]
    fn report_decodes_server_payload() {
        let report: WeatherReport = serde_json::from_str(
            r#"{"high":72,"low":55,"current":64,"rain":10,"cloud":60,"snowfall":0}"#,
        )
        .unwrap();
        assert_eq!(report.current, 64.0);
        assert_eq!(report.weather_type(), WeatherType::Cloudy);
    }

    #[test]
    fn static_session() {
        assert_eq!(StaticSession::signed_out().current_user(), None);
        assert_eq!(
            StaticSession::signed_in(UserId::new("u1")).current_user(),
            Some(UserId::new("u1"))
        );
    }
}
