//! Session configuration
//!
//! Loaded from TOML; every field has a default so a partial file is fine:
//!
//! ```toml
//! asset_base = "static/icons"
//! refresh_after_add = false
//!
//! [default_location]
//! lat = 40.7128
//! lon = -74.006
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use wardrobe_resolver::StaticAssetCatalog;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "WARDROBE_CONFIG";

/// Latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    /// Providence, RI
    pub const PROVIDENCE: Self = Self {
        lat: 41.824,
        lon: -71.41888,
    };

    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::PROVIDENCE
    }
}

/// Wardrobe session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardrobeConfig {
    /// Prefix of the bundled icon references
    pub asset_base: String,
    /// Location used when none is known
    pub default_location: GeoLocation,
    /// Rebuild the closet index after a successful add
    pub refresh_after_add: bool,
    /// Weather cache time-to-live in seconds
    pub weather_ttl_secs: u64,
    /// Maximum number of cached weather locations
    pub weather_capacity: u64,
}

impl WardrobeConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from the file named by `WARDROBE_CONFIG`, or use defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = base.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_default_location(mut self, location: GeoLocation) -> Self {
        self.default_location = location;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_refresh_after_add(mut self, refresh: bool) -> Self {
        self.refresh_after_add = refresh;
        self
    }

    /// With weather cache TTL and capacity
    #[inline]
    #[must_use]
    pub fn with_weather_cache(mut self, ttl: Duration, capacity: u64) -> Self {
        self.weather_ttl_secs = ttl.as_secs();
        self.weather_capacity = capacity;
        self
    }

    #[must_use]
    pub fn weather_ttl(&self) -> Duration {
        Duration::from_secs(self.weather_ttl_secs)
    }

    /// Icon catalog rooted at [`Self::asset_base`]
    #[must_use]
    pub fn catalog(&self) -> StaticAssetCatalog {
        StaticAssetCatalog::new(self.asset_base.clone())
    }
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            asset_base: StaticAssetCatalog::DEFAULT_BASE.to_string(),
            default_location: GeoLocation::PROVIDENCE,
            refresh_after_add: true,
            weather_ttl_secs: 600,
            weather_capacity: 64,
        }
    }
}
