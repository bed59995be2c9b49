//! Weather response cache using moka
//!
//! Holds the last report per location for a configurable time-to-live.
//! Provider failures are never cached.

use crate::collaborators::{WeatherProvider, WeatherReport};
use crate::config::{GeoLocation, WardrobeConfig};
use moka::future::Cache;
use std::time::Duration;

/// Cache key: location rounded to four decimal places (about 11 m)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LocationKey(i64, i64);

impl From<GeoLocation> for LocationKey {
    #[allow(clippy::cast_possible_truncation)]
    fn from(location: GeoLocation) -> Self {
        Self(
            (location.lat * 10_000.0).round() as i64,
            (location.lon * 10_000.0).round() as i64,
        )
    }
}

/// Session-scoped weather cache
#[derive(Debug, Clone)]
pub struct WeatherCache {
    inner: Cache<LocationKey, WeatherReport>,
}

impl WeatherCache {
    /// Create cache with capacity and time-to-live
    #[must_use]
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Create cache sized by `config`
    #[must_use]
    pub fn from_config(config: &WardrobeConfig) -> Self {
        Self::new(config.weather_capacity, config.weather_ttl())
    }

    /// Cached report for `location`
    pub async fn get(&self, location: GeoLocation) -> Option<WeatherReport> {
        self.inner.get(&LocationKey::from(location)).await
    }

    /// Cached report, or a fresh one from `provider`
    ///
    /// Returns `None` when the provider fails; the failure is logged and
    /// the next call asks again.
    pub async fn get_or_fetch<P>(&self, provider: &P, location: GeoLocation) -> Option<WeatherReport>
    where
        P: WeatherProvider + ?Sized,
    {
        let key = LocationKey::from(location);
        if let Some(cached) = self.inner.get(&key).await {
            return Some(cached);
        }

        match provider.current(location).await {
            Ok(report) => {
                self.inner.insert(key, report.clone()).await;
                Some(report)
            }
            Err(err) => {
                tracing::warn!("Weather currently unavailable: {}", err);
                None
            }
        }
    }

    /// Forget the report for `location`
    pub async fn invalidate(&self, location: GeoLocation) {
        self.inner.invalidate(&LocationKey::from(location)).await;
    }

    /// Forget every report
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

impl Default for WeatherCache {
    fn default() -> Self {
        Self::from_config(&WardrobeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::MockWeatherProvider;
    use crate::error::StoreError;

    fn report() -> WeatherReport {
        WeatherReport {
            high: 75.0,
            low: 58.0,
            current: 70.0,
            rain: 5.0,
            cloud: 10.0,
            snowfall: 0.0,
        }
    }

    #[tokio::test]
    async fn second_lookup_is_cached() {
        let mut provider = MockWeatherProvider::new();
        provider.expect_current().times(1).returning(|_| Ok(report()));

        let cache = WeatherCache::default();
        let here = GeoLocation::PROVIDENCE;
        assert_eq!(cache.get_or_fetch(&provider, here).await, Some(report()));
        assert_eq!(cache.get_or_fetch(&provider, here).await, Some(report()));
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let mut provider = MockWeatherProvider::new();
        let mut calls = 0;
        provider.expect_current().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(StoreError::unavailable("timeout"))
            } else {
                Ok(report())
            }
        });

        let cache = WeatherCache::default();
        let here = GeoLocation::PROVIDENCE;
        assert_eq!(cache.get_or_fetch(&provider, here).await, None);
        assert_eq!(cache.get_or_fetch(&provider, here).await, Some(report()));
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let mut provider = MockWeatherProvider::new();
        provider.expect_current().times(2).returning(|_| Ok(report()));

        let cache = WeatherCache::default();
        let here = GeoLocation::new(40.0, -74.0);
        cache.get_or_fetch(&provider, here).await;
        cache.invalidate(here).await;
        assert!(cache.get(here).await.is_none());
        cache.get_or_fetch(&provider, here).await;
    }

    #[test]
    fn nearby_points_share_a_key() {
        assert_eq!(
            LocationKey::from(GeoLocation::new(41.82401, -71.41888)),
            LocationKey::from(GeoLocation::PROVIDENCE)
        );
    }
}
