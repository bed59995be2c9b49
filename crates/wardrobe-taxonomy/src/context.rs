//! Peripheral enumerations: weather conditions and application pages

use crate::category::normalize_name;
use crate::error::TaxonomyError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Coarse weather condition shown next to a generated outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherType {
    /// More than 1 mm of snowfall expected
    Snow,
    /// Cloud cover above half
    Cloudy,
    /// Chance of rain above half
    Rainy,
    /// None of the above
    Clear,
}

/// Snowfall in mm above which the day counts as snowy
pub const SNOWFALL_THRESHOLD: f64 = 1.0;
/// Chance of rain, in percent, above which the day counts as rainy
pub const RAIN_THRESHOLD: f64 = 50.0;
/// Cloud cover, in percent, above which the day counts as cloudy
pub const CLOUD_THRESHOLD: f64 = 50.0;

impl WeatherType {
    /// Classify from cloud cover and chance of rain (percent) and snowfall (mm)
    ///
    /// Snow wins over rain, rain over cloud. Every threshold is exclusive.
    #[must_use]
    pub fn classify(cloud: f64, rain: f64, snowfall: f64) -> Self {
        if snowfall > SNOWFALL_THRESHOLD {
            Self::Snow
        } else if rain > RAIN_THRESHOLD {
            Self::Rainy
        } else if cloud > CLOUD_THRESHOLD {
            Self::Cloudy
        } else {
            Self::Clear
        }
    }

    /// Lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Snow => "snow",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Clear => "clear",
        }
    }
}

/// Application page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// Outfit generator
    Generate,
    /// Saved outfits
    Saved,
    /// Landing page with the weather
    Home,
    /// Closet browser
    Closet,
}

impl PageType {
    /// Lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Saved => "saved",
            Self::Home => "home",
            Self::Closet => "closet",
        }
    }

    /// Pages that render items through the clothing index
    #[inline]
    #[must_use]
    pub fn uses_index(self) -> bool {
        !matches!(self, Self::Home)
    }
}

impl FromStr for PageType {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "generate" => Ok(Self::Generate),
            "saved" => Ok(Self::Saved),
            "home" => Ok(Self::Home),
            "closet" => Ok(Self::Closet),
            _ => Err(TaxonomyError::unknown_name("page", s)),
        }
    }
}
