//! Wardrobe Core
//!
//! Session orchestration over the taxonomy, resolver, index, outfit and
//! intake crates.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                WardrobeSession                 │
//! │  ┌──────────────┐ ┌──────────┐ ┌────────────┐  │
//! │  │ ClothingIndex│ │ Outfits  │ │ IntakeFlow │  │
//! │  └──────┬───────┘ └────┬─────┘ └─────┬──────┘  │
//! │         │ RequestTracker (stale drop)│         │
//! └─────────┼──────────────┼─────────────┼─────────┘
//!           ▼              ▼             ▼
//!      ItemStore      OutfitStore    ItemStore   WeatherProvider (cached)
//! ```
//!
//! # Example
//!
//! ```rust
//! use wardrobe_core::WardrobeConfig;
//!
//! let config = WardrobeConfig::from_toml_str("refresh_after_add = false")?;
//! assert!(!config.refresh_after_add);
//! assert_eq!(config.asset_base, "icons/clothes");
//! # Ok::<(), wardrobe_core::ConfigError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod collaborators;
pub mod config;
pub mod error;
pub mod requests;
pub mod session;
pub mod weather;

pub use collaborators::{
    ClosetListing, ItemStore, OutfitStore, SessionProvider, StaticSession, UserId,
    WeatherProvider, WeatherReport,
};
pub use config::{GeoLocation, WardrobeConfig, CONFIG_ENV};
pub use error::{ConfigError, StoreError, WardrobeError, WardrobeResult};
pub use requests::{Channel, FetchOutcome, RequestToken, RequestTracker};
pub use session::{Collaborators, WardrobeSession};
pub use weather::WeatherCache;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for session work
    pub use crate::{
        Collaborators, FetchOutcome, GeoLocation, WardrobeConfig, WardrobeError,
        WardrobeResult, WardrobeSession,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
