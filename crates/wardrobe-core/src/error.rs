//! Error types for the wardrobe session
//!
//! Collaborator failures surface as [`StoreError`]; the session logs them
//! and degrades to an empty result rather than propagating. The aggregate
//! [`WardrobeError`] is what public operations return when a caller has to
//! know.

use std::path::PathBuf;
use wardrobe_intake::IntakeError;
use wardrobe_taxonomy::TaxonomyError;

/// Errors reported by the item store, outfit store or weather provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Service unreachable or timed out
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Service answered with a failure
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Response could not be decoded
    #[error("malformed response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

impl From<TaxonomyError> for StoreError {
    fn from(err: TaxonomyError) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Errors loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::WardrobeConfig`]
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Main wardrobe error type
#[derive(Debug, thiserror::Error)]
pub enum WardrobeError {
    #[error("taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("intake error: {0}")]
    Intake(#[from] IntakeError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// No signed-in user
    #[error("no active session")]
    NoSession,
}

impl WardrobeError {
    /// Whether the user can carry on after this error
    ///
    /// Everything but a broken configuration is.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

/// Result alias for wardrobe operations
pub type WardrobeResult<T> = Result<T, WardrobeError>;
