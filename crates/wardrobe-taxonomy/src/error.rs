//! Error types for taxonomy parsing

/// Errors raised while decoding taxonomy values from wire or user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    /// Integer code outside the enumeration
    #[error("unknown {kind} code: {code}")]
    UnknownCode {
        /// Enumeration name
        kind: &'static str,
        /// Offending code
        code: u64,
    },

    /// Name that matches no variant
    #[error("unknown {kind} name: '{name}'")]
    UnknownName {
        /// Enumeration name
        kind: &'static str,
        /// Offending input
        name: String,
    },

    /// Color string that is not `#rgb` or `#rrggbb`
    #[error("invalid color: '{0}'")]
    InvalidColor(String),

    /// Item identifier that is not a non-negative integer
    #[error("invalid item id: '{0}'")]
    InvalidId(String),
}

impl TaxonomyError {
    /// Create unknown-name error
    pub fn unknown_name(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownName {
            kind,
            name: name.into(),
        }
    }
}

/// Result alias for taxonomy operations
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;
