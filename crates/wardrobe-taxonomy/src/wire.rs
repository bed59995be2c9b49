//! Wire-level code decoding
//!
//! The item store serializes every enum and id as either a JSON integer or a
//! decimal string (`"3"`). [`WireCode`] accepts both.

use crate::error::TaxonomyError;
use serde::Deserialize;

/// Integer code as sent by the store, numeric or stringified
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireCode {
    /// JSON number
    Int(i64),
    /// Decimal string
    Text(String),
}

impl WireCode {
    /// Interpret as a non-negative integer
    ///
    /// Returns `None` for negative values and unparsable text.
    #[must_use]
    pub fn non_negative(&self) -> Option<u64> {
        match self {
            Self::Int(n) => u64::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse::<u64>().ok(),
        }
    }

    /// Decode into a bounded code for the named enumeration
    pub(crate) fn into_code(self, kind: &'static str) -> Result<u8, TaxonomyError> {
        let value = self
            .non_negative()
            .ok_or_else(|| TaxonomyError::unknown_name(kind, self.to_string()))?;
        u8::try_from(value).map_err(|_| TaxonomyError::UnknownCode { kind, code: value })
    }
}

impl std::fmt::Display for WireCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
