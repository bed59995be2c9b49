//! Material and formality enumerations

use crate::category::normalize_name;
use crate::error::{TaxonomyError, TaxonomyResult};
use crate::wire::WireCode;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Fabric family of a garment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "u8")]
pub enum Material {
    /// Wool or cotton knit and weave
    WoolCotton,
    /// Plastic, nylon and other synthetics
    PlasticNylon,
    /// Leather or faux leather
    Leather,
    /// Denim
    Denim,
    /// Fleece, fur and similar soft piles
    SoftFur,
    /// Spandex and stretch blends
    StretchySpandex,
    /// Anything else
    Other,
}

impl Material {
    /// All materials in code order
    pub const ALL: [Self; 7] = [
        Self::WoolCotton,
        Self::PlasticNylon,
        Self::Leather,
        Self::Denim,
        Self::SoftFur,
        Self::StretchySpandex,
        Self::Other,
    ];

    /// Integer wire code
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode from integer wire code
    pub fn from_code(code: u8) -> TaxonomyResult<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(TaxonomyError::UnknownCode {
                kind: "material",
                code: u64::from(code),
            })
    }

    /// Denim and leather both render as jeans-style bottoms
    #[inline]
    #[must_use]
    pub fn is_jean_like(self) -> bool {
        matches!(self, Self::Denim | Self::Leather)
    }

    /// Stable kebab-case name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WoolCotton => "wool-cotton",
            Self::PlasticNylon => "plastic-nylon",
            Self::Leather => "leather",
            Self::Denim => "denim",
            Self::SoftFur => "soft-fur",
            Self::StretchySpandex => "stretchy-spandex",
            Self::Other => "other",
        }
    }

    /// Label shown on the intake form
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WoolCotton => "Cotton/Wool",
            Self::PlasticNylon => "Synthetic",
            Self::Leather => "Leather",
            Self::Denim => "Denim",
            Self::SoftFur => "Fur",
            Self::StretchySpandex => "Spandex",
            Self::Other => "Other",
        }
    }
}

impl Display for Material {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|m| normalize_name(m.as_str()) == wanted || normalize_name(m.label()) == wanted)
            .ok_or_else(|| TaxonomyError::unknown_name("material", s))
    }
}

impl TryFrom<WireCode> for Material {
    type Error = TaxonomyError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        Self::from_code(value.into_code("material")?)
    }
}

impl From<Material> for u8 {
    fn from(value: Material) -> Self {
        value.code()
    }
}

/// Dress code of a garment or a requested outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "WireCode", into = "u8")]
pub enum Formality {
    /// Formal wear
    Formal,
    /// Casual wear
    Informal,
    /// Works either way
    Flex,
}

impl Formality {
    /// All formalities in code order
    pub const ALL: [Self; 3] = [Self::Formal, Self::Informal, Self::Flex];

    /// Integer wire code
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode from integer wire code
    pub fn from_code(code: u8) -> TaxonomyResult<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(TaxonomyError::UnknownCode {
                kind: "formality",
                code: u64::from(code),
            })
    }

    /// Whether this is [`Formality::Formal`]
    #[inline]
    #[must_use]
    pub fn is_formal(self) -> bool {
        self == Self::Formal
    }

    /// Next value of the generation view's formality toggle
    ///
    /// Rotates Formal → Informal → Flex → Formal.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Formal => Self::Informal,
            Self::Informal => Self::Flex,
            Self::Flex => Self::Formal,
        }
    }

    /// Stable name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Informal => "informal",
            Self::Flex => "flex",
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Formal => "Formal",
            Self::Informal => "Informal",
            Self::Flex => "Flex",
        }
    }
}

impl Default for Formality {
    /// The generation view starts at informal
    fn default() -> Self {
        Self::Informal
    }
}

impl Display for Formality {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formality {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| TaxonomyError::unknown_name("formality", s))
    }
}

impl TryFrom<WireCode> for Formality {
    type Error = TaxonomyError;

    fn try_from(value: WireCode) -> Result<Self, Self::Error> {
        Self::from_code(value.into_code("formality")?)
    }
}

impl From<Formality> for u8 {
    fn from(value: Formality) -> Self {
        value.code()
    }
}
