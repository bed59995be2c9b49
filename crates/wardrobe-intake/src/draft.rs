//! Intake draft
//!
//! The in-progress description of a garment before it is sent to the store.
//! Garment and colour choices are enums so that a subcategory without a
//! category, or a secondary colour without a main colour, cannot be held.

use std::fmt::{self, Display, Formatter};
use wardrobe_taxonomy::{Category, Color, Formality, Material, Subcategory};

/// Maximum description length accepted while typing
pub const DESCRIPTION_LIMIT: usize = 40;

/// Garment kind chosen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GarmentChoice {
    #[default]
    Unset,
    Category(Category),
    Shaped {
        category: Category,
        subcategory: Subcategory,
    },
}

impl GarmentChoice {
    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            Self::Unset => None,
            Self::Category(category) | Self::Shaped { category, .. } => Some(category),
        }
    }

    #[must_use]
    pub fn subcategory(self) -> Option<Subcategory> {
        match self {
            Self::Shaped { subcategory, .. } => Some(subcategory),
            _ => None,
        }
    }
}

/// Colours committed so far
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColorChoice {
    #[default]
    Unset,
    /// Main colour only; `offer_secondary` tracks the secondary control
    Primary { primary: Color, offer_secondary: bool },
    WithSecondary { primary: Color, secondary: Color },
}

impl ColorChoice {
    #[must_use]
    pub fn primary(&self) -> Option<&Color> {
        match self {
            Self::Unset => None,
            Self::Primary { primary, .. } | Self::WithSecondary { primary, .. } => Some(primary),
        }
    }

    #[must_use]
    pub fn secondary(&self) -> Option<&Color> {
        match self {
            Self::WithSecondary { secondary, .. } => Some(secondary),
            _ => None,
        }
    }

    /// Whether the secondary colour control is shown
    #[must_use]
    pub fn shows_secondary_control(&self) -> bool {
        match self {
            Self::Unset => false,
            Self::Primary {
                offer_secondary, ..
            } => *offer_secondary,
            Self::WithSecondary { .. } => true,
        }
    }
}

/// Colour picker with an uncommitted value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPicker {
    pending: Color,
}

impl ColorPicker {
    #[must_use]
    pub fn pending(&self) -> &Color {
        &self.pending
    }

    pub fn set(&mut self, color: Color) {
        self.pending = color;
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self {
            pending: Color::white(),
        }
    }
}

/// Required field of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakeField {
    Category,
    Subcategory,
    PrimaryColor,
    Material,
    Formality,
}

impl IntakeField {
    /// All required fields, in form order
    pub const REQUIRED: [Self; 5] = [
        Self::Category,
        Self::Subcategory,
        Self::PrimaryColor,
        Self::Material,
        Self::Formality,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "clothing type",
            Self::Subcategory => "shape",
            Self::PrimaryColor => "main colour",
            Self::Material => "material",
            Self::Formality => "formality",
        }
    }
}

impl Display for IntakeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selectable option button of the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakeOption {
    Category(Category),
    Subcategory(Subcategory),
    Material(Material),
    Formality(Formality),
}

/// In-progress garment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeDraft {
    pub garment: GarmentChoice,
    pub colors: ColorChoice,
    pub material: Option<Material>,
    pub formality: Option<Formality>,
    pub description: String,
    pub primary_picker: ColorPicker,
    pub secondary_picker: ColorPicker,
}

impl IntakeDraft {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.garment.category()
    }

    #[inline]
    #[must_use]
    pub fn subcategory(&self) -> Option<Subcategory> {
        self.garment.subcategory()
    }

    /// Whether `option` is currently selected
    #[must_use]
    pub fn is_active(&self, option: IntakeOption) -> bool {
        match option {
            IntakeOption::Category(c) => self.category() == Some(c),
            IntakeOption::Subcategory(s) => self.subcategory() == Some(s),
            IntakeOption::Material(m) => self.material == Some(m),
            IntakeOption::Formality(f) => self.formality == Some(f),
        }
    }

    /// Subcategory buttons to offer; empty until a category is chosen
    #[must_use]
    pub fn subcategory_options(&self) -> Vec<Subcategory> {
        self.category()
            .map(|c| c.subcategories().to_vec())
            .unwrap_or_default()
    }

    /// Required fields still unset, in form order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<IntakeField> {
        IntakeField::REQUIRED
            .into_iter()
            .filter(|field| !self.has(*field))
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        IntakeField::REQUIRED.iter().all(|f| self.has(*f))
    }

    /// Whether `field` is set
    #[must_use]
    pub fn has(&self, field: IntakeField) -> bool {
        match field {
            IntakeField::Category => self.category().is_some(),
            IntakeField::Subcategory => self.subcategory().is_some(),
            IntakeField::PrimaryColor => self.colors.primary().is_some(),
            IntakeField::Material => self.material.is_some(),
            IntakeField::Formality => self.formality.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_misses_everything() {
        let draft = IntakeDraft::new();
        assert_eq!(draft.missing_fields(), IntakeField::REQUIRED.to_vec());
        assert!(draft.subcategory_options().is_empty());
        assert_eq!(draft.primary_picker.pending(), &Color::white());
    }

    #[test]
    fn active_options() {
        let draft = IntakeDraft {
            garment: GarmentChoice::Shaped {
                category: Category::Bottom,
                subcategory: Subcategory::Skirt,
            },
            material: Some(Material::Denim),
            ..IntakeDraft::default()
        };
        assert!(draft.is_active(IntakeOption::Category(Category::Bottom)));
        assert!(!draft.is_active(IntakeOption::Category(Category::Top)));
        assert!(draft.is_active(IntakeOption::Subcategory(Subcategory::Skirt)));
        assert!(draft.is_active(IntakeOption::Material(Material::Denim)));
        assert!(!draft.is_active(IntakeOption::Formality(Formality::Flex)));
        assert_eq!(
            draft.subcategory_options(),
            vec![Subcategory::Pants, Subcategory::Shorts, Subcategory::Skirt]
        );
    }

    #[test]
    fn secondary_control_visibility() {
        assert!(!ColorChoice::Unset.shows_secondary_control());
        let hidden = ColorChoice::Primary {
            primary: Color::white(),
            offer_secondary: false,
        };
        assert!(!hidden.shows_secondary_control());
        assert_eq!(hidden.secondary(), None);
    }
}
