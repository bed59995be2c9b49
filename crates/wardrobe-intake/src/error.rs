//! Error types for the intake flow

use crate::draft::IntakeField;
use crate::phase::IntakePhase;
use wardrobe_taxonomy::{Category, Subcategory};

/// Errors raised by intake operations
///
/// All of them are local: nothing has been sent to the item store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    /// Subcategory or secondary colour chosen before a category
    #[error("choose a clothing type first")]
    CategoryRequired,

    /// Subcategory that does not belong to the chosen category
    #[error("{subcategory} is not a kind of {category}")]
    InvalidSubcategory {
        category: Category,
        subcategory: Subcategory,
    },

    /// Secondary colour chosen before the main colour
    #[error("choose a main colour first")]
    PrimaryColorRequired,

    /// Submission with required fields unset
    #[error("missing required fields: {}", format_fields(.missing))]
    Incomplete { missing: Vec<IntakeField> },

    /// Edit attempted after a successful submission
    #[error("item already submitted; start another to keep editing")]
    NotEditing,

    /// "Add another" pressed before anything was submitted
    #[error("nothing submitted yet")]
    NotSubmitted,

    /// Transition rejected by the phase table
    #[error("illegal intake transition: {from:?} -> {to:?}")]
    IllegalTransition { from: IntakePhase, to: IntakePhase },
}

impl IntakeError {
    /// Create invalid-subcategory error
    pub fn invalid_subcategory(category: Category, subcategory: Subcategory) -> Self {
        Self::InvalidSubcategory {
            category,
            subcategory,
        }
    }

    /// Fields whose absence caused the error, if any
    #[must_use]
    pub fn missing_fields(&self) -> &[IntakeField] {
        match self {
            Self::Incomplete { missing } => missing,
            _ => &[],
        }
    }
}

fn format_fields(fields: &[IntakeField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result alias for intake operations
pub type IntakeResult<T> = Result<T, IntakeError>;
