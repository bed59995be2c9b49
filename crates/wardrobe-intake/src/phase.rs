//! Intake phases and the transitions between them
//!
//! While editing, the phase is the furthest point reached in form order:
//!
//! ```text
//! Empty → CategoryChosen → SubcategoryChosen → ColorsChosen
//!       → MaterialChosen → FormalityChosen
//! ```
//!
//! Options may be picked in any order and deselected, so editing phases
//! move freely among themselves. A submission leaves editing for
//! `Complete` (only from `FormalityChosen`) or `Rejected`.

use crate::draft::{IntakeDraft, IntakeField};
use crate::error::IntakeError;

/// Phase of the intake flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakePhase {
    Empty,
    CategoryChosen,
    SubcategoryChosen,
    ColorsChosen,
    MaterialChosen,
    /// Every required field set
    FormalityChosen,
    /// Submission refused; the draft is kept
    Rejected,
    /// Submission accepted; the draft is gone
    Complete,
}

impl IntakePhase {
    /// Phases reachable by editing
    pub const EDITING: [Self; 6] = [
        Self::Empty,
        Self::CategoryChosen,
        Self::SubcategoryChosen,
        Self::ColorsChosen,
        Self::MaterialChosen,
        Self::FormalityChosen,
    ];

    /// Editing phase of `draft`
    #[must_use]
    pub fn of(draft: &IntakeDraft) -> Self {
        let reached = IntakeField::REQUIRED
            .iter()
            .take_while(|f| draft.has(**f))
            .count();
        Self::EDITING[reached]
    }

    #[inline]
    #[must_use]
    pub fn is_editing(self) -> bool {
        !matches!(self, Self::Rejected | Self::Complete)
    }
}

/// Phases reachable from `from`
#[must_use]
pub fn allowed_transitions(from: IntakePhase) -> Vec<IntakePhase> {
    let mut next = match from {
        IntakePhase::Complete => return vec![IntakePhase::Empty],
        IntakePhase::Rejected => vec![IntakePhase::Rejected],
        IntakePhase::FormalityChosen => vec![IntakePhase::Complete],
        _ => vec![IntakePhase::Rejected],
    };
    next.extend(IntakePhase::EDITING);
    next
}

/// Check a transition against [`allowed_transitions`]
pub fn validate_transition(from: IntakePhase, to: IntakePhase) -> Result<(), IntakeError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(IntakeError::IllegalTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_taxonomy::{Category, Formality, Material};
    use crate::draft::GarmentChoice;

    #[test]
    fn phase_is_furthest_prefix() {
        let mut draft = IntakeDraft::new();
        assert_eq!(IntakePhase::of(&draft), IntakePhase::Empty);

        draft.material = Some(Material::Leather);
        draft.formality = Some(Formality::Formal);
        assert_eq!(IntakePhase::of(&draft), IntakePhase::Empty);

        draft.garment = GarmentChoice::Category(Category::Shoe);
        assert_eq!(IntakePhase::of(&draft), IntakePhase::CategoryChosen);
    }

    #[test]
    fn complete_only_from_formality_chosen() {
        assert!(validate_transition(IntakePhase::FormalityChosen, IntakePhase::Complete).is_ok());
        assert!(validate_transition(IntakePhase::MaterialChosen, IntakePhase::Complete).is_err());
        assert!(validate_transition(IntakePhase::FormalityChosen, IntakePhase::Rejected).is_err());
    }

    #[test]
    fn complete_only_restarts() {
        assert_eq!(allowed_transitions(IntakePhase::Complete), vec![IntakePhase::Empty]);
        assert!(validate_transition(IntakePhase::Complete, IntakePhase::CategoryChosen).is_err());
    }
}
