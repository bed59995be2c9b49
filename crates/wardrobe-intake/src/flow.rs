//! Intake flow
//!
//! [`IntakeFlow`] owns one draft and applies the form's actions to it.
//! Every action is checked against the phase table; edits after a
//! successful submission fail with [`IntakeError::NotEditing`] until
//! [`IntakeFlow::add_another`] starts a fresh draft.

use crate::draft::{ColorChoice, GarmentChoice, IntakeDraft, IntakeField, DESCRIPTION_LIMIT};
use crate::error::{IntakeError, IntakeResult};
use crate::normalize::{normalize_description, truncate_chars};
use crate::phase::{validate_transition, IntakePhase};
use wardrobe_taxonomy::{Category, Color, Formality, Material, NewClothing, Subcategory};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Editing,
    Rejected(Vec<IntakeField>),
    Complete,
}

/// Stateful intake form
#[derive(Debug, Clone)]
pub struct IntakeFlow {
    draft: IntakeDraft,
    status: Status,
}

impl Default for IntakeFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeFlow {
    /// Create flow with an empty draft
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: IntakeDraft::new(),
            status: Status::Editing,
        }
    }

    #[inline]
    #[must_use]
    pub fn draft(&self) -> &IntakeDraft {
        &self.draft
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> IntakePhase {
        match self.status {
            Status::Editing => IntakePhase::of(&self.draft),
            Status::Rejected(_) => IntakePhase::Rejected,
            Status::Complete => IntakePhase::Complete,
        }
    }

    /// Fields reported missing by the last rejected submission
    #[must_use]
    pub fn rejection(&self) -> Option<&[IntakeField]> {
        match &self.status {
            Status::Rejected(missing) => Some(missing),
            _ => None,
        }
    }

    /// Press a clothing type button
    ///
    /// Pressing the chosen type again deselects it. Any change of type
    /// clears the subcategory; a cleared type also drops the secondary
    /// colour.
    pub fn select_category(&mut self, category: Category) -> IntakeResult<()> {
        self.edit(|draft| {
            if draft.category() == Some(category) {
                draft.garment = GarmentChoice::Unset;
                if let Some(primary) = draft.colors.primary().cloned() {
                    draft.colors = ColorChoice::Primary {
                        primary,
                        offer_secondary: draft.colors.shows_secondary_control(),
                    };
                }
            } else {
                draft.garment = GarmentChoice::Category(category);
            }
            Ok(())
        })
    }

    /// Press a shape button; pressing the chosen shape again deselects it
    pub fn select_subcategory(&mut self, subcategory: Subcategory) -> IntakeResult<()> {
        self.edit(|draft| {
            let category = draft.category().ok_or(IntakeError::CategoryRequired)?;
            if !category.admits(subcategory) {
                return Err(IntakeError::invalid_subcategory(category, subcategory));
            }
            draft.garment = if draft.subcategory() == Some(subcategory) {
                GarmentChoice::Category(category)
            } else {
                GarmentChoice::Shaped {
                    category,
                    subcategory,
                }
            };
            Ok(())
        })
    }

    /// Move the main colour picker
    pub fn set_primary_picker(&mut self, color: Color) -> IntakeResult<()> {
        self.edit(|draft| {
            draft.primary_picker.set(color);
            Ok(())
        })
    }

    /// Confirm or un-confirm the main colour
    ///
    /// Confirming commits the picker's colour and shows the secondary
    /// control. Un-confirming clears both colours and hides it.
    pub fn toggle_primary(&mut self) -> IntakeResult<()> {
        self.edit(|draft| {
            draft.colors = match draft.colors {
                ColorChoice::Unset => ColorChoice::Primary {
                    primary: draft.primary_picker.pending().clone(),
                    offer_secondary: true,
                },
                _ => ColorChoice::Unset,
            };
            Ok(())
        })
    }

    /// Move the secondary colour picker
    ///
    /// Only possible while the secondary control is shown.
    pub fn set_secondary_picker(&mut self, color: Color) -> IntakeResult<()> {
        self.edit(|draft| {
            require_secondary_control(draft)?;
            draft.secondary_picker.set(color);
            Ok(())
        })
    }

    /// Confirm or un-confirm the secondary colour
    ///
    /// Fails once [`IntakeFlow::no_secondary`] has hidden the control.
    pub fn toggle_secondary(&mut self) -> IntakeResult<()> {
        self.edit(|draft| {
            if draft.category().is_none() {
                return Err(IntakeError::CategoryRequired);
            }
            let primary = draft
                .colors
                .primary()
                .cloned()
                .ok_or(IntakeError::PrimaryColorRequired)?;
            require_secondary_control(draft)?;
            draft.colors = match draft.colors {
                ColorChoice::WithSecondary { .. } => ColorChoice::Primary {
                    primary,
                    offer_secondary: true,
                },
                _ => ColorChoice::WithSecondary {
                    primary,
                    secondary: draft.secondary_picker.pending().clone(),
                },
            };
            Ok(())
        })
    }

    /// Decline a secondary colour and hide its control
    pub fn no_secondary(&mut self) -> IntakeResult<()> {
        self.edit(|draft| {
            if let Some(primary) = draft.colors.primary().cloned() {
                draft.colors = ColorChoice::Primary {
                    primary,
                    offer_secondary: false,
                };
            }
            Ok(())
        })
    }

    /// Press a material button; pressing the chosen material again deselects it
    pub fn select_material(&mut self, material: Material) -> IntakeResult<()> {
        self.edit(|draft| {
            draft.material = toggle(draft.material, material);
            Ok(())
        })
    }

    /// Press a formality button; pressing the chosen formality again deselects it
    pub fn select_formality(&mut self, formality: Formality) -> IntakeResult<()> {
        self.edit(|draft| {
            draft.formality = toggle(draft.formality, formality);
            Ok(())
        })
    }

    /// Replace the description text, truncated as typed
    pub fn set_description(&mut self, text: &str) -> IntakeResult<()> {
        self.edit(|draft| {
            draft.description = truncate_chars(text, DESCRIPTION_LIMIT).to_string();
            Ok(())
        })
    }

    /// Submit the draft
    ///
    /// On success the draft is discarded and the normalized item returned
    /// for the store. On failure the draft is kept and the flow moves to
    /// [`IntakePhase::Rejected`].
    pub fn submit(&mut self) -> IntakeResult<NewClothing> {
        let from = self.phase();
        if from == IntakePhase::Complete {
            return Err(IntakeError::NotEditing);
        }

        let Some(item) = self.assemble() else {
            validate_transition(from, IntakePhase::Rejected)?;
            let missing = self.draft.missing_fields();
            self.status = Status::Rejected(missing.clone());
            let err = IntakeError::Incomplete { missing };
            tracing::info!("Intake rejected: {}", err);
            return Err(err);
        };

        validate_transition(from, IntakePhase::Complete)?;
        self.draft = IntakeDraft::new();
        self.status = Status::Complete;
        tracing::debug!(
            category = %item.category,
            subcategory = %item.subcategory,
            "Intake submitted"
        );
        Ok(item)
    }

    /// Start a fresh draft after a successful submission
    pub fn add_another(&mut self) -> IntakeResult<()> {
        if self.phase() != IntakePhase::Complete {
            return Err(IntakeError::NotSubmitted);
        }
        validate_transition(IntakePhase::Complete, IntakePhase::Empty)?;
        self.reset();
        Ok(())
    }

    /// Discard everything, e.g. when the form is closed
    pub fn reset(&mut self) {
        self.draft = IntakeDraft::new();
        self.status = Status::Editing;
    }

    fn assemble(&self) -> Option<NewClothing> {
        let draft = &self.draft;
        let GarmentChoice::Shaped {
            category,
            subcategory,
        } = draft.garment
        else {
            return None;
        };
        Some(NewClothing {
            category,
            subcategory,
            primary_color: draft.colors.primary()?.clone(),
            secondary_color: draft.colors.secondary().cloned(),
            material: draft.material?,
            formality: draft.formality?,
            description: normalize_description(&draft.description),
        })
    }

    fn edit<F>(&mut self, apply: F) -> IntakeResult<()>
    where
        F: FnOnce(&mut IntakeDraft) -> IntakeResult<()>,
    {
        let from = self.phase();
        if from == IntakePhase::Complete {
            return Err(IntakeError::NotEditing);
        }

        let mut next = self.draft.clone();
        apply(&mut next)?;
        validate_transition(from, IntakePhase::of(&next))?;

        self.draft = next;
        self.status = Status::Editing;
        Ok(())
    }
}

fn require_secondary_control(draft: &IntakeDraft) -> IntakeResult<()> {
    if draft.colors.shows_secondary_control() {
        Ok(())
    } else {
        let phase = IntakePhase::of(draft);
        Err(IntakeError::IllegalTransition {
            from: phase,
            to: phase,
        })
    }
}

fn toggle<T: PartialEq>(current: Option<T>, pressed: T) -> Option<T> {
    match current {
        Some(value) if value == pressed => None,
        _ => Some(pressed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> IntakeFlow {
        let mut flow = IntakeFlow::new();
        flow.select_category(Category::Bottom).unwrap();
        flow.select_subcategory(Subcategory::Pants).unwrap();
        flow.set_primary_picker(Color::from_raw("#123456")).unwrap();
        flow.toggle_primary().unwrap();
        flow.select_material(Material::Denim).unwrap();
        flow.select_formality(Formality::Informal).unwrap();
        flow
    }

    #[test]
    fn double_toggle_subcategory_unsets() {
        let mut flow = IntakeFlow::new();
        flow.select_category(Category::Top).unwrap();
        flow.select_subcategory(Subcategory::NoSleeve).unwrap();
        assert_eq!(flow.draft().subcategory(), Some(Subcategory::NoSleeve));
        flow.select_subcategory(Subcategory::NoSleeve).unwrap();
        assert_eq!(flow.draft().subcategory(), None);
        assert_eq!(flow.draft().category(), Some(Category::Top));
    }

    #[test]
    fn subcategory_requires_matching_category() {
        let mut flow = IntakeFlow::new();
        assert_eq!(
            flow.select_subcategory(Subcategory::Boot),
            Err(IntakeError::CategoryRequired)
        );
        flow.select_category(Category::Top).unwrap();
        assert_eq!(
            flow.select_subcategory(Subcategory::Boot),
            Err(IntakeError::invalid_subcategory(Category::Top, Subcategory::Boot))
        );
    }

    #[test]
    fn changing_category_clears_subcategory() {
        let mut flow = IntakeFlow::new();
        flow.select_category(Category::Top).unwrap();
        flow.select_subcategory(Subcategory::LongSleeve).unwrap();
        flow.select_category(Category::Bottom).unwrap();
        assert_eq!(flow.draft().garment, GarmentChoice::Category(Category::Bottom));

        flow.select_subcategory(Subcategory::Skirt).unwrap();
        flow.select_category(Category::Bottom).unwrap();
        assert_eq!(flow.draft().garment, GarmentChoice::Unset);
    }

    #[test]
    fn secondary_requires_category_and_primary() {
        let mut flow = IntakeFlow::new();
        flow.toggle_primary().unwrap();
        assert_eq!(flow.toggle_secondary(), Err(IntakeError::CategoryRequired));

        flow.select_category(Category::Accessory).unwrap();
        flow.set_secondary_picker(Color::from_raw("#000000")).unwrap();
        flow.toggle_secondary().unwrap();
        assert_eq!(flow.draft().colors.secondary(), Some(&Color::from_raw("#000000")));

        flow.toggle_primary().unwrap();
        assert_eq!(flow.draft().colors, ColorChoice::Unset);
        assert_eq!(flow.toggle_secondary(), Err(IntakeError::PrimaryColorRequired));
    }

    #[test]
    fn deselecting_category_drops_secondary() {
        let mut flow = IntakeFlow::new();
        flow.select_category(Category::Accessory).unwrap();
        flow.toggle_primary().unwrap();
        flow.toggle_secondary().unwrap();
        flow.select_category(Category::Accessory).unwrap();
        assert_eq!(flow.draft().colors.secondary(), None);
        assert_eq!(flow.draft().colors.primary(), Some(&Color::white()));
    }

    #[test]
    fn no_secondary_hides_control() {
        let mut flow = IntakeFlow::new();
        flow.select_category(Category::Shoe).unwrap();
        flow.toggle_primary().unwrap();
        assert!(flow.draft().colors.shows_secondary_control());
        flow.toggle_secondary().unwrap();
        flow.no_secondary().unwrap();
        assert!(!flow.draft().colors.shows_secondary_control());
        assert_eq!(flow.draft().colors.secondary(), None);
    }

    #[test]
    fn hidden_secondary_control_rejects_secondary() {
        let mut flow = IntakeFlow::new();
        flow.select_category(Category::Top).unwrap();
        flow.toggle_primary().unwrap();
        flow.no_secondary().unwrap();
        let before = flow.draft().clone();

        assert!(matches!(
            flow.set_secondary_picker(Color::from_raw("#ff0000")),
            Err(IntakeError::IllegalTransition { .. })
        ));
        assert!(matches!(
            flow.toggle_secondary(),
            Err(IntakeError::IllegalTransition { .. })
        ));
        assert_eq!(flow.draft(), &before);
        assert_eq!(flow.draft().colors.secondary(), None);
        assert!(!flow.draft().colors.shows_secondary_control());
    }

    #[test]
    fn secondary_picker_waits_for_primary() {
        let mut flow = IntakeFlow::new();
        flow.select_category(Category::Top).unwrap();
        assert!(flow.set_secondary_picker(Color::from_raw("#000000")).is_err());
        flow.toggle_primary().unwrap();
        flow.set_secondary_picker(Color::from_raw("#000000")).unwrap();
    }

    #[test]
    fn rejected_submission_keeps_draft() {
        let mut flow = IntakeFlow::new();
        flow.select_category(Category::Shoe).unwrap();
        flow.select_material(Material::Leather).unwrap();
        let before = flow.draft().clone();

        let err = flow.submit().unwrap_err();
        assert_eq!(
            err.missing_fields(),
            &[IntakeField::Subcategory, IntakeField::PrimaryColor, IntakeField::Formality]
        );
        assert_eq!(flow.phase(), IntakePhase::Rejected);
        assert_eq!(flow.draft(), &before);

        flow.select_subcategory(Subcategory::Boot).unwrap();
        assert_eq!(flow.phase(), IntakePhase::SubcategoryChosen);
        assert!(flow.rejection().is_none());
    }

    #[test]
    fn successful_submission_discards_draft() {
        let mut flow = filled();
        flow.set_description("comfy jeans, size 32").unwrap();
        let item = flow.submit().unwrap();

        assert_eq!(item.category, Category::Bottom);
        assert_eq!(item.primary_color, Color::from_raw("#123456"));
        assert_eq!(item.secondary_color, None);
        assert_eq!(item.description, "Comfy Jeans Size ");
        assert_eq!(flow.phase(), IntakePhase::Complete);
        assert_eq!(flow.draft(), &IntakeDraft::new());

        assert_eq!(flow.select_material(Material::Other), Err(IntakeError::NotEditing));
        assert_eq!(flow.submit(), Err(IntakeError::NotEditing));

        flow.add_another().unwrap();
        assert_eq!(flow.phase(), IntakePhase::Empty);
    }

    #[test]
    fn add_another_only_after_submit() {
        let mut flow = filled();
        assert_eq!(flow.add_another(), Err(IntakeError::NotSubmitted));
    }

    #[test]
    fn description_truncated_while_typing() {
        let mut flow = IntakeFlow::new();
        flow.set_description(&"a".repeat(55)).unwrap();
        assert_eq!(flow.draft().description.len(), DESCRIPTION_LIMIT);
    }
}
