//! Intake state machine properties

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wardrobe_intake::{
    allowed_transitions, normalize_description, validate_transition, IntakeError, IntakeField,
    IntakeFlow, IntakePhase,
};
use wardrobe_taxonomy::{Category, Color, Formality, Material, Subcategory};

#[derive(Debug, Clone)]
enum Action {
    Category(Category),
    Subcategory(Subcategory),
    TogglePrimary,
    ToggleSecondary,
    NoSecondary,
    Material(Material),
    Formality(Formality),
    Describe(String),
    Submit,
    AddAnother,
}

fn arb_phase() -> impl Strategy<Value = IntakePhase> {
    prop_oneof![
        Just(IntakePhase::Empty),
        Just(IntakePhase::CategoryChosen),
        Just(IntakePhase::SubcategoryChosen),
        Just(IntakePhase::ColorsChosen),
        Just(IntakePhase::MaterialChosen),
        Just(IntakePhase::FormalityChosen),
        Just(IntakePhase::Rejected),
        Just(IntakePhase::Complete),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(Category::ALL.to_vec()).prop_map(Action::Category),
        prop::sample::select(Subcategory::ALL.to_vec()).prop_map(Action::Subcategory),
        Just(Action::TogglePrimary),
        Just(Action::ToggleSecondary),
        Just(Action::NoSecondary),
        prop::sample::select(Material::ALL.to_vec()).prop_map(Action::Material),
        prop::sample::select(Formality::ALL.to_vec()).prop_map(Action::Formality),
        "[a-z0-9 ,!]{0,60}".prop_map(Action::Describe),
        Just(Action::Submit),
        Just(Action::AddAnother),
    ]
}

fn apply(flow: &mut IntakeFlow, action: &Action) -> Result<(), IntakeError> {
    match action {
        Action::Category(c) => flow.select_category(*c),
        Action::Subcategory(s) => flow.select_subcategory(*s),
        Action::TogglePrimary => flow.toggle_primary(),
        Action::ToggleSecondary => flow.toggle_secondary(),
        Action::NoSecondary => flow.no_secondary(),
        Action::Material(m) => flow.select_material(*m),
        Action::Formality(f) => flow.select_formality(*f),
        Action::Describe(text) => flow.set_description(text),
        Action::Submit => flow.submit().map(|_| ()),
        Action::AddAnother => flow.add_another(),
    }
}

#[test]
fn literal_normalization() {
    assert_eq!(normalize_description("Casual, cool! top 2"), "Casual Cool Top ");
}

#[test]
fn incomplete_draft_never_submits() {
    let mut flow = IntakeFlow::new();
    flow.select_category(Category::FullBody).unwrap();
    flow.select_subcategory(Subcategory::Romper).unwrap();
    flow.toggle_primary().unwrap();
    flow.select_material(Material::WoolCotton).unwrap();

    match flow.submit() {
        Err(IntakeError::Incomplete { missing }) => {
            assert_eq!(missing, vec![IntakeField::Formality]);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(flow.rejection(), Some(&[IntakeField::Formality][..]));
}

#[test]
fn secondary_colour_reaches_submission() {
    let mut flow = IntakeFlow::new();
    flow.select_category(Category::Outerwear).unwrap();
    flow.select_subcategory(Subcategory::Cardigan).unwrap();
    flow.set_primary_picker(Color::from_raw("#aa0000")).unwrap();
    flow.toggle_primary().unwrap();
    flow.set_secondary_picker(Color::from_raw("#00aa00")).unwrap();
    flow.toggle_secondary().unwrap();
    flow.select_material(Material::WoolCotton).unwrap();
    flow.select_formality(Formality::Informal).unwrap();

    let item = flow.submit().unwrap();
    assert_eq!(item.primary_color, Color::from_raw("#aa0000"));
    assert_eq!(item.secondary_color, Some(Color::from_raw("#00aa00")));
}

proptest! {
    #[test]
    fn prop_all_transitions_are_subset_of_allowed(from in arb_phase(), to in arb_phase()) {
        let res = validate_transition(from, to);
        let allowed = allowed_transitions(from);
        prop_assert_eq!(res.is_ok(), allowed.contains(&to));
    }

    #[test]
    fn prop_action_sequences_keep_invariants(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut flow = IntakeFlow::new();
        for action in &actions {
            let before = flow.phase();
            let control_shown = flow.draft().colors.shows_secondary_control();
            let result = apply(&mut flow, action);
            let after = flow.phase();

            if matches!(action, Action::ToggleSecondary) && !control_shown {
                prop_assert!(result.is_err());
            }

            if result.is_ok() {
                prop_assert!(before == after || allowed_transitions(before).contains(&after));
            }

            let draft = flow.draft();
            if let Some(sub) = draft.subcategory() {
                prop_assert_eq!(draft.category(), Some(sub.category()));
            }
            if draft.colors.secondary().is_some() {
                prop_assert!(draft.colors.primary().is_some());
                prop_assert!(draft.category().is_some());
            }
            prop_assert!(draft.description.chars().count() <= 40);
            if after == IntakePhase::Complete {
                prop_assert!(draft.missing_fields().len() == IntakeField::REQUIRED.len());
            }
        }
    }

    #[test]
    fn prop_normalized_alphabet(text in ".{0,80}") {
        let normalized = normalize_description(&text);
        prop_assert!(normalized.chars().all(|c| c.is_ascii_alphabetic() || c == ' '));
        for word in normalized.split(' ').filter(|w| !w.is_empty()) {
            prop_assert!(word.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
        }
    }
}
