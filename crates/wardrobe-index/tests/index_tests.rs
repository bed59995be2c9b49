//! Index build and mutation properties

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wardrobe_index::{build_index, ClothingIndex};
use wardrobe_resolver::{ImageResolver, StaticAssetCatalog};
use wardrobe_taxonomy::{
    Category, ClothingAttributes, Color, Description, Formality, ItemId, Material, Subcategory,
};

fn arb_item() -> impl Strategy<Value = ClothingAttributes> {
    (
        0u64..40,
        0usize..Category::ALL.len(),
        0usize..Subcategory::ALL.len(),
        0usize..Material::ALL.len(),
        0usize..Formality::ALL.len(),
        "#[0-9a-f]{6}",
    )
        .prop_map(|(id, c, s, m, f, color)| ClothingAttributes {
            id: ItemId::new(id),
            category: Category::ALL[c],
            subcategory: Subcategory::ALL[s],
            primary_color: Color::from_raw(color),
            secondary_color: None,
            material: Material::ALL[m],
            formality: Formality::ALL[f],
        })
}

fn arb_description() -> impl Strategy<Value = Description> {
    (0u64..40, "[A-Z][a-z]{0,8}").prop_map(|(id, text)| Description::new(ItemId::new(id), text))
}

proptest! {
    #[test]
    fn prop_build_is_idempotent(
        items in prop::collection::vec(arb_item(), 0..30),
        descs in prop::collection::vec(arb_description(), 0..30),
    ) {
        let resolver = ImageResolver::new(StaticAssetCatalog::default());
        let first = build_index(&items, &descs, &resolver);
        let second = build_index(&items, &descs, &resolver);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_every_item_is_indexed(items in prop::collection::vec(arb_item(), 0..30)) {
        let resolver = ImageResolver::new(StaticAssetCatalog::default());
        let index = build_index(&items, &[], &resolver);
        for (id, entry) in &index {
            // Duplicate ids keep the data of the last listed item
            let last = items.iter().rev().find(|i| i.id == *id).unwrap();
            prop_assert_eq!(entry.asset.is_some(), resolver.resolve_item(last).is_some());
            prop_assert_eq!(&entry.primary_color, &last.primary_color);
        }
        prop_assert!(items.iter().all(|i| index.contains_key(&i.id)));
    }

    #[test]
    fn prop_remove_touches_one_key(
        items in prop::collection::vec(arb_item(), 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let resolver = ImageResolver::new(StaticAssetCatalog::default());
        let index = ClothingIndex::new();
        index.rebuild(&items, &[], &resolver);
        let before = index.snapshot();

        let victim = pick.get(&items).id;
        index.remove(victim);
        let after = index.snapshot();

        prop_assert_eq!(after.len() + 1, before.len());
        prop_assert!(!after.contains_key(&victim));
        let remaining: Vec<_> = before.iter().filter(|(id, _)| **id != victim).collect();
        let after_entries: Vec<_> = after.iter().collect();
        prop_assert_eq!(remaining, after_entries);
    }
}

#[test]
fn rebuild_replaces_wholesale() {
    let resolver = ImageResolver::new(StaticAssetCatalog::default());
    let boot = ClothingAttributes {
        id: ItemId::new(1),
        category: Category::Shoe,
        subcategory: Subcategory::Boot,
        primary_color: Color::white(),
        secondary_color: None,
        material: Material::Leather,
        formality: Formality::Flex,
    };
    let index = ClothingIndex::new();
    index.rebuild(std::slice::from_ref(&boot), &[], &resolver);
    assert_eq!(index.len(), 1);

    let scarf = ClothingAttributes {
        id: ItemId::new(2),
        category: Category::Accessory,
        subcategory: Subcategory::Scarf,
        ..boot
    };
    index.rebuild(&[scarf], &[Description::new(ItemId::new(2), "Red Scarf")], &resolver);
    assert!(!index.contains(ItemId::new(1)));
    assert_eq!(index.get(ItemId::new(2)).unwrap().description, "Red Scarf");
}
