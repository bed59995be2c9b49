//! Wire codes and name parsing across the taxonomy

use proptest::prelude::*;
use wardrobe_taxonomy::{Category, Formality, Material, Subcategory};

#[test]
fn every_category_offers_three_distinct_subcategories() {
    for category in Category::ALL {
        let subs = category.subcategories();
        assert_ne!(subs[0], subs[1]);
        assert_ne!(subs[1], subs[2]);
        assert_ne!(subs[0], subs[2]);
        assert!(subs.iter().all(|s| category.admits(*s)));
    }
}

proptest! {
    #[test]
    fn prop_codes_decode_only_inside_range(code in any::<u8>()) {
        prop_assert_eq!(Category::from_code(code).is_ok(), usize::from(code) < Category::ALL.len());
        prop_assert_eq!(Subcategory::from_code(code).is_ok(), usize::from(code) < Subcategory::ALL.len());
        prop_assert_eq!(Material::from_code(code).is_ok(), usize::from(code) < Material::ALL.len());
        prop_assert_eq!(Formality::from_code(code).is_ok(), usize::from(code) < Formality::ALL.len());
    }

    #[test]
    fn prop_decoded_code_is_stable(code in 0u8..18) {
        let sub = Subcategory::from_code(code).unwrap();
        prop_assert_eq!(sub.code(), code);
        prop_assert_eq!(sub.as_str().parse::<Subcategory>().unwrap(), sub);
    }
}
