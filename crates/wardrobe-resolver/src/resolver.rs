//! Image resolver bound to an asset catalog

use crate::asset::{AssetCatalog, AssetKey, AssetRef, StaticAssetCatalog};
use crate::rules::resolve_key;
use wardrobe_taxonomy::{Category, ClothingAttributes, Formality, Material, Subcategory};

/// Resolves clothing attributes to image references through a catalog
///
/// `None` from any method is a recoverable display gap: callers render
/// nothing for that item.
#[derive(Debug, Clone, Default)]
pub struct ImageResolver<C = StaticAssetCatalog> {
    catalog: C,
}

impl<C: AssetCatalog> ImageResolver<C> {
    /// Create resolver over `catalog`
    #[inline]
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Get the underlying catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Resolve raw attributes
    #[must_use]
    pub fn resolve(
        &self,
        category: Category,
        subcategory: Subcategory,
        material: Material,
        formality: Formality,
    ) -> Option<AssetRef> {
        resolve_key(category, subcategory, material, formality).map(|key| self.catalog.lookup(key))
    }

    /// Resolve a stored item
    #[must_use]
    pub fn resolve_item(&self, item: &ClothingAttributes) -> Option<AssetRef> {
        self.resolve(item.category, item.subcategory, item.material, item.formality)
    }

    /// Classify a stored item without consulting the catalog
    #[inline]
    #[must_use]
    pub fn classify(&self, item: &ClothingAttributes) -> Option<AssetKey> {
        resolve_key(item.category, item.subcategory, item.material, item.formality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_taxonomy::{Color, ItemId};

    #[derive(Debug)]
    struct NamedCatalog;

    impl AssetCatalog for NamedCatalog {
        fn lookup(&self, key: AssetKey) -> AssetRef {
            AssetRef::new(format!("test:{key}"))
        }
    }

    #[test]
    fn uses_injected_catalog() {
        let resolver = ImageResolver::new(NamedCatalog);
        let asset = resolver.resolve(
            Category::Accessory,
            Subcategory::Headwear,
            Material::Other,
            Formality::Flex,
        );
        assert_eq!(asset, Some(AssetRef::new("test:hat")));
    }

    #[test]
    fn resolve_item_reads_all_attributes() {
        let resolver = ImageResolver::<StaticAssetCatalog>::default();
        let item = ClothingAttributes {
            id: ItemId::new(3),
            category: Category::Bottom,
            subcategory: Subcategory::Pants,
            primary_color: Color::white(),
            secondary_color: None,
            material: Material::Denim,
            formality: Formality::Informal,
        };
        assert_eq!(resolver.classify(&item), Some(AssetKey::Jeans));
        assert_eq!(
            resolver.resolve_item(&item).map(|a| a.as_str().to_string()),
            Some("icons/clothes/jeans.png".to_string())
        );
    }
}
