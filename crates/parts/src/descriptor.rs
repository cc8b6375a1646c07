//! The persisted "which appearance is borrowed" reference.

use facadekit_core::{ContentLookup, ItemStack, ItemTag, RegistryKey, HOST_NAMESPACE};
use tracing::debug;

/// Tag field holding the borrowed item's identifier.
pub const NBT_ITEM_ID: &str = "item";

/// Identifies the item whose block a facade shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeDescriptor {
    appearance: RegistryKey,
}

impl FacadeDescriptor {
    /// Wrap an appearance id. Eligibility must already have been checked.
    pub fn encode(appearance: RegistryKey) -> Self {
        Self { appearance }
    }

    /// The borrowed item's identifier.
    pub fn appearance(&self) -> &RegistryKey {
        &self.appearance
    }

    /// Persisted form.
    pub fn to_tag(&self) -> ItemTag {
        let mut tag = ItemTag::new();
        tag.put(NBT_ITEM_ID, self.appearance.to_string());
        tag
    }

    /// Read back a persisted descriptor. Missing or unparsable ids yield `None`.
    ///
    /// Unqualified ids belong to the host namespace.
    pub fn from_tag(tag: &ItemTag) -> Option<Self> {
        let raw = tag.get(NBT_ITEM_ID)?;
        match RegistryKey::parse_with_default_namespace(raw, HOST_NAMESPACE) {
            Ok(appearance) => Some(Self { appearance }),
            Err(err) => {
                debug!(raw, %err, "Ignoring malformed facade id");
                None
            }
        }
    }

    /// Resolve against current content.
    ///
    /// `None` when the item is gone or is the air sentinel. Never cached: the
    /// host may add or remove content between calls.
    pub fn decode(&self, content: &dyn ContentLookup) -> Option<ItemStack> {
        if self.appearance.is_air() {
            return None;
        }
        content.item(&self.appearance)?;
        Some(ItemStack::new(self.appearance.clone(), 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facadekit_assets::{ContentRegistry, ItemDescriptor};

    fn content() -> ContentRegistry {
        ContentRegistry::new(
            vec![],
            vec![
                ItemDescriptor::block_item(RegistryKey::air()),
                ItemDescriptor::block_item(RegistryKey::host("stone")),
            ],
        )
    }

    #[test]
    fn tag_uses_item_field() {
        let tag = FacadeDescriptor::encode(RegistryKey::host("stone")).to_tag();
        assert_eq!(tag.get("item"), Some("minecraft:stone"));
        let back = FacadeDescriptor::from_tag(&tag).unwrap();
        assert_eq!(back.appearance(), &RegistryKey::host("stone"));
    }

    #[test]
    fn unqualified_ids_use_host_namespace() {
        let mut tag = ItemTag::new();
        tag.put(NBT_ITEM_ID, "stone");
        let descriptor = FacadeDescriptor::from_tag(&tag).unwrap();
        assert_eq!(descriptor.appearance(), &RegistryKey::host("stone"));
        assert_eq!(
            descriptor.decode(&content()).map(|s| s.item),
            Some(RegistryKey::host("stone"))
        );
    }

    #[test]
    fn malformed_or_missing_ids_are_absent() {
        assert!(FacadeDescriptor::from_tag(&ItemTag::new()).is_none());

        let mut tag = ItemTag::new();
        tag.put(NBT_ITEM_ID, "");
        assert!(FacadeDescriptor::from_tag(&tag).is_none());

        tag.put(NBT_ITEM_ID, "Not A Key!");
        assert!(FacadeDescriptor::from_tag(&tag).is_none());
    }

    #[test]
    fn decode_resolves_known_items() {
        let content = content();
        let stack = FacadeDescriptor::encode(RegistryKey::host("stone"))
            .decode(&content)
            .unwrap();
        assert_eq!(stack.item, RegistryKey::host("stone"));
        assert_eq!(stack.count, 1);
        assert!(stack.tag.is_none());
    }

    #[test]
    fn decode_degrades_to_none() {
        let mut content = content();
        assert!(FacadeDescriptor::encode(RegistryKey::air())
            .decode(&content)
            .is_none());
        assert!(FacadeDescriptor::encode(RegistryKey::host("dirt"))
            .decode(&content)
            .is_none());

        let stone = FacadeDescriptor::encode(RegistryKey::host("stone"));
        content.remove_item(&RegistryKey::host("stone"));
        assert!(stone.decode(&content).is_none());
    }
}
