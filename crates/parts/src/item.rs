//! The facade item.

use facadekit_core::{ContentLookup, FeatureToggles, ItemStack, RegistryKey};
use tracing::debug;

use crate::{can_create_facade, BlockFacts, FacadeDescriptor, FacadePart, Side};

/// Creates facade stacks and answers questions about them.
#[derive(Debug, Clone)]
pub struct FacadeItem {
    key: RegistryKey,
    display_name: String,
}

impl Default for FacadeItem {
    fn default() -> Self {
        Self::new(RegistryKey::own("facade"), "Facade")
    }
}

impl FacadeItem {
    /// Facade item registered under `key`.
    pub fn new(key: RegistryKey, display_name: impl Into<String>) -> Self {
        Self {
            key,
            display_name: display_name.into(),
        }
    }

    /// Turn a block item into a facade of it.
    ///
    /// Only untagged stacks of items that place a non-air block qualify, and
    /// only when the block's default state passes [`can_create_facade`]. With
    /// `return_item` set the input stack is handed back instead, so callers
    /// can test eligibility without building a facade.
    pub fn create_facade_for_item(
        &self,
        stack: &ItemStack,
        content: &dyn ContentLookup,
        toggles: &dyn FeatureToggles,
        return_item: bool,
    ) -> Option<ItemStack> {
        if stack.is_empty() || stack.has_tag() {
            return None;
        }

        let block = content.item(&stack.item)?.block?;
        if block.is_air() {
            return None;
        }
        let Some(info) = content.block(&block) else {
            debug!(item = %stack.item, %block, "Item places an unknown block");
            return None;
        };

        let facts = BlockFacts::gather(&block, &info, content, toggles);
        if !can_create_facade(facts) {
            debug!(%block, ?facts, "Block is not eligible for facades");
            return None;
        }

        if return_item {
            return Some(stack.clone());
        }
        Some(self.facade_of(stack.item.clone()))
    }

    /// Facade for the item with the given numeric id.
    pub fn create_from_id(&self, id: u32, content: &dyn ContentLookup) -> Option<ItemStack> {
        let item = content.item_by_numeric_id(id)?;
        if item.is_air() {
            return None;
        }
        Some(self.facade_of(item))
    }

    fn facade_of(&self, appearance: RegistryKey) -> ItemStack {
        ItemStack::new(self.key.clone(), 1).with_tag(FacadeDescriptor::encode(appearance).to_tag())
    }

    /// The item whose appearance `stack` borrows, if it still resolves.
    pub fn texture_item(&self, stack: &ItemStack, content: &dyn ContentLookup) -> Option<ItemStack> {
        FacadeDescriptor::from_tag(stack.tag.as_ref()?)?.decode(content)
    }

    /// The block drawn for `stack`; glass when the borrowed item is gone.
    pub fn texture_block(&self, stack: &ItemStack, content: &dyn ContentLookup) -> RegistryKey {
        self.texture_item(stack, content)
            .and_then(|item| content.item(&item.item))
            .and_then(|info| info.block)
            .filter(|block| !block.is_air())
            .unwrap_or_else(crate::fallback_block)
    }

    /// Whether `stack` must be drawn in an alpha-blended pass.
    pub fn use_alpha_pass(&self, stack: &ItemStack, content: &dyn ContentLookup) -> bool {
        let block = self.texture_block(stack, content);
        content
            .block(&block)
            .is_some_and(|info| info.is_translucent())
    }

    /// `"Facade - Stone"`, or just `"Facade"` when nothing resolves.
    pub fn display_name(&self, stack: &ItemStack, content: &dyn ContentLookup) -> String {
        match self
            .texture_item(stack, content)
            .and_then(|item| content.item(&item.item))
        {
            Some(info) => format!("{} - {}", self.display_name, info.display_name),
            None => self.display_name.clone(),
        }
    }

    /// Build the part placed on a bus side, if the facade still resolves.
    pub fn create_part(
        &self,
        stack: &ItemStack,
        side: Side,
        content: &dyn ContentLookup,
    ) -> Option<FacadePart> {
        self.texture_item(stack, content)?;
        Some(FacadePart {
            stack: stack.clone(),
            side,
        })
    }
}
