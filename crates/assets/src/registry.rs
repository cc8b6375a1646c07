use std::collections::{BTreeSet, HashMap};

use facadekit_core::{BlockInfo, ContentLookup, ItemInfo, RegistryKey, RenderLayer};
use tracing::warn;

use crate::{parse_key, AssetError, BlockDefinition, ItemDefinition};

/// Block metadata loaded from packs.
#[derive(Debug, Clone)]
pub struct BlockDescriptor {
    /// Namespaced identifier.
    pub key: RegistryKey,
    /// Render and shape facts for the default state.
    pub info: BlockInfo,
    /// Block tags this block belongs to.
    pub tags: BTreeSet<RegistryKey>,
}

impl BlockDescriptor {
    /// Construct descriptor from the JSON definition.
    pub fn from_definition(def: BlockDefinition) -> Result<Self, AssetError> {
        let key = parse_key(&def.name)?;
        let tags = def
            .tags
            .iter()
            .map(|tag| parse_key(tag))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self {
            key,
            info: BlockInfo {
                render_shape: def.render_shape,
                layers: def.layers.unwrap_or_else(|| vec![RenderLayer::Solid]),
                full_cube: def.full_cube,
                has_block_entity: def.block_entity,
            },
            tags,
        })
    }

    /// Helper for tests/examples: an opaque full-cube model block.
    pub fn simple(key: RegistryKey) -> Self {
        Self {
            key,
            info: BlockInfo {
                render_shape: Default::default(),
                layers: vec![RenderLayer::Solid],
                full_cube: true,
                has_block_entity: false,
            },
            tags: BTreeSet::new(),
        }
    }
}

/// Item metadata loaded from packs.
#[derive(Debug, Clone)]
pub struct ItemDescriptor {
    /// Namespaced identifier.
    pub key: RegistryKey,
    /// Name shown to players.
    pub display_name: String,
    /// Block placed by the item.
    pub block: Option<RegistryKey>,
}

impl ItemDescriptor {
    /// Construct descriptor from the JSON definition.
    pub fn from_definition(def: ItemDefinition) -> Result<Self, AssetError> {
        let key = parse_key(&def.name)?;
        let block = def.block.as_deref().map(parse_key).transpose()?;
        let display_name = def
            .display_name
            .unwrap_or_else(|| default_display_name(&key));
        Ok(Self {
            key,
            display_name,
            block,
        })
    }

    /// Helper for tests/examples: an item that places the block of the same key.
    pub fn block_item(key: RegistryKey) -> Self {
        Self {
            display_name: default_display_name(&key),
            block: Some(key.clone()),
            key,
        }
    }
}

/// Numeric id for the item registered after `len` others, if it still fits.
fn next_item_id(len: usize) -> Option<u32> {
    u32::try_from(len).ok()
}

fn default_display_name(key: &RegistryKey) -> String {
    key.path()
        .split(['_', '/'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Registry storing block and item descriptors.
///
/// Item numeric ids follow registration order and stay stable when items are
/// removed.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    blocks: Vec<BlockDescriptor>,
    block_index: HashMap<RegistryKey, usize>,
    items: Vec<Option<ItemDescriptor>>,
    item_index: HashMap<RegistryKey, u32>,
}

impl ContentRegistry {
    /// Construct a registry, skipping descriptors whose key is already taken.
    pub fn new(blocks: Vec<BlockDescriptor>, items: Vec<ItemDescriptor>) -> Self {
        let mut registry = Self::default();
        for block in blocks {
            registry.insert_block(block);
        }
        for item in items {
            registry.insert_item(item);
        }
        registry
    }

    fn insert_block(&mut self, block: BlockDescriptor) {
        if self.block_index.contains_key(&block.key) {
            warn!("Ignoring duplicate block key {}", block.key);
            return;
        }
        self.block_index.insert(block.key.clone(), self.blocks.len());
        self.blocks.push(block);
    }

    fn insert_item(&mut self, item: ItemDescriptor) {
        if self.item_index.contains_key(&item.key) {
            warn!("Ignoring duplicate item key {}", item.key);
            return;
        }
        if let Some(block) = &item.block {
            if !self.block_index.contains_key(block) {
                warn!("Item {} places unknown block {}", item.key, block);
            }
        }
        let Some(id) = next_item_id(self.items.len()) else {
            warn!("Item id space exhausted, ignoring {}", item.key);
            return;
        };
        self.item_index.insert(item.key.clone(), id);
        self.items.push(Some(item));
    }

    /// Look up a block descriptor by key.
    pub fn block_descriptor(&self, key: &RegistryKey) -> Option<&BlockDescriptor> {
        self.block_index.get(key).map(|&idx| &self.blocks[idx])
    }

    /// Look up an item descriptor by key.
    pub fn item_descriptor(&self, key: &RegistryKey) -> Option<&ItemDescriptor> {
        let id = *self.item_index.get(key)?;
        self.items.get(id as usize)?.as_ref()
    }

    /// Numeric id of an item.
    pub fn item_id(&self, key: &RegistryKey) -> Option<u32> {
        self.item_index.get(key).copied()
    }

    /// Remove an item, e.g. when its providing pack is unloaded.
    ///
    /// Returns the removed descriptor. The numeric id is not reused.
    pub fn remove_item(&mut self, key: &RegistryKey) -> Option<ItemDescriptor> {
        let id = self.item_index.remove(key)?;
        self.items.get_mut(id as usize)?.take()
    }

    /// Number of live items.
    pub fn item_count(&self) -> usize {
        self.item_index.len()
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

impl ContentLookup for ContentRegistry {
    fn item(&self, key: &RegistryKey) -> Option<ItemInfo> {
        self.item_descriptor(key).map(|desc| ItemInfo {
            display_name: desc.display_name.clone(),
            block: desc.block.clone(),
        })
    }

    fn item_by_numeric_id(&self, id: u32) -> Option<RegistryKey> {
        self.items
            .get(id as usize)?
            .as_ref()
            .map(|desc| desc.key.clone())
    }

    fn block(&self, key: &RegistryKey) -> Option<BlockInfo> {
        self.block_descriptor(key).map(|desc| desc.info.clone())
    }

    fn block_has_tag(&self, block: &RegistryKey, tag: &RegistryKey) -> bool {
        self.block_descriptor(block)
            .is_some_and(|desc| desc.tags.contains(tag))
    }
}
