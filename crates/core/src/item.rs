//! Item stacks, their persisted data blob, and the generic stack form that
//! ingredient converters translate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::RegistryKey;

/// Opaque per-item data attached to a stack.
///
/// Only string fields are modelled; facades store a single `"item"` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemTag {
    fields: BTreeMap<String, String>,
}

impl ItemTag {
    /// Create an empty tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a string field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Store a string field, replacing any previous value.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Whether the tag holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A quantity of one item, optionally carrying persisted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item identifier
    pub item: RegistryKey,
    /// Quantity in stack
    pub count: u32,
    /// Persisted per-item data (None when the stack carries nothing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<ItemTag>,
}

impl ItemStack {
    /// Create a new untagged item stack
    pub fn new(item: RegistryKey, count: u32) -> Self {
        Self {
            item,
            count,
            tag: None,
        }
    }

    /// Attach persisted data to the stack.
    pub fn with_tag(mut self, tag: ItemTag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Empty stacks hold nothing: zero items or the air sentinel.
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.item.is_air()
    }

    /// Whether the stack carries a persisted tag, even an empty one.
    pub fn has_tag(&self) -> bool {
        self.tag.is_some()
    }
}

/// What a [`GenericStack`] holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StackKey {
    /// A countable item.
    Item(RegistryKey),
    /// A fluid measured in millibuckets.
    Fluid(RegistryKey),
}

/// Kind-agnostic stack used inside the mod (items and fluids alike).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericStack {
    /// What is stored
    pub what: StackKey,
    /// Item count or fluid amount
    pub amount: u64,
}

impl GenericStack {
    /// Create a generic stack.
    pub fn new(what: StackKey, amount: u64) -> Self {
        Self { what, amount }
    }
}
