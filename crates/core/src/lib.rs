#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod content;
pub mod item;
pub mod registry;

// Re-export commonly used types
pub use content::{
    BlockInfo, ContentLookup, Feature, FeatureToggles, ItemInfo, RenderLayer, RenderShape,
};
pub use item::{GenericStack, ItemStack, ItemTag, StackKey};
pub use registry::{RegistryKey, RegistryKeyError, DEFAULT_NAMESPACE, HOST_NAMESPACE};
