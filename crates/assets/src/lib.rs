#![warn(missing_docs)]
//! Content pack schema + the registry built from it.

mod loader;
mod registry;

pub use loader::{registry_from_file, registry_from_str};
pub use registry::{BlockDescriptor, ContentRegistry, ItemDescriptor};

use facadekit_core::{RegistryKey, RegistryKeyError, RenderLayer, RenderShape};
use serde::Deserialize;
use thiserror::Error;

/// Block definition as written in a content pack.
#[derive(Debug, Deserialize)]
pub struct BlockDefinition {
    /// Namespaced identifier (e.g., "minecraft:stone").
    pub name: String,
    /// Render path of the default state.
    #[serde(default)]
    pub render_shape: RenderShape,
    /// Whether the default state is a full cube.
    #[serde(default = "default_true")]
    pub full_cube: bool,
    /// Whether the block carries a block entity.
    #[serde(default)]
    pub block_entity: bool,
    /// Layers the block renders in (defaults to solid).
    #[serde(default)]
    pub layers: Option<Vec<RenderLayer>>,
    /// Block tags this block belongs to.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Item definition as written in a content pack.
#[derive(Debug, Deserialize)]
pub struct ItemDefinition {
    /// Namespaced identifier.
    pub name: String,
    /// Name shown to players (defaults to the key path).
    #[serde(default)]
    pub display_name: Option<String>,
    /// Block placed by the item, if any.
    #[serde(default)]
    pub block: Option<String>,
}

/// Top-level content pack document.
#[derive(Debug, Deserialize, Default)]
pub struct PackDefinition {
    /// Block definitions.
    #[serde(default)]
    pub blocks: Vec<BlockDefinition>,
    /// Item definitions.
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

fn default_true() -> bool {
    true
}

/// Errors emitted during pack loading.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Wrap IO errors when reading packs.
    #[error("failed to read content pack: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse content pack: {0}")]
    Parse(#[from] serde_json::Error),
    /// A definition used an invalid identifier.
    #[error("invalid identifier {name:?}: {source}")]
    Key {
        /// Identifier as written.
        name: String,
        /// Why it was rejected.
        #[source]
        source: RegistryKeyError,
    },
}

/// Parse a JSON string into a pack definition.
pub fn load_pack_from_str(input: &str) -> Result<PackDefinition, AssetError> {
    Ok(serde_json::from_str(input)?)
}

pub(crate) fn parse_key(name: &str) -> Result<RegistryKey, AssetError> {
    RegistryKey::parse(name).map_err(|source| AssetError::Key {
        name: name.to_string(),
        source,
    })
}
