//! Host-side content queries.
//!
//! The facade and converter logic never owns game content; it asks the host
//! through these traits. Implementations must be cheap and side-effect free.

use serde::{Deserialize, Serialize};

use crate::RegistryKey;

/// How a block is drawn by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderShape {
    /// Static baked model.
    #[default]
    Model,
    /// Drawn by a dedicated renderer (chests, signs, ...).
    Animated,
    /// Not drawn at all.
    Invisible,
}

/// Draw pass a block may participate in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderLayer {
    /// Fully opaque geometry.
    Solid,
    /// Alpha-tested geometry.
    Cutout,
    /// Alpha-tested geometry with mipmaps.
    CutoutMipped,
    /// Alpha-blended, depth sorted.
    Translucent,
    /// Alpha-blended without the crumbling overlay.
    TranslucentNoCrumbling,
}

impl RenderLayer {
    /// Whether this layer needs alpha blending.
    pub fn is_translucent(self) -> bool {
        matches!(
            self,
            RenderLayer::Translucent | RenderLayer::TranslucentNoCrumbling
        )
    }
}

/// Facts about a block's default state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    /// Render path of the default state.
    pub render_shape: RenderShape,
    /// Layers the default state renders in.
    pub layers: Vec<RenderLayer>,
    /// Whether the default state is a normal full cube.
    pub full_cube: bool,
    /// Whether the block carries per-instance state (a block entity).
    pub has_block_entity: bool,
}

impl BlockInfo {
    /// Whether any of the block's layers needs alpha blending.
    pub fn is_translucent(&self) -> bool {
        self.layers.iter().any(|layer| layer.is_translucent())
    }
}

/// Facts about an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    /// Human-readable name.
    pub display_name: String,
    /// Block placed by this item, if any.
    pub block: Option<RegistryKey>,
}

/// Read-only view over the host's item and block registries.
pub trait ContentLookup {
    /// Resolve an item by key.
    fn item(&self, key: &RegistryKey) -> Option<ItemInfo>;

    /// Map a numeric item id back to its key.
    fn item_by_numeric_id(&self, id: u32) -> Option<RegistryKey>;

    /// Resolve a block by key.
    fn block(&self, key: &RegistryKey) -> Option<BlockInfo>;

    /// Whether `block` is a member of the block tag `tag`.
    fn block_has_tag(&self, block: &RegistryKey, tag: &RegistryKey) -> bool;
}

/// Optional features a deployment can switch on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Allow facades of whitelisted blocks that carry block entities.
    TileEntityFacades,
}

/// Source of feature toggles.
pub trait FeatureToggles {
    /// Whether `feature` is enabled.
    fn is_feature_enabled(&self, feature: Feature) -> bool;
}
