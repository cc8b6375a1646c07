//! Which blocks may be turned into facades.

use facadekit_core::{BlockInfo, ContentLookup, Feature, FeatureToggles, RegistryKey, RenderShape};

/// Facts about a candidate block, gathered from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockFacts {
    /// Carries per-instance state (a block entity).
    pub has_special_behavior: bool,
    /// Member of the facade whitelist tag.
    pub is_whitelisted: bool,
    /// Renders through the static model path.
    pub is_standard_renderable: bool,
    /// Default state is a full cube.
    pub is_full_cube: bool,
    /// Facades of block-entity blocks are enabled for this deployment.
    pub special_behavior_feature_enabled: bool,
}

impl BlockFacts {
    /// Gather facts for `block` from host content and feature toggles.
    pub fn gather(
        block: &RegistryKey,
        info: &BlockInfo,
        content: &dyn ContentLookup,
        toggles: &dyn FeatureToggles,
    ) -> Self {
        Self {
            has_special_behavior: info.has_block_entity,
            is_whitelisted: content.block_has_tag(block, &crate::whitelist_tag()),
            is_standard_renderable: info.render_shape == RenderShape::Model,
            is_full_cube: info.full_cube,
            special_behavior_feature_enabled: toggles
                .is_feature_enabled(Feature::TileEntityFacades),
        }
    }
}

/// Whether a facade may be made from a block with these facts.
///
/// All three conditions must hold:
/// - the block renders as a static model;
/// - it has no block entity, unless the feature is enabled *and* the block is whitelisted;
/// - it is a full cube, unless whitelisted.
pub fn can_create_facade(facts: BlockFacts) -> bool {
    let special_behavior_allowed = !facts.has_special_behavior
        || (facts.special_behavior_feature_enabled && facts.is_whitelisted);
    let shape_allowed = facts.is_full_cube || facts.is_whitelisted;
    facts.is_standard_renderable && special_behavior_allowed && shape_allowed
}
