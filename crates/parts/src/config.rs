use facadekit_core::{Feature, FeatureToggles};
use serde::{Deserialize, Serialize};

/// Facade-related feature switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FacadeConfig {
    /// Allow facades of whitelisted blocks that carry block entities.
    pub tile_entity_facades: bool,
}

impl FeatureToggles for FacadeConfig {
    fn is_feature_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::TileEntityFacades => self.tile_entity_facades,
        }
    }
}
