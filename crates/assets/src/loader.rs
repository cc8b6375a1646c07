use std::fs;
use std::path::Path;

use crate::AssetError;
use crate::{BlockDescriptor, ContentRegistry, ItemDescriptor};

/// Load a content registry from the provided JSON file path.
pub fn registry_from_file(path: &Path) -> Result<ContentRegistry, AssetError> {
    let data = fs::read_to_string(path)?;
    registry_from_str(&data)
}

/// Load a content registry from an in-memory JSON string.
pub fn registry_from_str(input: &str) -> Result<ContentRegistry, AssetError> {
    let pack = crate::load_pack_from_str(input)?;
    let blocks = pack
        .blocks
        .into_iter()
        .map(BlockDescriptor::from_definition)
        .collect::<Result<Vec<_>, _>>()?;
    let items = pack
        .items
        .into_iter()
        .map(ItemDescriptor::from_definition)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ContentRegistry::new(blocks, items))
}
