use std::path::Path;

use facadekit::{Facadekit, FacadekitConfig, ItemStack, RegistryKey};

#[test]
fn shipped_config_and_content_load() {
    facadekit::init_logging();
    let config = FacadekitConfig::load_from_path(Path::new("config/facadekit.toml"));
    assert!(!config.facades.tile_entity_facades);

    let kit = Facadekit::load(config).expect("shipped content pack loads");
    for path in ["stone", "oak_planks", "glass", "white_stained_glass", "ice"] {
        let stack = ItemStack::new(RegistryKey::host(path), 1);
        assert!(kit.create_facade(&stack).is_some(), "{path} should be eligible");
    }
    for path in ["air", "oak_slab", "chest", "beacon", "stick"] {
        let stack = ItemStack::new(RegistryKey::host(path), 1);
        assert!(kit.create_facade(&stack).is_none(), "{path} should be rejected");
    }
}
