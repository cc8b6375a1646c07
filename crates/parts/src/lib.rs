#![warn(missing_docs)]
//! Facades: items that borrow a block's appearance so it can be shown on a
//! cable bus side.

mod config;
mod descriptor;
mod eligibility;
mod item;
mod part;

pub use config::FacadeConfig;
pub use descriptor::{FacadeDescriptor, NBT_ITEM_ID};
pub use eligibility::{can_create_facade, BlockFacts};
pub use item::FacadeItem;
pub use part::{FacadePart, Side};

use facadekit_core::RegistryKey;

/// Block tag explicitly whitelisting blocks for use in facades.
pub fn whitelist_tag() -> RegistryKey {
    RegistryKey::own("whitelisted/facades")
}

/// Appearance used when a facade's borrowed block cannot be resolved.
pub fn fallback_block() -> RegistryKey {
    RegistryKey::host("glass")
}
