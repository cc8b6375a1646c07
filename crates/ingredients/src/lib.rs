#![warn(missing_docs)]
//! Bridges between the mod's generic stacks and a recipe viewer's ingredient
//! types.
//!
//! Plugin code registers one [`IngredientConverter`] per ingredient type on a
//! [`ConverterRegistry`] during startup; the viewer integration then looks
//! converters up by the ingredient type it is handed.

mod converter;
mod registry;
mod stock;

pub use converter::{Ingredient, IngredientConverter, IngredientType, PayloadClass};
pub use registry::{ConverterRegistry, Snapshot};
pub use stock::{FluidConverter, FluidIngredient, ItemConverter, FLUID_TYPE_UID, ITEM_TYPE_UID};
