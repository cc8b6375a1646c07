use facadekit_core::ItemStack;
use serde::{Deserialize, Serialize};

/// Side of a cable bus a part is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Negative Y.
    Down,
    /// Positive Y.
    Up,
    /// Negative Z.
    North,
    /// Positive Z.
    South,
    /// Negative X.
    West,
    /// Positive X.
    East,
}

/// A facade mounted on one side of a bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadePart {
    /// The facade item the part was made from.
    pub stack: ItemStack,
    /// Side it covers.
    pub side: Side,
}
