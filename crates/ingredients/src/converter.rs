use std::any::{Any, TypeId};
use std::fmt;

use facadekit_core::GenericStack;

/// Concrete ingredient value handed to or received from the viewer.
pub type Ingredient = Box<dyn Any + Send + Sync>;

/// The Rust type an ingredient type carries.
///
/// Two ingredient types with different identities can share a payload class
/// when a compatibility layer re-exposes the same payload under its own type.
#[derive(Clone, Copy)]
pub struct PayloadClass {
    id: TypeId,
    name: &'static str,
}

impl PayloadClass {
    /// Payload class of `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Type name, for diagnostics only.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for PayloadClass {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PayloadClass {}

impl fmt::Debug for PayloadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A recipe-viewer ingredient type.
///
/// Identity is the `uid`: two types are the same type only if their uids
/// match, even when their payload classes agree.
#[derive(Debug, Clone)]
pub struct IngredientType {
    uid: String,
    payload: PayloadClass,
}

impl IngredientType {
    /// Declare an ingredient type carrying payloads of type `T`.
    pub fn new<T: Any>(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            payload: PayloadClass::of::<T>(),
        }
    }

    /// Identity key.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Payload class used for the weaker fallback match.
    pub fn payload(&self) -> PayloadClass {
        self.payload
    }

    /// Whether both are the same type (identity match).
    pub fn is_same_type(&self, other: &IngredientType) -> bool {
        self.uid == other.uid
    }
}

impl PartialEq for IngredientType {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_type(other)
    }
}

impl Eq for IngredientType {}

/// Translates between [`GenericStack`]s and one ingredient type.
pub trait IngredientConverter: Send + Sync {
    /// The ingredient type this converter handles.
    fn ingredient_type(&self) -> &IngredientType;

    /// Convert a generic stack into this converter's ingredient, or `None`
    /// if the stack is of a kind this converter does not handle.
    fn ingredient_from_stack(&self, stack: &GenericStack) -> Option<Ingredient>;

    /// Convert an ingredient back into a generic stack. Returns `None` when
    /// the value is not of this converter's payload class or is empty.
    fn stack_from_ingredient(&self, ingredient: &dyn Any) -> Option<GenericStack>;
}
