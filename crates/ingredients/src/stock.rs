//! Converters for the two ingredient kinds every viewer understands.

use std::any::Any;

use facadekit_core::{GenericStack, ItemStack, RegistryKey, StackKey};

use crate::{Ingredient, IngredientConverter, IngredientType};

/// Uid of the viewer's item ingredient type.
pub const ITEM_TYPE_UID: &str = "viewer:item_stack";
/// Uid of the viewer's fluid ingredient type.
pub const FLUID_TYPE_UID: &str = "viewer:fluid_stack";

/// Translates item stacks.
#[derive(Debug)]
pub struct ItemConverter {
    ty: IngredientType,
}

impl ItemConverter {
    /// Converter for the viewer's native item type.
    pub fn new() -> Self {
        Self::with_uid(ITEM_TYPE_UID)
    }

    /// Converter for an item type exposed under a different uid.
    pub fn with_uid(uid: &str) -> Self {
        Self {
            ty: IngredientType::new::<ItemStack>(uid),
        }
    }
}

impl Default for ItemConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientConverter for ItemConverter {
    fn ingredient_type(&self) -> &IngredientType {
        &self.ty
    }

    fn ingredient_from_stack(&self, stack: &GenericStack) -> Option<Ingredient> {
        let StackKey::Item(item) = &stack.what else {
            return None;
        };
        let count = u32::try_from(stack.amount).unwrap_or(u32::MAX);
        let ingredient = ItemStack::new(item.clone(), count);
        if ingredient.is_empty() {
            return None;
        }
        Some(Box::new(ingredient))
    }

    fn stack_from_ingredient(&self, ingredient: &dyn Any) -> Option<GenericStack> {
        let stack = ingredient.downcast_ref::<ItemStack>()?;
        if stack.is_empty() {
            return None;
        }
        Some(GenericStack::new(
            StackKey::Item(stack.item.clone()),
            u64::from(stack.count),
        ))
    }
}

/// Fluid payload handed to the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluidIngredient {
    /// Fluid identifier
    pub fluid: RegistryKey,
    /// Amount in millibuckets
    pub amount_mb: u64,
}

/// Translates fluid stacks.
#[derive(Debug)]
pub struct FluidConverter {
    ty: IngredientType,
}

impl FluidConverter {
    /// Converter for the viewer's native fluid type.
    pub fn new() -> Self {
        Self {
            ty: IngredientType::new::<FluidIngredient>(FLUID_TYPE_UID),
        }
    }
}

impl Default for FluidConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientConverter for FluidConverter {
    fn ingredient_type(&self) -> &IngredientType {
        &self.ty
    }

    fn ingredient_from_stack(&self, stack: &GenericStack) -> Option<Ingredient> {
        match &stack.what {
            StackKey::Fluid(fluid) if stack.amount > 0 => Some(Box::new(FluidIngredient {
                fluid: fluid.clone(),
                amount_mb: stack.amount,
            })),
            _ => None,
        }
    }

    fn stack_from_ingredient(&self, ingredient: &dyn Any) -> Option<GenericStack> {
        let fluid = ingredient.downcast_ref::<FluidIngredient>()?;
        if fluid.amount_mb == 0 {
            return None;
        }
        Some(GenericStack::new(
            StackKey::Fluid(fluid.fluid.clone()),
            fluid.amount_mb,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_conversion_both_ways() {
        let converter = ItemConverter::new();
        let stack = GenericStack::new(StackKey::Item(RegistryKey::host("stone")), 12);

        let ingredient = converter.ingredient_from_stack(&stack).unwrap();
        let item = ingredient.downcast_ref::<ItemStack>().unwrap();
        assert_eq!(item.item, RegistryKey::host("stone"));
        assert_eq!(item.count, 12);

        let back = converter.stack_from_ingredient(&*ingredient).unwrap();
        assert_eq!(back, stack);
    }

    #[test]
    fn item_converter_ignores_fluids_and_air() {
        let converter = ItemConverter::new();
        let water = GenericStack::new(StackKey::Fluid(RegistryKey::host("water")), 1000);
        assert!(converter.ingredient_from_stack(&water).is_none());

        let air = GenericStack::new(StackKey::Item(RegistryKey::air()), 1);
        assert!(converter.ingredient_from_stack(&air).is_none());

        let wrong_payload = FluidIngredient {
            fluid: RegistryKey::host("water"),
            amount_mb: 1000,
        };
        assert!(converter.stack_from_ingredient(&wrong_payload).is_none());
    }

    #[test]
    fn fluid_conversion_both_ways() {
        let converter = FluidConverter::new();
        let stack = GenericStack::new(StackKey::Fluid(RegistryKey::host("lava")), 250);

        let ingredient = converter.ingredient_from_stack(&stack).unwrap();
        let fluid = ingredient.downcast_ref::<FluidIngredient>().unwrap();
        assert_eq!(fluid.amount_mb, 250);
        assert_eq!(converter.stack_from_ingredient(fluid), Some(stack));

        let empty = GenericStack::new(StackKey::Fluid(RegistryKey::host("lava")), 0);
        assert!(converter.ingredient_from_stack(&empty).is_none());
    }
}
