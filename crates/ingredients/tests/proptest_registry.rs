//! Property-based tests for converter registration
//!
//! Validates registry invariants:
//! - At most one converter per ingredient type uid
//! - Rejected registrations leave the published list untouched
//! - Registration order is preserved
//! - Payload fallback picks the first registered match

use std::any::Any;
use std::collections::HashSet;
use std::sync::Arc;

use facadekit_core::GenericStack;
use facadekit_ingredients::{ConverterRegistry, Ingredient, IngredientConverter, IngredientType};
use proptest::prelude::*;

struct Probe {
    ty: IngredientType,
}

impl IngredientConverter for Probe {
    fn ingredient_type(&self) -> &IngredientType {
        &self.ty
    }

    fn ingredient_from_stack(&self, _stack: &GenericStack) -> Option<Ingredient> {
        None
    }

    fn stack_from_ingredient(&self, _ingredient: &dyn Any) -> Option<GenericStack> {
        None
    }
}

/// Payload kinds used to build overlapping payload classes.
fn probe(uid: u8, payload: u8) -> Arc<Probe> {
    let uid = format!("viewer:t{uid}");
    let ty = match payload % 3 {
        0 => IngredientType::new::<u8>(uid),
        1 => IngredientType::new::<u16>(uid),
        _ => IngredientType::new::<u32>(uid),
    };
    Arc::new(Probe { ty })
}

proptest! {
    /// Property: the registry accepts exactly the first registration per uid
    #[test]
    fn one_converter_per_type(entries in prop::collection::vec((0u8..12, 0u8..3), 0..40)) {
        let registry = ConverterRegistry::new();
        let mut seen = HashSet::new();

        for (uid, payload) in &entries {
            let before = registry.list();
            let accepted = registry.register(probe(*uid, *payload));
            prop_assert_eq!(accepted, seen.insert(*uid));
            if !accepted {
                let after = registry.list();
                prop_assert!(Arc::ptr_eq(&before, &after));
            }
        }

        let list = registry.list();
        prop_assert_eq!(list.len(), seen.len());

        let mut order = Vec::new();
        let mut dedup = HashSet::new();
        for (uid, _) in &entries {
            if dedup.insert(*uid) {
                order.push(format!("viewer:t{uid}"));
            }
        }
        let listed: Vec<String> = list
            .iter()
            .map(|c| c.ingredient_type().uid().to_string())
            .collect();
        prop_assert_eq!(listed, order);
    }

    /// Property: lookups by uid always return the converter registered for it,
    /// and unknown uids resolve to the first converter with a matching payload
    #[test]
    fn lookup_is_deterministic(entries in prop::collection::vec((0u8..12, 0u8..3), 1..30), payload in 0u8..3) {
        let registry = ConverterRegistry::new();
        for (uid, p) in &entries {
            registry.register(probe(*uid, *p));
        }

        for converter in registry.list().iter() {
            let found = registry.lookup(converter.ingredient_type()).expect("registered type resolves");
            prop_assert_eq!(found.ingredient_type().uid(), converter.ingredient_type().uid());
        }

        let unknown = probe(200, payload);
        let expected = registry
            .list()
            .iter()
            .find(|c| c.ingredient_type().payload() == unknown.ty.payload())
            .map(|c| c.ingredient_type().uid().to_string());
        let found = registry
            .lookup(&unknown.ty)
            .map(|c| c.ingredient_type().uid().to_string());
        prop_assert_eq!(found, expected);
    }
}
