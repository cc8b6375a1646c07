//! Registry of ingredient converters.
//!
//! Published state is copy-on-write: every successful registration builds a
//! fresh converter list and index and swaps both in under the lock. A
//! [`Snapshot`] handed out earlier is never touched again.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::{IngredientConverter, IngredientType};

/// Point-in-time list of registered converters, in registration order.
pub type Snapshot = Arc<[Arc<dyn IngredientConverter>]>;

type Index = HashMap<String, Arc<dyn IngredientConverter>>;

struct Published {
    converters: Snapshot,
    by_type: Arc<Index>,
}

impl Published {
    fn empty() -> Self {
        Self {
            converters: Arc::from(Vec::new()),
            by_type: Arc::new(HashMap::new()),
        }
    }
}

/// Maps ingredient types to the single converter responsible for them.
///
/// Created once at startup, filled while plugins load, then shared (usually
/// behind an `Arc`) with whatever needs to translate ingredients.
pub struct ConverterRegistry {
    state: Mutex<Published>,
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(Published::empty()),
        }
    }

    // Published state is only ever replaced whole, so a panic elsewhere
    // cannot leave it half-written.
    fn state(&self) -> MutexGuard<'_, Published> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a converter.
    ///
    /// Returns `false` and leaves the registry unchanged if a converter for
    /// the same ingredient type is already registered.
    pub fn register(&self, converter: Arc<dyn IngredientConverter>) -> bool {
        let mut state = self.state();
        let ty = converter.ingredient_type();

        if state
            .converters
            .iter()
            .any(|existing| existing.ingredient_type().is_same_type(ty))
        {
            debug!(
                ingredient_type = ty.uid(),
                "Converter already registered, ignoring"
            );
            return false;
        }

        let converters: Snapshot = state
            .converters
            .iter()
            .cloned()
            .chain(std::iter::once(Arc::clone(&converter)))
            .collect();
        let by_type: Index = converters
            .iter()
            .map(|c| (c.ingredient_type().uid().to_string(), Arc::clone(c)))
            .collect();

        info!(
            ingredient_type = ty.uid(),
            payload = ty.payload().name(),
            total = converters.len(),
            "Registered ingredient converter"
        );
        *state = Published {
            converters,
            by_type: Arc::new(by_type),
        };
        true
    }

    /// The currently registered converters.
    pub fn list(&self) -> Snapshot {
        Arc::clone(&self.state().converters)
    }

    /// The converter registered for `ty`.
    ///
    /// Falls back to the first converter (in registration order) whose
    /// ingredient type carries the same payload class, for viewers that
    /// re-expose another viewer's ingredients under their own types.
    pub fn lookup(&self, ty: &IngredientType) -> Option<Arc<dyn IngredientConverter>> {
        let state = self.state();
        if let Some(converter) = state.by_type.get(ty.uid()) {
            return Some(Arc::clone(converter));
        }

        let fallback = state
            .converters
            .iter()
            .find(|c| c.ingredient_type().payload() == ty.payload())
            .cloned();
        if let Some(converter) = &fallback {
            debug!(
                requested = ty.uid(),
                matched = converter.ingredient_type().uid(),
                "Resolved converter by payload class"
            );
        }
        fallback
    }

    /// Number of registered converters.
    pub fn len(&self) -> usize {
        self.state().converters.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
