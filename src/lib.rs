#![warn(missing_docs)]
//! facadekit - facade items and recipe-viewer ingredient converters
//!
//! Wires the workspace crates together: loads configuration and content,
//! registers the stock converters, and hands out the facade item.

mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

pub use config::{FacadekitConfig, DEFAULT_CONFIG_PATH, DEFAULT_CONTENT_PATH};
pub use facadekit_assets::{registry_from_file, registry_from_str, ContentRegistry};
pub use facadekit_core::{
    ContentLookup, Feature, FeatureToggles, GenericStack, ItemStack, ItemTag, RegistryKey,
    StackKey,
};
pub use facadekit_ingredients::{
    ConverterRegistry, FluidConverter, Ingredient, IngredientConverter, IngredientType,
    ItemConverter, PayloadClass, Snapshot,
};
pub use facadekit_parts::{
    can_create_facade, BlockFacts, FacadeConfig, FacadeDescriptor, FacadeItem, FacadePart, Side,
};

/// Install the global tracing subscriber.
///
/// Defaults to WARN; override via the `RUST_LOG` env var. Safe to call more
/// than once: later calls are ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

/// Everything the host integration needs after startup.
pub struct Facadekit {
    /// Loaded configuration.
    pub config: FacadekitConfig,
    /// Host content known at startup.
    pub content: ContentRegistry,
    /// Shared converter registry; plugins may keep registering into it.
    pub converters: Arc<ConverterRegistry>,
    /// The facade item.
    pub facades: FacadeItem,
}

impl Facadekit {
    /// Load content from `config.content_path` and register stock converters.
    pub fn load(config: FacadekitConfig) -> Result<Self> {
        let content = registry_from_file(&config.content_path).with_context(|| {
            format!(
                "loading content pack {}",
                config.content_path.display()
            )
        })?;
        Ok(Self::with_content(config, content))
    }

    /// Build from already-loaded content.
    pub fn with_content(config: FacadekitConfig, content: ContentRegistry) -> Self {
        let converters = Arc::new(ConverterRegistry::new());
        if config.register_stock_converters {
            converters.register(Arc::new(ItemConverter::new()));
            converters.register(Arc::new(FluidConverter::new()));
        }
        info!(
            items = content.item_count(),
            blocks = content.block_count(),
            converters = converters.len(),
            "facadekit ready"
        );
        Self {
            config,
            content,
            converters,
            facades: FacadeItem::default(),
        }
    }

    /// Convenience over [`FacadeItem::create_facade_for_item`] with the loaded
    /// content and feature switches.
    pub fn create_facade(&self, stack: &ItemStack) -> Option<ItemStack> {
        self.facades
            .create_facade_for_item(stack, &self.content, &self.config.facades, false)
    }
}
