use anyhow::Result;
use facadekit_parts::FacadeConfig;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use tracing::warn;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/facadekit.toml";
/// Default location of the base content pack.
pub const DEFAULT_CONTENT_PATH: &str = "config/content.json";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FacadekitConfig {
    /// Content pack loaded at startup.
    pub content_path: PathBuf,
    /// Facade feature switches.
    pub facades: FacadeConfig,
    /// Register the stock item and fluid converters.
    pub register_stock_converters: bool,
}

impl Default for FacadekitConfig {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from(DEFAULT_CONTENT_PATH),
            facades: FacadeConfig::default(),
            register_stock_converters: true,
        }
    }
}

impl FacadekitConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<FacadekitConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    FacadekitConfig::default()
                }
            },
            Err(err) => {
                if err.kind() == std::io::ErrorKind::NotFound {
                    warn!("Config not found at {}. Using defaults", path.display());
                } else {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                FacadekitConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "facadekit-{name}-{}.toml",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = FacadekitConfig::load_from_path(Path::new("/nonexistent/facadekit.toml"));
        assert_eq!(cfg, FacadekitConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_path("partial");
        fs::write(&path, "[facades]\ntile_entity_facades = true\n").unwrap();
        let cfg = FacadekitConfig::load_from_path(&path);
        assert!(cfg.facades.tile_entity_facades);
        assert!(cfg.register_stock_converters);
        assert_eq!(cfg.content_path, PathBuf::from(DEFAULT_CONTENT_PATH));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn unparsable_file_uses_defaults() {
        let path = temp_path("broken");
        fs::write(&path, "facades = [[[").unwrap();
        assert_eq!(
            FacadekitConfig::load_from_path(&path),
            FacadekitConfig::default()
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("saved");
        let cfg = FacadekitConfig {
            content_path: PathBuf::from("packs/base.json"),
            facades: FacadeConfig {
                tile_entity_facades: true,
            },
            register_stock_converters: false,
        };
        cfg.save_to_path(&path).expect("save succeeds");
        assert_eq!(FacadekitConfig::load_from_path(&path), cfg);
        fs::remove_file(&path).ok();
    }
}
