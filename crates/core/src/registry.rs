//! Namespaced content identifiers.
//!
//! Every block, item and fluid the host knows about is addressed by a
//! `namespace:path` key (e.g. `minecraft:stone`). Facades persist exactly this
//! textual form, so parsing doubles as validation of stored data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Namespace assumed when a key omits one.
pub const DEFAULT_NAMESPACE: &str = "facadekit";

/// Namespace of the host game's built-in content.
pub const HOST_NAMESPACE: &str = "minecraft";

/// Error returned when parsing an invalid [`RegistryKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryKeyError {
    /// Input was empty or whitespace.
    #[error("registry key cannot be empty")]
    Empty,
    /// Namespace half was empty.
    #[error("registry key namespace cannot be empty")]
    EmptyNamespace,
    /// Path half was empty.
    #[error("registry key path cannot be empty")]
    EmptyPath,
    /// Namespace exceeded 64 characters.
    #[error("registry key namespace too long (max 64)")]
    NamespaceTooLong,
    /// Path exceeded 128 characters.
    #[error("registry key path too long (max 128)")]
    PathTooLong,
    /// A character outside the allowed set.
    #[error("registry key {part} has invalid character {found:?}")]
    InvalidChar {
        /// Which half of the key failed.
        part: &'static str,
        /// Offending character.
        found: char,
    },
}

/// A namespaced key of the form `namespace:path`.
///
/// Ordering is lexical by `(namespace, path)` and is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistryKey {
    namespace: String,
    path: String,
}

impl RegistryKey {
    /// Parse a registry key.
    ///
    /// Accepts either:
    /// - `namespace:path`
    /// - `path` (uses [`DEFAULT_NAMESPACE`])
    pub fn parse(input: &str) -> Result<Self, RegistryKeyError> {
        Self::parse_with_default_namespace(input, DEFAULT_NAMESPACE)
    }

    /// Parse a registry key using a caller-provided default namespace.
    pub fn parse_with_default_namespace(
        input: &str,
        default_namespace: &str,
    ) -> Result<Self, RegistryKeyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RegistryKeyError::Empty);
        }

        let (namespace, path) = match input.split_once(':') {
            Some((ns, p)) => (ns.trim(), p.trim()),
            None => (default_namespace, input),
        };

        validate_namespace(namespace)?;
        validate_path(path)?;

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Key inside the host namespace, for built-in content with known-good paths.
    pub fn host(path: &str) -> Self {
        Self::builtin(HOST_NAMESPACE, path)
    }

    /// Key inside [`DEFAULT_NAMESPACE`], for our own content.
    pub fn own(path: &str) -> Self {
        Self::builtin(DEFAULT_NAMESPACE, path)
    }

    fn builtin(namespace: &str, path: &str) -> Self {
        debug_assert!(validate_path(path).is_ok(), "invalid built-in path {path:?}");
        Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        }
    }

    /// The "nothing" sentinel (`minecraft:air`).
    pub fn air() -> Self {
        Self::host("air")
    }

    /// Whether this key is the air sentinel.
    pub fn is_air(&self) -> bool {
        self.namespace == HOST_NAMESPACE && self.path == "air"
    }

    /// Registry key namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Registry key path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for RegistryKey {
    type Err = RegistryKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RegistryKey {
    type Error = RegistryKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RegistryKey> for String {
    fn from(key: RegistryKey) -> Self {
        key.to_string()
    }
}

fn validate_namespace(ns: &str) -> Result<(), RegistryKeyError> {
    if ns.is_empty() {
        return Err(RegistryKeyError::EmptyNamespace);
    }
    if ns.len() > 64 {
        return Err(RegistryKeyError::NamespaceTooLong);
    }
    if let Some(found) = ns
        .chars()
        .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'))
    {
        return Err(RegistryKeyError::InvalidChar {
            part: "namespace",
            found,
        });
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<(), RegistryKeyError> {
    if path.is_empty() {
        return Err(RegistryKeyError::EmptyPath);
    }
    if path.len() > 128 {
        return Err(RegistryKeyError::PathTooLong);
    }
    if let Some(found) = path
        .chars()
        .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/'))
    {
        return Err(RegistryKeyError::InvalidChar { part: "path", found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_namespaced_key() {
        let key = RegistryKey::parse("minecraft:oak_planks").unwrap();
        assert_eq!(key.namespace(), "minecraft");
        assert_eq!(key.path(), "oak_planks");
        assert_eq!(key.to_string(), "minecraft:oak_planks");
    }

    #[test]
    fn parses_with_default_namespace() {
        let key = RegistryKey::parse("facade").unwrap();
        assert_eq!(key.to_string(), "facadekit:facade");
    }

    #[test]
    fn tag_paths_may_contain_slashes() {
        let key = RegistryKey::parse("facadekit:whitelisted/facades").unwrap();
        assert_eq!(key.path(), "whitelisted/facades");
    }

    #[test]
    fn rejects_malformed_keys() {
        assert_eq!(RegistryKey::parse(""), Err(RegistryKeyError::Empty));
        assert_eq!(RegistryKey::parse("   "), Err(RegistryKeyError::Empty));
        assert_eq!(
            RegistryKey::parse("minecraft:"),
            Err(RegistryKeyError::EmptyPath)
        );
        assert_eq!(
            RegistryKey::parse(":stone"),
            Err(RegistryKeyError::EmptyNamespace)
        );
        assert!(matches!(
            RegistryKey::parse("minecraft:Stone"),
            Err(RegistryKeyError::InvalidChar { found: 'S', .. })
        ));
        assert!(RegistryKey::parse("a:b:c").is_err());
    }

    #[test]
    fn air_sentinel() {
        assert!(RegistryKey::air().is_air());
        assert!(RegistryKey::parse("minecraft:air").unwrap().is_air());
        assert!(!RegistryKey::parse("facadekit:air").unwrap().is_air());
    }

    #[test]
    fn serializes_as_plain_string() {
        let key = RegistryKey::host("glass");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"minecraft:glass\"");
        let back: RegistryKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<RegistryKey>("\"Bad Key\"").is_err());
    }
}
