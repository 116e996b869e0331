//! YAML configuration parsing for registry options
//!
//! Parses keymap.yaml option files into [`RegistryOptions`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::defaults::builtin_defaults;

/// A configured default binding: chord alternatives plus the command id its
/// handler resolves to at fire time.
///
/// Only command-reference handlers can be configured; callbacks and
/// run-capable objects are registered programmatically via
/// [`KeymapRegistry::add`](crate::registry::KeymapRegistry::add).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultBinding {
    pub keys: String,
    pub handler: String,
}

impl DefaultBinding {
    pub fn new(keys: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            keys: keys.into(),
            handler: handler.into(),
        }
    }
}

/// Raw options as they appear in a keymap.yaml file.
///
/// Every recognized option is optional; absent options fall back to their
/// built-in value when resolved into [`RegistryOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Default bindings installed by the registry's load step, keyed by
    /// binding id
    #[serde(default)]
    pub defaults: Option<BTreeMap<String, DefaultBinding>>,
}

/// Resolved registry options: caller configuration merged over built-ins.
///
/// Merging is shallow: a caller-supplied option replaces the built-in value
/// for that option wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Bindings installed by [`KeymapRegistry::load`](crate::registry::KeymapRegistry::load)
    pub defaults: BTreeMap<String, DefaultBinding>,
}

impl RegistryOptions {
    /// Resolve a raw config against the built-in defaults, caller winning on
    /// every option it supplies.
    pub fn from_config(config: RegistryConfig) -> Self {
        Self {
            defaults: config.defaults.unwrap_or_else(builtin_defaults),
        }
    }
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self::from_config(RegistryConfig::default())
    }
}

/// Load registry options from a YAML file
pub fn load_options_file(path: &Path) -> Result<RegistryConfig, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_options_yaml(&content)
}

/// Parse registry options from a YAML string
pub fn parse_options_yaml(yaml: &str) -> Result<RegistryConfig, KeymapError> {
    serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))
}

/// Errors that can occur when loading registry options
#[derive(Debug, Clone)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for KeymapError {}
