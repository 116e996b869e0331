//! Built-in default bindings
//!
//! The standard undo/redo/copy/paste chords that ship with the registry.
//! Loaded from the embedded keymap.yaml, falling back to the hardcoded
//! table, then overlaid with project-local and user configuration.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::{
    load_options_file, parse_options_yaml, DefaultBinding, RegistryConfig, RegistryOptions,
};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../keymap.yaml");

/// Hardcoded fallback table, mirrored by the embedded keymap.yaml.
///
/// The ⌘ alternative covers macOS hosts; the engine decides which
/// alternatives it can honor on the current platform.
pub fn builtin_defaults() -> BTreeMap<String, DefaultBinding> {
    BTreeMap::from([
        (
            "core:undo".to_string(),
            DefaultBinding::new("⌘+z, ctrl+z", "core:undo"),
        ),
        (
            "core:redo".to_string(),
            DefaultBinding::new("⌘+shift+z, ctrl+shift+z", "core:redo"),
        ),
        (
            "core:copy".to_string(),
            DefaultBinding::new("⌘+c, ctrl+c", "core:copy"),
        ),
        (
            "core:paste".to_string(),
            DefaultBinding::new("⌘+v, ctrl+v", "core:paste"),
        ),
    ])
}

/// Load and merge registry options: embedded defaults + overlays
///
/// Loading order (each layer overrides the previous, per binding id):
/// 1. Embedded default keymap (compiled into the crate)
/// 2. keymap.yaml in the current directory (project-local overrides)
/// 3. User config at ~/.config/chordmap/keymap.yaml
pub fn load_default_options() -> RegistryOptions {
    let mut defaults = match parse_options_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(config) => {
            let table = config.defaults.unwrap_or_else(builtin_defaults);
            tracing::info!("Loaded embedded default keymap ({} bindings)", table.len());
            table
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            builtin_defaults()
        }
    };

    // Try loading project-local keymap.yaml
    if let Ok(local) = load_options_file(Path::new("keymap.yaml")) {
        tracing::info!(
            "Merging project keymap.yaml ({} bindings)",
            local.defaults.as_ref().map_or(0, |t| t.len())
        );
        merge_defaults(&mut defaults, local);
    }

    // Try loading user config
    if let Some(user_path) = crate::config_paths::keymap_file() {
        if user_path.exists() {
            match load_options_file(&user_path) {
                Ok(user) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user.defaults.as_ref().map_or(0, |t| t.len())
                    );
                    merge_defaults(&mut defaults, user);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load user keymap from {}: {}",
                        user_path.display(),
                        e
                    );
                }
            }
        }
    }

    RegistryOptions { defaults }
}

/// Overlay a config layer's defaults onto `base`, the layer winning per id.
pub fn merge_defaults(base: &mut BTreeMap<String, DefaultBinding>, layer: RegistryConfig) {
    if let Some(table) = layer.defaults {
        for (id, binding) in table {
            base.insert(id, binding);
        }
    }
}
