//! chordmap - keybinding registry core for interactive visual editors
//!
//! This crate owns the identifier→binding map behind an editor's keyboard
//! shortcuts: host code and plugins associate symbolic action ids
//! (`"core:undo"`) with chord sequences and handlers, and the registry
//! guarantees at most one active binding per id.
//!
//! # Architecture
//!
//! ```text
//! KeymapRegistry::add(id, keys, handler)
//!     → bindings[id] stored
//!     → ListeningEngine::bind(keys, dispatch)
//!
//! key event → dispatch → resolve bindings[id].handler (fire time)
//!           → invoke with editor handle
//!           → EventBus: keymap:emit + keymap:emit:<id>
//! ```
//!
//! The chord-listening engine, command registry, event bus and editor
//! instance are all supplied by the host and specified only at their trait
//! boundary; chord strings are opaque data handed through to the engine.
//!
//! # Wiring a registry
//!
//! ```ignore
//! let mut keymap = KeymapRegistry::new(engine, commands, bus, editor, load_default_options());
//! keymap.load(); // install configured defaults
//! keymap.add("plugin:format", "ctrl+shift+f", "format:document");
//! ```

pub mod binding;
pub mod command;
pub mod config;
pub mod config_paths;
pub mod defaults;
pub mod engine;
pub mod events;
pub mod registry;
pub mod tracing;

// Re-export commonly used types
pub use binding::{Binding, Handler, Runnable};
pub use command::{CommandFn, CommandRegistry};
pub use config::{
    load_options_file, parse_options_yaml, DefaultBinding, KeymapError, RegistryConfig,
    RegistryOptions,
};
pub use defaults::{builtin_defaults, load_default_options, merge_defaults};
pub use engine::{DispatchFn, KeyEvent, KeyMatch, ListeningEngine};
pub use events::{EventBus, Notice};
pub use registry::{BindingMap, KeymapRegistry};
