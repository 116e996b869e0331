//! Boundary contract for the global chord-listening engine
//!
//! The engine owns everything about keys themselves: chord syntax,
//! comma-separated alternatives, modifier normalization, and the actual
//! OS/window-system key listening. The registry only hands it opaque chord
//! strings and callbacks.

/// Raw key event as reported by the listening engine.
///
/// Opaque to the registry: it is forwarded untouched in `keymap:emit`
/// payloads so subscribers can inspect whatever the engine reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// Engine-specific description of the physical event
    pub raw: String,
    /// Whether the engine reported this as an auto-repeat
    pub repeat: bool,
}

impl KeyEvent {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            repeat: false,
        }
    }
}

/// Match metadata handed to a dispatch callback alongside the raw event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    /// The chord alternative that matched, exactly as written in the
    /// binding's keys string
    pub shortcut: String,
}

impl KeyMatch {
    pub fn new(shortcut: impl Into<String>) -> Self {
        Self {
            shortcut: shortcut.into(),
        }
    }
}

/// Callback installed on the engine for one binding.
pub type DispatchFn = Box<dyn Fn(&KeyEvent, &KeyMatch)>;

/// The global key-chord dispatcher the registry drives.
///
/// `bind` registers a callback fired synchronously on every matching key
/// sequence; `unbind` drops all callbacks registered under the same chord
/// string. Implementations take `&self` and use interior mutability, since
/// the engine handle is shared with the registry for its whole lifetime.
pub trait ListeningEngine {
    fn bind(&self, keys: &str, callback: DispatchFn);
    fn unbind(&self, keys: &str);
}
