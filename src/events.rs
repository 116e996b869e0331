//! Event bus boundary and the keymap notification vocabulary
//!
//! The registry broadcasts every lifecycle change and every firing through
//! the host's event bus. Subscribers can listen broadly (`keymap:emit`) or
//! narrowly (`keymap:emit:<id>`).

use std::fmt;

use crate::binding::Binding;
use crate::engine::KeyEvent;

/// Emitted after a binding is stored; payload is the new binding.
pub const KEYMAP_ADD: &str = "keymap:add";

/// Emitted after a binding is removed; payload is the removed binding.
pub const KEYMAP_REMOVE: &str = "keymap:remove";

/// Emitted on every firing; payload is (id, matched shortcut, raw event).
pub const KEYMAP_EMIT: &str = "keymap:emit";

/// Per-identifier firing channel: `keymap:emit:<id>`.
pub fn emit_channel(id: &str) -> String {
    format!("{}:{}", KEYMAP_EMIT, id)
}

/// Payload handed to [`EventBus::trigger`].
pub enum Notice<'a, E> {
    /// Lifecycle payload for [`KEYMAP_ADD`] / [`KEYMAP_REMOVE`]
    Binding(&'a Binding<E>),
    /// Fire payload for [`KEYMAP_EMIT`] and its per-id channel
    Fire {
        id: &'a str,
        shortcut: &'a str,
        event: &'a KeyEvent,
    },
}

impl<E> fmt::Debug for Notice<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Binding(binding) => f.debug_tuple("Binding").field(binding).finish(),
            Notice::Fire {
                id,
                shortcut,
                event,
            } => f
                .debug_struct("Fire")
                .field("id", id)
                .field("shortcut", shortcut)
                .field("event", event)
                .finish(),
        }
    }
}

/// External publish mechanism for lifecycle and fire notifications.
///
/// Fire-and-forget: no return value, synchronous in-process delivery, no
/// ordering guarantee beyond that.
pub trait EventBus<E> {
    fn trigger(&self, event: &str, payload: Notice<'_, E>);
}
