//! The keybinding registry: identifier→binding map plus engine wiring
//!
//! Owns the `id → Binding` map, mediates every add/remove/lookup, and is
//! the sole caller of the listening engine's bind/unbind primitives. Every
//! lifecycle change and every firing is broadcast through the event bus.

use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::binding::{Binding, Handler};
use crate::command::CommandRegistry;
use crate::config::RegistryOptions;
use crate::engine::{DispatchFn, ListeningEngine};
use crate::events::{self, EventBus, Notice};

/// The registry's internal mapping, keyed by binding id.
pub type BindingMap<E> = BTreeMap<String, Binding<E>>;

/// Registry of keyboard shortcuts for one editor instance.
///
/// At most one binding is active per identifier: adding an id that already
/// exists fully unregisters the previous binding (map entry and engine
/// subscription) before installing the new one.
///
/// Single-threaded: the registry and its collaborators are shared via `Rc`
/// and driven from one event-dispatch thread. Re-entrant mutation of an id
/// from inside its own firing is undefined behavior.
pub struct KeymapRegistry<E> {
    /// Shared with every dispatch closure so a firing resolves its handler
    /// through the live map, never through a value captured at add time
    bindings: Rc<RefCell<BindingMap<E>>>,
    engine: Rc<dyn ListeningEngine>,
    commands: Rc<dyn CommandRegistry<E>>,
    bus: Rc<dyn EventBus<E>>,
    editor: Rc<E>,
    options: RegistryOptions,
}

impl<E: 'static> KeymapRegistry<E> {
    /// Wire a registry to its collaborators.
    ///
    /// Construction is side-effect-free: nothing touches the listening
    /// engine until [`load`](Self::load) or [`add`](Self::add) is called.
    pub fn new(
        engine: Rc<dyn ListeningEngine>,
        commands: Rc<dyn CommandRegistry<E>>,
        bus: Rc<dyn EventBus<E>>,
        editor: Rc<E>,
        options: RegistryOptions,
    ) -> Self {
        Self {
            bindings: Rc::new(RefCell::new(BTreeMap::new())),
            engine,
            commands,
            bus,
            editor,
            options,
        }
    }

    /// Install every configured default binding, in map iteration order.
    pub fn load(&mut self) {
        let defaults = self.options.defaults.clone();
        tracing::info!("Installing {} default bindings", defaults.len());
        for (id, default) in defaults {
            self.add(id, default.keys, default.handler);
        }
    }

    /// Register a binding, superseding any existing binding with the same id.
    ///
    /// `id` and `keys` must be non-empty; `keys` is handed to the listening
    /// engine verbatim, so a malformed chord string is the engine's to
    /// reject. Emits `keymap:add` with the stored binding.
    pub fn add(
        &mut self,
        id: impl Into<String>,
        keys: impl Into<String>,
        handler: impl Into<Handler<E>>,
    ) -> Binding<E> {
        let id = id.into();
        let keys = keys.into();
        debug_assert!(!id.is_empty(), "binding id must be non-empty");
        debug_assert!(!keys.is_empty(), "binding keys must be non-empty");

        if self.bindings.borrow().contains_key(&id) {
            self.remove(&id);
        }

        let binding = Binding::new(id.clone(), keys.clone(), handler.into());
        self.bindings.borrow_mut().insert(id.clone(), binding.clone());
        self.engine.bind(&keys, self.dispatcher(id.clone()));
        tracing::debug!("Bound {} to {}", id, keys);

        self.bus.trigger(events::KEYMAP_ADD, Notice::Binding(&binding));
        binding
    }

    /// Build the dispatch callback installed on the engine for `id`.
    ///
    /// The closure captures the id immutably; the handler is looked up in
    /// the shared map on every firing. A callback left dangling on the
    /// engine after its binding is gone is therefore inert.
    fn dispatcher(&self, id: String) -> DispatchFn {
        let bindings = Rc::clone(&self.bindings);
        let commands = Rc::clone(&self.commands);
        let bus = Rc::clone(&self.bus);
        let editor = Rc::clone(&self.editor);

        Box::new(move |event, key_match| {
            // Clone the handler out so the map borrow is not held across
            // user code; a handler may re-enter the registry.
            let handler = match bindings.borrow().get(&id) {
                Some(binding) => binding.handler.clone(),
                None => return,
            };
            tracing::trace!("Dispatching {} for {}", id, key_match.shortcut);

            match handler {
                Handler::Command(name) => match commands.get(&name) {
                    Some(command) => command.run(&editor),
                    None => {
                        tracing::warn!("Binding {} references unknown command {}", id, name);
                    }
                },
                Handler::Callback(callback) => (*callback)(&editor),
                Handler::Runnable(runnable) => runnable.run(&editor),
            }

            bus.trigger(
                events::KEYMAP_EMIT,
                Notice::Fire {
                    id: &id,
                    shortcut: &key_match.shortcut,
                    event,
                },
            );
            bus.trigger(
                &events::emit_channel(&id),
                Notice::Fire {
                    id: &id,
                    shortcut: &key_match.shortcut,
                    event,
                },
            );
        })
    }

    /// Look up a binding by id. Pure; absence is not an error.
    pub fn get(&self, id: &str) -> Option<Binding<E>> {
        self.bindings.borrow().get(id).cloned()
    }

    /// The live internal mapping, keyed by id.
    ///
    /// Read-only by contract. Holding the returned borrow across a call to
    /// [`add`](Self::add) or [`remove`](Self::remove) will panic.
    pub fn bindings(&self) -> Ref<'_, BindingMap<E>> {
        self.bindings.borrow()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.bindings.borrow().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.bindings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }

    /// First binding registered under exactly this keys string
    pub fn binding_for_keys(&self, keys: &str) -> Option<Binding<E>> {
        self.bindings
            .borrow()
            .values()
            .find(|binding| binding.keys == keys)
            .cloned()
    }

    /// The options this registry was constructed with
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Unregister a binding: map entry, engine subscription, notification.
    ///
    /// The engine's unbind primitive is keyed by chord string, so the
    /// binding is retrieved first to recover its stored `keys` (covering
    /// every alternative). Removing an unknown id is a silent no-op.
    pub fn remove(&mut self, id: &str) -> Option<Binding<E>> {
        let removed = self.bindings.borrow_mut().remove(id)?;
        self.engine.unbind(&removed.keys);
        tracing::debug!("Unbound {} from {}", id, removed.keys);

        self.bus
            .trigger(events::KEYMAP_REMOVE, Notice::Binding(&removed));
        Some(removed)
    }
}
