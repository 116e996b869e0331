//! Shared test collaborators for integration tests
//!
//! Note: items may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chordmap::{
    CommandFn, CommandRegistry, DispatchFn, EventBus, KeyEvent, KeyMatch, ListeningEngine, Notice,
    Runnable,
};

/// Editor stand-in; invoked handlers push markers onto it.
#[derive(Default)]
pub struct TestEditor {
    log: RefCell<Vec<String>>,
}

impl TestEditor {
    pub fn mark(&self, entry: &str) {
        self.log.borrow_mut().push(entry.to_string());
    }

    pub fn entries(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

/// In-memory listening engine that can synthesize key events.
///
/// Chord strings are stored verbatim; a synthesized event matches a
/// subscription when it equals one of the comma-separated alternatives.
#[derive(Default)]
pub struct RecordingEngine {
    subscriptions: RefCell<HashMap<String, Vec<Rc<DispatchFn>>>>,
}

impl RecordingEngine {
    /// Fire every callback whose chord string lists `shortcut`.
    pub fn press(&self, shortcut: &str) {
        let event = KeyEvent::new(shortcut);
        let matched = KeyMatch::new(shortcut);
        let callbacks: Vec<Rc<DispatchFn>> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|(keys, _)| keys.split(',').any(|alt| alt.trim() == shortcut))
            .flat_map(|(_, callbacks)| callbacks.iter().cloned())
            .collect();
        for callback in callbacks {
            (*callback)(&event, &matched);
        }
    }

    pub fn is_bound(&self, keys: &str) -> bool {
        self.subscriptions
            .borrow()
            .get(keys)
            .is_some_and(|callbacks| !callbacks.is_empty())
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }
}

impl ListeningEngine for RecordingEngine {
    fn bind(&self, keys: &str, callback: DispatchFn) {
        self.subscriptions
            .borrow_mut()
            .entry(keys.to_string())
            .or_default()
            .push(Rc::new(callback));
    }

    fn unbind(&self, keys: &str) {
        self.subscriptions.borrow_mut().remove(keys);
    }
}

/// Command registry backed by a plain map.
#[derive(Default)]
pub struct MapCommands {
    commands: RefCell<HashMap<String, Rc<dyn Runnable<TestEditor>>>>,
}

impl MapCommands {
    pub fn register(&self, id: &str, command: impl Fn(&TestEditor) + 'static) {
        let command: Rc<dyn Runnable<TestEditor>> = Rc::new(CommandFn(command));
        self.commands.borrow_mut().insert(id.to_string(), command);
    }
}

impl CommandRegistry<TestEditor> for MapCommands {
    fn get(&self, id: &str) -> Option<Rc<dyn Runnable<TestEditor>>> {
        self.commands.borrow().get(id).cloned()
    }
}

/// Bus that records every trigger as (event name, payload summary).
#[derive(Default)]
pub struct RecordingBus {
    triggered: RefCell<Vec<(String, String)>>,
}

impl RecordingBus {
    pub fn count(&self, event: &str) -> usize {
        self.triggered
            .borrow()
            .iter()
            .filter(|(name, _)| name == event)
            .count()
    }

    pub fn event_names(&self) -> Vec<String> {
        self.triggered
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn all(&self) -> Vec<(String, String)> {
        self.triggered.borrow().clone()
    }
}

impl EventBus<TestEditor> for RecordingBus {
    fn trigger(&self, event: &str, payload: Notice<'_, TestEditor>) {
        let summary = match payload {
            Notice::Binding(binding) => binding.id.clone(),
            Notice::Fire { id, shortcut, .. } => format!("{}@{}", id, shortcut),
        };
        self.triggered
            .borrow_mut()
            .push((event.to_string(), summary));
    }
}
