//! Binding struct representing a mapping from a chord string to a handler

use std::fmt;
use std::rc::Rc;

/// Invocation capability for command-object handlers.
///
/// Implemented by anything that can be invoked with the host's editor
/// handle. Plain closures can be wrapped via
/// [`CommandFn`](crate::command::CommandFn).
pub trait Runnable<E> {
    fn run(&self, editor: &E);
}

/// What a binding invokes when its chord fires.
///
/// `Command` holds a name, not a command object: the lookup in the command
/// registry happens inside the dispatch path, so a binding can be installed
/// before its target command exists.
pub enum Handler<E> {
    /// Named command, resolved through the command registry at fire time
    Command(String),
    /// Plain callback taking the editor handle
    Callback(Rc<dyn Fn(&E)>),
    /// Run-capable object invoked through [`Runnable::run`]
    Runnable(Rc<dyn Runnable<E>>),
}

impl<E> Handler<E> {
    /// Handler referencing a named command (`"core:undo"`)
    pub fn command(id: impl Into<String>) -> Self {
        Handler::Command(id.into())
    }

    /// Handler wrapping a plain callback
    pub fn callback(f: impl Fn(&E) + 'static) -> Self {
        Handler::Callback(Rc::new(f))
    }

    /// Handler wrapping a run-capable object
    pub fn runnable(runnable: Rc<dyn Runnable<E>>) -> Self {
        Handler::Runnable(runnable)
    }
}

impl<E> Clone for Handler<E> {
    fn clone(&self) -> Self {
        match self {
            Handler::Command(id) => Handler::Command(id.clone()),
            Handler::Callback(f) => Handler::Callback(Rc::clone(f)),
            Handler::Runnable(r) => Handler::Runnable(Rc::clone(r)),
        }
    }
}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Command(id) => f.debug_tuple("Command").field(id).finish(),
            Handler::Callback(_) => f.write_str("Callback"),
            Handler::Runnable(_) => f.write_str("Runnable"),
        }
    }
}

/// Command handlers compare by name; callable handlers by identity.
impl<E> PartialEq for Handler<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Handler::Command(a), Handler::Command(b)) => a == b,
            (Handler::Callback(a), Handler::Callback(b)) => Rc::ptr_eq(a, b),
            (Handler::Runnable(a), Handler::Runnable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<E> From<&str> for Handler<E> {
    fn from(command_id: &str) -> Self {
        Handler::Command(command_id.to_string())
    }
}

impl<E> From<String> for Handler<E> {
    fn from(command_id: String) -> Self {
        Handler::Command(command_id)
    }
}

/// A single registered binding: identifier, chord string, handler
///
/// `keys` may list several comma-separated chord alternatives; the string is
/// passed through verbatim to the listening engine, which owns its syntax.
pub struct Binding<E> {
    /// Unique identifier, `namespace:action` by convention
    pub id: String,
    /// Chord string registered with the listening engine
    pub keys: String,
    /// What to invoke when any of the chords fires
    pub handler: Handler<E>,
}

impl<E> Binding<E> {
    pub fn new(id: impl Into<String>, keys: impl Into<String>, handler: Handler<E>) -> Self {
        Self {
            id: id.into(),
            keys: keys.into(),
            handler,
        }
    }

    /// First chord alternative, for display surfaces
    pub fn primary_shortcut(&self) -> &str {
        self.keys
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or(&self.keys)
    }
}

impl<E> Clone for Binding<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            keys: self.keys.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<E> fmt::Debug for Binding<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("id", &self.id)
            .field("keys", &self.keys)
            .field("handler", &self.handler)
            .finish()
    }
}

impl<E> PartialEq for Binding<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.keys == other.keys && self.handler == other.handler
    }
}
