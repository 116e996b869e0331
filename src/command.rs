//! Boundary contract for the external command registry

use std::rc::Rc;

use crate::binding::Runnable;

/// Resolves string command identifiers to runnable command objects.
///
/// The keymap registry consults this inside the dispatch path, once per
/// firing, so commands may be registered or replaced after the bindings
/// that reference them. Absence is not an error; an unresolvable handler
/// is logged and skipped.
pub trait CommandRegistry<E> {
    fn get(&self, id: &str) -> Option<Rc<dyn Runnable<E>>>;
}

/// Adapter turning a plain closure into a run-capable command object.
///
/// ```ignore
/// let command: Rc<dyn Runnable<Editor>> = Rc::new(CommandFn(|editor| editor.undo()));
/// ```
pub struct CommandFn<F>(pub F);

impl<E, F> Runnable<E> for CommandFn<F>
where
    F: Fn(&E),
{
    fn run(&self, editor: &E) {
        (self.0)(editor)
    }
}
