//! Instance-bound event callbacks.

use std::fmt;
use std::rc::Rc;

/// A clonable event callback bound to its owning component instance.
///
/// The closure captures its state reference once at construction, so the
/// reference stays valid however and whenever the host invokes the callback.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback.
    pub fn emit(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}
