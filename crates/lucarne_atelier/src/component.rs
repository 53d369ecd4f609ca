//! The component contract.

use compact_str::CompactString;
use lucarne_scene::Node;
use rustc_hash::FxHashMap;

use crate::callback::Callback;

/// Event keys a component expects the host to wire, mapped to the callbacks
/// that service them.
pub type Bindings = FxHashMap<CompactString, Callback>;

/// A view component: a deterministic function of configuration and local
/// state into a scene tree.
///
/// Rendering must be free of side effects on the produced scene; diagnostic
/// tracing is the only permitted one. Hosts call [`render`](Self::render)
/// again after any state mutation.
pub trait Component {
    fn render(&self) -> Node;

    /// Callbacks for the event keys present in the rendered scene.
    fn bindings(&self) -> Bindings {
        Bindings::default()
    }
}
