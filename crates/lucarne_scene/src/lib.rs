//! Scene - The markup scene tree for Lucarne.
//!
//! A scene is the plain, inspectable tree of markup nodes that a component
//! render produces: node kind + attributes + children, independent of any
//! concrete rendering runtime. Hosts consume scenes directly (structural
//! inspection, diffing, test assertions) or hand them to a renderer such as
//! `lucarne_vitrine`.
//!
//! ## Name Origin
//!
//! A **scene** is what a stage set designer hands to the theatre: the full
//! arrangement of set pieces, ready to be lit and shown, but not yet tied to
//! any particular stage.
//!
//! # Modules
//!
//! - **node**: node kinds, element and text nodes, attributes, queries
//! - **style**: inline style declarations and CSS text assembly
//! - **tags**: static HTML tag tables (void elements)
//! - **hash**: content fingerprinting for host change detection

pub mod hash;
pub mod node;
pub mod style;
pub mod tags;

pub use hash::{fingerprint, fingerprint_hex};
pub use node::{Attribute, Descendants, ElementKind, ElementNode, Node, TextNode};
pub use style::{css_text, StyleDecl};
pub use tags::is_void_tag;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;
