//! # Lucarne
//!
//! Presentational overlay and credential-form components that render to a
//! plain, inspectable markup scene tree.
//!
//! This crate re-exports all Lucarne sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`scene`] - Markup scene tree: nodes, attributes, queries, fingerprints
//! - [`atelier`] - Components: popup, prompt, input field, credential form
//! - [`vitrine`] - HTML rendering of scene trees

/// Markup scene tree: nodes, attributes, queries, fingerprints.
pub use lucarne_scene as scene;

/// Components: popup, prompt, input field, credential form.
pub use lucarne_atelier as atelier;

/// HTML rendering of scene trees.
pub use lucarne_vitrine as vitrine;
