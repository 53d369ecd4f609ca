//! Atelier - The component workshop for Lucarne.
//!
//! Components here are pure functions of (configuration, local state) into a
//! [`lucarne_scene`] node tree. Each state cell has exactly one owner and one
//! writer; all external influence arrives as configuration at construction.
//!
//! ## Name Origin
//!
//! **Atelier** (/ˌætəlˈjeɪ/) is an artist's workshop. This one assembles
//! overlay containers, prompt shells, and credential forms.

pub mod callback;
pub mod component;
pub mod errors;
pub mod input;
pub mod login;
pub mod popup;
pub mod prompt;

pub use callback::Callback;
pub use component::{Bindings, Component};
pub use errors::VariantError;
pub use input::{FieldSpec, InputBox};
pub use login::{FormMode, LoginPrompt, SWITCH_FORM};
pub use popup::{PopUp, Position};
pub use prompt::Prompt;
