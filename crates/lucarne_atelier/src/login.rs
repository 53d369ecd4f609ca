//! Two-mode login/signup credential form.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use compact_str::CompactString;
use lucarne_scene::{ElementKind, ElementNode, Node};
use serde::{Deserialize, Serialize};

use crate::callback::Callback;
use crate::component::{Bindings, Component};
use crate::errors::VariantError;
use crate::input::{FieldSpec, InputBox};
use crate::popup::PopUp;
use crate::prompt::Prompt;

/// Event key on the mode-switch anchor; hosts wire it through
/// [`Component::bindings`].
pub const SWITCH_FORM: &str = "switch-form";

/// The credential form variant currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum FormMode {
    #[default]
    Login = 0,
    Signup = 1,
}

impl FormMode {
    /// The other mode. `switch_form` applies this unconditionally.
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    /// Heading text; the submit control reuses it as its label.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Log In",
            Self::Signup => "Sign Up",
        }
    }

    /// Label of the mode-switch link.
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account?",
            Self::Signup => "Already have an account?",
        }
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Login => "login",
            Self::Signup => "signup",
        })
    }
}

impl FromStr for FormMode {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(Self::Login),
            "signup" => Ok(Self::Signup),
            other => Err(VariantError::UnknownFormMode(CompactString::from(other))),
        }
    }
}

/// The credential form orchestrator.
///
/// Owns the single piece of interactive state, the current [`FormMode`],
/// in a cell shared only with the switch callback captured at construction.
/// Authentication, submission, and validation belong to external
/// collaborators wired to the rendered controls.
#[derive(Debug)]
pub struct LoginPrompt {
    mode: Rc<Cell<FormMode>>,
    switch_form: Callback,
}

impl LoginPrompt {
    /// New form in the initial `login` mode.
    pub fn new() -> Self {
        let mode = Rc::new(Cell::new(FormMode::Login));
        let switch_form = Callback::new({
            let mode = Rc::clone(&mode);
            move || mode.set(mode.get().toggled())
        });
        Self { mode, switch_form }
    }

    pub fn mode(&self) -> FormMode {
        self.mode.get()
    }

    /// Toggle between login and signup. No guards, no terminal state.
    pub fn switch_form(&self) {
        self.switch_form.emit();
    }
}

impl Default for LoginPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LoginPrompt {
    fn render(&self) -> Node {
        let mode = self.mode.get();
        tracing::trace!(mode = %mode, "rendering login prompt");

        let mut prompt = Prompt::new("300px")
            .child(ElementNode::new(ElementKind::Heading).child(Node::text(mode.heading())))
            .child(Node::line_break());
        // The invite field exists only in signup mode; login omits it from
        // the scene entirely rather than hiding it.
        if mode == FormMode::Signup {
            prompt = prompt.child(InputBox::new(FieldSpec::new("invite", "📨", "Invite")).render());
        }
        let prompt = prompt
            .child(InputBox::new(FieldSpec::new("username", "🙍‍♂️", "Username")).render())
            .child(InputBox::new(FieldSpec::new("password", "🔑", "Password").password()).render())
            .child(Node::line_break())
            .child(
                ElementNode::new(ElementKind::Anchor)
                    .attr("role", "button")
                    .on_click(SWITCH_FORM)
                    .child(Node::text(mode.switch_label())),
            )
            .child(Node::line_break())
            .child(
                ElementNode::new(ElementKind::Input)
                    .attr("type", "button")
                    .attr("value", mode.heading()),
            );

        PopUp::new().child(prompt.render()).render()
    }

    fn bindings(&self) -> Bindings {
        let mut bindings = Bindings::default();
        bindings.insert(SWITCH_FORM.into(), self.switch_form.clone());
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading_text(scene: &Node) -> CompactString {
        scene
            .descendants()
            .filter_map(Node::as_element)
            .find(|el| el.kind == ElementKind::Heading)
            .and_then(|el| el.children[0].as_text())
            .map(|text| text.content.clone())
            .unwrap()
    }

    fn switch_label(scene: &Node) -> CompactString {
        scene
            .descendants()
            .filter_map(Node::as_element)
            .find(|el| el.kind == ElementKind::Anchor)
            .and_then(|el| el.children[0].as_text())
            .map(|text| text.content.clone())
            .unwrap()
    }

    fn submit_value(scene: &Node) -> CompactString {
        scene
            .descendants()
            .filter_map(Node::as_element)
            .find(|el| el.kind == ElementKind::Input && el.attr_value("type") == Some("button"))
            .and_then(|el| el.attr_value("value"))
            .map(CompactString::from)
            .unwrap()
    }

    #[test]
    fn test_initial_render_is_login() {
        let form = LoginPrompt::new();
        assert_eq!(form.mode(), FormMode::Login);
        let scene = form.render();
        assert_eq!(heading_text(&scene), "Log In");
        assert_eq!(switch_label(&scene), "Don't have an account?");
        assert_eq!(submit_value(&scene), "Log In");
        assert!(scene.find_by_id("invite").is_none());
        assert!(scene.find_by_id("username").is_some());
        assert!(scene.find_by_id("password").is_some());
    }

    #[test]
    fn test_switch_form_flips_every_mode_dependent_output() {
        let form = LoginPrompt::new();
        form.switch_form();
        assert_eq!(form.mode(), FormMode::Signup);
        let scene = form.render();
        assert_eq!(heading_text(&scene), "Sign Up");
        assert_eq!(switch_label(&scene), "Already have an account?");
        assert_eq!(submit_value(&scene), "Sign Up");
        let invite = scene.find_by_id("invite").unwrap();
        assert_eq!(invite.attr_value("placeholder"), Some("Invite"));
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let form = LoginPrompt::new();
        let initial = form.render();
        form.switch_form();
        form.switch_form();
        assert_eq!(form.mode(), FormMode::Login);
        assert_eq!(form.render(), initial);
    }

    #[test]
    fn test_password_field_is_masked() {
        let scene = LoginPrompt::new().render();
        let password = scene.find_by_id("password").unwrap();
        assert_eq!(password.attr_value("type"), Some("password"));
        let username = scene.find_by_id("username").unwrap();
        assert_eq!(username.attr_value("type"), Some("text"));
    }

    #[test]
    fn test_form_nests_popup_and_prompt() {
        let scene = LoginPrompt::new().render();
        let popup = scene.as_element().unwrap();
        assert!(popup.has_class("popup"));
        assert!(popup.has_class("popup-center"));
        let prompt = popup.children[0].as_element().unwrap();
        assert!(prompt.has_class("prompt"));
        assert_eq!(prompt.style_value("width"), Some("300px"));
    }

    #[test]
    fn test_anchor_carries_switch_event_key() {
        let scene = LoginPrompt::new().render();
        let anchor = scene
            .descendants()
            .filter_map(Node::as_element)
            .find(|el| el.kind == ElementKind::Anchor)
            .unwrap();
        assert_eq!(anchor.attr_value("role"), Some("button"));
        assert_eq!(anchor.on_click.as_deref(), Some(SWITCH_FORM));
    }

    #[test]
    fn test_bindings_dispatch_toggles_mode() {
        // Host-style invocation: look up the event key, emit the callback.
        let form = LoginPrompt::new();
        let bindings = form.bindings();
        bindings[SWITCH_FORM].emit();
        assert_eq!(form.mode(), FormMode::Signup);
        bindings[SWITCH_FORM].emit();
        assert_eq!(form.mode(), FormMode::Login);
    }

    #[test]
    fn test_fingerprint_tracks_mode() {
        let form = LoginPrompt::new();
        let login = lucarne_scene::fingerprint(&form.render());
        assert_eq!(login, lucarne_scene::fingerprint(&form.render()));
        form.switch_form();
        assert_ne!(login, lucarne_scene::fingerprint(&form.render()));
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("login".parse::<FormMode>().unwrap(), FormMode::Login);
        assert_eq!("signup".parse::<FormMode>().unwrap(), FormMode::Signup);
        assert!(matches!(
            "register".parse::<FormMode>(),
            Err(VariantError::UnknownFormMode(_))
        ));
    }
}
