//! Labeled input field row.

use std::cell::Cell;

use compact_str::CompactString;
use lucarne_scene::{ElementKind, ElementNode, Node};
use serde::{Deserialize, Serialize};

use crate::component::Component;

/// Immutable configuration for one input field row.
///
/// Optional fields resolve to their documented defaults at construction:
/// `password` defaults to a plain text input, `hidden` to a visible row.
/// The `id` must be unique among sibling fields; it pairs the label with
/// the input for label-click-to-focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub id: CompactString,
    pub icon: CompactString,
    pub placeholder: CompactString,
    #[serde(default)]
    pub password: bool,
    #[serde(default)]
    pub hidden: bool,
}

impl FieldSpec {
    pub fn new(
        id: impl Into<CompactString>,
        icon: impl Into<CompactString>,
        placeholder: impl Into<CompactString>,
    ) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            placeholder: placeholder.into(),
            password: false,
            hidden: false,
        }
    }

    /// Mask the input (`type="password"`).
    pub fn password(mut self) -> Self {
        self.password = true;
        self
    }

    /// Start with the row suppressed from visual flow.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// A labeled, optionally masked, optionally hidden text field row.
///
/// The visibility flag is owned by this instance alone and mutated only
/// through [`set_shown`](Self::set_shown).
#[derive(Debug)]
pub struct InputBox {
    spec: FieldSpec,
    shown: Cell<bool>,
}

impl InputBox {
    pub fn new(spec: FieldSpec) -> Self {
        tracing::trace!(id = %spec.id, hidden = spec.hidden, "constructing input box");
        let shown = Cell::new(!spec.hidden);
        Self { spec, shown }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn is_shown(&self) -> bool {
        self.shown.get()
    }

    /// Show or suppress the row. Idempotent; the host re-renders after.
    pub fn set_shown(&self, shown: bool) {
        self.shown.set(shown);
    }
}

impl Component for InputBox {
    fn render(&self) -> Node {
        let input_type = if self.spec.password { "password" } else { "text" };

        let mut row = ElementNode::new(ElementKind::Container).class("text-box");
        if !self.shown.get() {
            // Removed from visual flow, not merely dimmed.
            row = row.style("display", "none");
        }
        row.child(
            ElementNode::new(ElementKind::Label)
                .attr("for", self.spec.id.clone())
                .child(
                    ElementNode::new(ElementKind::Container)
                        .child(Node::text(self.spec.icon.clone())),
                ),
        )
        .child(
            ElementNode::new(ElementKind::Input)
                .attr("id", self.spec.id.clone())
                .attr("type", input_type)
                .attr("placeholder", self.spec.placeholder.clone())
                .flag("required"),
        )
        .into()
    }
}
