//! Fixed-width bordered prompt shell.

use compact_str::CompactString;
use lucarne_scene::{ElementKind, ElementNode, Node};

use crate::component::Component;

/// A bordered container of an exact given width wrapping arbitrary children.
///
/// The width value passes through verbatim; any fallback for malformed
/// values belongs to the rendering layer.
#[derive(Debug, Clone)]
pub struct Prompt {
    width: CompactString,
    children: Vec<Node>,
}

impl Prompt {
    pub fn new(width: impl Into<CompactString>) -> Self {
        Self {
            width: width.into(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Component for Prompt {
    fn render(&self) -> Node {
        ElementNode::new(ElementKind::Container)
            .class("prompt")
            .style("width", self.width.clone())
            .append(self.children.iter().cloned())
            .into()
    }
}
