//! Markup scene node types.
//!
//! This module defines the node tree a component render produces. Nodes are
//! plain owned data: they serialize to JSON, compare structurally, and carry
//! no reference to a rendering runtime.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::style::StyleDecl;

/// Element kind discriminant.
///
/// Each kind maps to exactly one markup tag; the kinds cover the generic
/// node vocabulary components emit (containers, headings, labels, line
/// breaks, anchors, input elements).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum ElementKind {
    Container = 0,
    Heading = 1,
    Label = 2,
    LineBreak = 3,
    Anchor = 4,
    Input = 5,
}

impl ElementKind {
    /// The markup tag this kind renders as.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Container => "div",
            Self::Heading => "h1",
            Self::Label => "label",
            Self::LineBreak => "br",
            Self::Anchor => "a",
            Self::Input => "input",
        }
    }
}

/// A scene tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Node {
    Element(ElementNode),
    Text(TextNode),
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<CompactString>) -> Self {
        Self::Text(TextNode::new(content))
    }

    /// Create a bare line-break element.
    pub fn line_break() -> Self {
        ElementNode::new(ElementKind::LineBreak).into()
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Depth-first traversal over this node and everything below it.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First element in the subtree carrying the given class.
    pub fn find_by_class(&self, class: &str) -> Option<&ElementNode> {
        self.descendants()
            .filter_map(Node::as_element)
            .find(|el| el.has_class(class))
    }

    /// First element in the subtree carrying the given id attribute.
    pub fn find_by_id(&self, id: &str) -> Option<&ElementNode> {
        self.descendants()
            .filter_map(Node::as_element)
            .find(|el| el.attr_value("id") == Some(id))
    }
}

impl From<ElementNode> for Node {
    fn from(el: ElementNode) -> Self {
        Self::Element(el)
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Self::Text(text)
    }
}

/// Element node: kind + attributes + children.
///
/// Class names and inline style declarations are modeled apart from the
/// generic attribute list since renderers treat them specially. `on_click`
/// carries a symbolic event key for host wiring; renderers drop it from
/// markup output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    pub kind: ElementKind,
    #[serde(default)]
    pub classes: SmallVec<[CompactString; 2]>,
    #[serde(default)]
    pub styles: Vec<StyleDecl>,
    #[serde(default)]
    pub attrs: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<CompactString>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl ElementNode {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            classes: SmallVec::new(),
            styles: Vec::new(),
            attrs: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }

    /// Append a class name.
    pub fn class(mut self, class: impl Into<CompactString>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Append an inline style declaration.
    pub fn style(
        mut self,
        property: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Self {
        self.styles.push(StyleDecl::new(property, value));
        self
    }

    /// Append a valued attribute.
    pub fn attr(
        mut self,
        name: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Self {
        self.attrs.push(Attribute::new(name, value));
        self
    }

    /// Append a bare boolean attribute (e.g. `required`).
    pub fn flag(mut self, name: impl Into<CompactString>) -> Self {
        self.attrs.push(Attribute::flag(name));
        self
    }

    /// Annotate with an event key for host wiring.
    pub fn on_click(mut self, key: impl Into<CompactString>) -> Self {
        self.on_click = Some(key.into());
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a sequence of child nodes.
    pub fn append(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Value of a valued attribute; `None` for absent or bare attributes.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .and_then(|attr| attr.value.as_deref())
    }

    /// Whether a bare boolean attribute is present.
    pub fn has_flag(&self, name: &str) -> bool {
        self.attrs
            .iter()
            .any(|attr| attr.name == name && attr.value.is_none())
    }

    /// Value of an inline style declaration, if present.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }
}

/// Attribute node.
///
/// `value: None` marks a bare boolean attribute (`required`, `disabled`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: CompactString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<CompactString>,
}

impl Attribute {
    pub fn new(name: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn flag(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// Text node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub content: CompactString,
}

impl TextNode {
    pub fn new(content: impl Into<CompactString>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Depth-first iterator over a subtree, starting at the root node itself.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Element(el) = node {
            for child in el.children.iter().rev() {
                self.stack.push(child);
            }
        }
        Some(node)
    }
}
