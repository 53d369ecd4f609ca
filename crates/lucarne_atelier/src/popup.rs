//! Positioned overlay container.

use std::fmt;
use std::str::FromStr;

use compact_str::{format_compact, CompactString};
use lucarne_scene::{ElementKind, ElementNode, Node};
use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::errors::VariantError;

/// Placement instruction for the overlay.
///
/// A pure rendering input supplied by the parent; absent defaults to
/// [`Position::Center`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Position {
    #[default]
    Center = 0,
    TopLeft = 1,
}

impl Position {
    /// Suffix of the placement class (`popup-center`, `popup-top-left`).
    pub fn class_suffix(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::TopLeft => "top-left",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_suffix())
    }
}

impl FromStr for Position {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center" => Ok(Self::Center),
            "top-left" => Ok(Self::TopLeft),
            other => Err(VariantError::UnknownPosition(CompactString::from(other))),
        }
    }
}

/// An overlay container wrapping arbitrary children, placed by a
/// [`Position`] variant. Stateless.
#[derive(Debug, Clone, Default)]
pub struct PopUp {
    position: Position,
    children: Vec<Node>,
}

impl PopUp {
    /// Centered overlay with no children.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Component for PopUp {
    fn render(&self) -> Node {
        ElementNode::new(ElementKind::Container)
            .class("popup")
            .class(format_compact!("popup-{}", self.position.class_suffix()))
            .append(self.children.iter().cloned())
            .into()
    }
}
