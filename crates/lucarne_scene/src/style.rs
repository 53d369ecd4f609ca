//! Inline style declarations.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A single inline style declaration.
///
/// Values pass through verbatim; the consuming rendering layer owns any
/// fallback behavior for malformed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDecl {
    pub property: CompactString,
    pub value: CompactString,
}

impl StyleDecl {
    pub fn new(property: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Assemble declarations into inline CSS text (`prop:value` joined by `;`).
pub fn css_text(decls: &[StyleDecl]) -> String {
    let mut out = String::new();
    for (i, decl) in decls.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(&decl.property);
        out.push(':');
        out.push_str(&decl.value);
    }
    out
}
