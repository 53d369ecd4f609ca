//! Render options.

use serde::{Deserialize, Serialize};

/// Options for HTML rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Indented multi-line output instead of a single line.
    #[serde(default)]
    pub pretty: bool,

    /// Spaces per indent level in pretty mode.
    #[serde(default = "default_indent_width")]
    pub indent_width: u8,
}

fn default_indent_width() -> u8 {
    2
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent_width: default_indent_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RenderOptions::default();
        assert!(!opts.pretty);
        assert_eq!(opts.indent_width, 2);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let opts: RenderOptions = serde_json::from_str("{\"pretty\":true}").unwrap();
        assert!(opts.pretty);
        assert_eq!(opts.indent_width, 2);
    }
}
