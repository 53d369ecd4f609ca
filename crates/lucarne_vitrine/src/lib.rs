//! Vitrine - HTML rendering for Lucarne scene trees.
//!
//! Turns the plain scene tree a component render produces into an HTML
//! string, compact or pretty-printed. Event keys on scene nodes are host
//! wiring and never reach the markup output.
//!
//! ## Name Origin
//!
//! A **vitrine** is a glass display case: the scene goes in, and what the
//! visitor sees comes out.

pub mod options;
pub mod writer;

pub use options::RenderOptions;
pub use writer::HtmlWriter;

use lucarne_scene::Node;

/// Render a scene node to compact single-line HTML.
pub fn render_to_string(node: &Node) -> String {
    render_with_options(node, &RenderOptions::default())
}

/// Render a scene node with explicit options.
pub fn render_with_options(node: &Node, options: &RenderOptions) -> String {
    HtmlWriter::new(options).write(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucarne_scene::{ElementKind, ElementNode};

    #[test]
    fn test_render_empty_container() {
        let node: Node = ElementNode::new(ElementKind::Container).into();
        assert_eq!(render_to_string(&node), "<div></div>");
    }

    #[test]
    fn test_render_void_element() {
        assert_eq!(render_to_string(&Node::line_break()), "<br>");
    }

    #[test]
    fn test_escapes_text() {
        let node = Node::text("<script>a & b</script>");
        assert_eq!(
            render_to_string(&node),
            "&lt;script&gt;a &amp; b&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escapes_attribute_value() {
        let node: Node = ElementNode::new(ElementKind::Input)
            .attr("placeholder", "Say \"hi\"")
            .into();
        assert_eq!(
            render_to_string(&node),
            "<input placeholder=\"Say &quot;hi&quot;\">"
        );
    }

    #[test]
    fn test_event_key_never_rendered() {
        let node: Node = ElementNode::new(ElementKind::Anchor)
            .attr("role", "button")
            .on_click("switch-form")
            .child(Node::text("go"))
            .into();
        let html = render_to_string(&node);
        assert_eq!(html, "<a role=\"button\">go</a>");
        assert!(!html.contains("switch-form"));
    }
}
