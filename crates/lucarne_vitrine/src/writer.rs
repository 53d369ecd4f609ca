//! HTML writer.
//!
//! A small codegen context: an output buffer plus an indent level, walking
//! the scene tree depth-first. Class lists and inline styles render through
//! the `class`/`style` attributes; generic attributes follow in insertion
//! order; bare attributes render without a value.

use htmlize::{escape_attribute, escape_text};
use lucarne_scene::{css_text, is_void_tag, ElementNode, Node};

use crate::options::RenderOptions;

/// HTML writer context.
pub struct HtmlWriter<'a> {
    options: &'a RenderOptions,
    /// Output buffer
    out: String,
    /// Indent level (pretty mode only)
    indent_level: u32,
}

impl<'a> HtmlWriter<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            out: String::with_capacity(256),
            indent_level: 0,
        }
    }

    /// Write a scene node and return the accumulated HTML.
    pub fn write(mut self, node: &Node) -> String {
        self.write_node(node);
        if self.options.pretty {
            while self.out.ends_with('\n') {
                self.out.pop();
            }
        }
        self.out
    }

    fn write_node(&mut self, node: &Node) {
        match node {
            Node::Element(el) => self.write_element(el),
            Node::Text(text) => {
                self.push_indent();
                self.out.push_str(&escape_text(text.content.as_str()));
                self.push_newline();
            }
        }
    }

    fn write_element(&mut self, el: &ElementNode) {
        let tag = el.kind.tag();

        self.push_indent();
        self.out.push('<');
        self.out.push_str(tag);
        self.write_attrs(el);
        self.out.push('>');

        if is_void_tag(tag) {
            self.push_newline();
            return;
        }

        if el.children.is_empty() {
            self.out.push_str("</");
            self.out.push_str(tag);
            self.out.push('>');
            self.push_newline();
            return;
        }

        self.push_newline();
        self.indent_level += 1;
        for child in &el.children {
            self.write_node(child);
        }
        self.indent_level -= 1;

        self.push_indent();
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        self.push_newline();
    }

    fn write_attrs(&mut self, el: &ElementNode) {
        if !el.classes.is_empty() {
            self.out.push_str(" class=\"");
            for (i, class) in el.classes.iter().enumerate() {
                if i > 0 {
                    self.out.push(' ');
                }
                self.out.push_str(&escape_attribute(class.as_str()));
            }
            self.out.push('"');
        }

        if !el.styles.is_empty() {
            self.out.push_str(" style=\"");
            self.out
                .push_str(&escape_attribute(css_text(&el.styles).as_str()));
            self.out.push('"');
        }

        for attr in &el.attrs {
            self.out.push(' ');
            self.out.push_str(&attr.name);
            if let Some(value) = &attr.value {
                self.out.push_str("=\"");
                self.out.push_str(&escape_attribute(value.as_str()));
                self.out.push('"');
            }
        }

        // el.on_click is host wiring; markup output omits event keys.
    }

    fn push_indent(&mut self) {
        if self.options.pretty {
            let width = self.indent_level * u32::from(self.options.indent_width);
            for _ in 0..width {
                self.out.push(' ');
            }
        }
    }

    fn push_newline(&mut self) {
        if self.options.pretty {
            self.out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucarne_scene::ElementKind;

    #[test]
    fn test_attr_order_class_style_then_attrs() {
        let node: Node = ElementNode::new(ElementKind::Container)
            .class("text-box")
            .style("display", "none")
            .attr("id", "row")
            .into();
        let html = HtmlWriter::new(&RenderOptions::default()).write(&node);
        assert_eq!(
            html,
            "<div class=\"text-box\" style=\"display:none\" id=\"row\"></div>"
        );
    }

    #[test]
    fn test_bare_attribute_has_no_value() {
        let node: Node = ElementNode::new(ElementKind::Input)
            .attr("type", "text")
            .flag("required")
            .into();
        let html = HtmlWriter::new(&RenderOptions::default()).write(&node);
        assert_eq!(html, "<input type=\"text\" required>");
    }

    #[test]
    fn test_pretty_indents_children() {
        let node: Node = ElementNode::new(ElementKind::Container)
            .class("popup")
            .child(Node::text("hi"))
            .into();
        let options = RenderOptions {
            pretty: true,
            ..RenderOptions::default()
        };
        let html = HtmlWriter::new(&options).write(&node);
        assert_eq!(html, "<div class=\"popup\">\n  hi\n</div>");
    }

    #[test]
    fn test_pretty_nested_elements() {
        let node: Node = ElementNode::new(ElementKind::Container)
            .child(ElementNode::new(ElementKind::Label).child(Node::text("x")))
            .child(Node::line_break())
            .into();
        let options = RenderOptions {
            pretty: true,
            ..RenderOptions::default()
        };
        let html = HtmlWriter::new(&options).write(&node);
        assert_eq!(html, "<div>\n  <label>\n    x\n  </label>\n  <br>\n</div>");
    }
}
