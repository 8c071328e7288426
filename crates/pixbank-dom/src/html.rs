//! Deterministic HTML rendering of [`Node`] trees.
//!
//! Rendering is a pure fold over the tree: the same tree always yields
//! the same markup. Attributes appear in insertion order, text and
//! attribute values are escaped, and void tags such as `img` are
//! emitted without a closing tag.

use crate::escape::{escape_attribute, escape_text};
use crate::node::{Element, Node};

/// Tags emitted without a closing tag. Children of these elements are
/// ignored by the renderer.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Whether a tag renders as a void element.
pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Render a node to an HTML string.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Render a node as the body of a minimal standalone HTML document.
pub fn render_document(title: &str, body: &Node) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    out.push_str("<html><head><meta charset=\"utf-8\"><title>");
    out.push_str(&escape_text(title));
    out.push_str("</title></head><body>");
    write_node(&mut out, body);
    out.push_str("</body></html>\n");
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Fragment(children) => {
            for child in children {
                write_node(out, child);
            }
        }
        Node::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag);
    for attr in &element.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(&attr.value));
        out.push('"');
    }
    out.push('>');

    if is_void(&element.tag) {
        return;
    }

    for child in &element.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}
