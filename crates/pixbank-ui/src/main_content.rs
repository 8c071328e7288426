//! The styled wrapper around page content.

use pixbank_dom::{Element, Node};
use tracing::debug;

use crate::style::{ClassMap, ROOT_CLASS};

/// Render the main-content container around caller-supplied children.
///
/// Children pass through untouched and in order, nested inside a
/// single grouping `div`; an empty list yields an empty group. The
/// component adds no content of its own.
pub fn main_content(styles: &ClassMap, children: Vec<Node>) -> Node {
    let mut root = Element::new("main");
    match styles.class(ROOT_CLASS) {
        Some(class) => root = root.class(class),
        None => debug!(component = "main_content", "no root class mapped, rendering unclassed"),
    }

    root.child(Element::new("div").children(children)).into()
}
