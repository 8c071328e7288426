//! The renderable-content model.
//!
//! [`Node`] is the union of everything a page can contain: literal
//! text, elements, and ordered sequences of further nodes. Components
//! build these values; the [`crate::html`] and [`crate::text`] modules
//! consume them.

use serde::{Deserialize, Serialize};

/// A single name/value pair on an element.
///
/// Attributes keep their insertion order all the way through rendering,
/// so equal trees render to identical markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An element node: a tag with ordered attributes and children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// Renderable content.
///
/// `Fragment` groups siblings without introducing an element of its
/// own; rendering flattens it in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Text(String),
    Element(Element),
    Fragment(Vec<Node>),
}

impl Element {
    /// Start building an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute. Later entries with the same name are kept
    /// as-is; renderers emit attributes in insertion order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a `class` attribute.
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append a single child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append children in order.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Value of the first attribute with this name, if any.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}

impl Node {
    /// A text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// A fragment grouping the given siblings.
    pub fn fragment(children: Vec<Node>) -> Self {
        Node::Fragment(children)
    }

    /// Borrow the element inside this node, if it is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// All elements with the given tag, in document order, including
    /// this node itself.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect(self, tag, &mut found);
        found
    }

    /// First element with the given tag, in document order.
    pub fn first(&self, tag: &str) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Fragment(children) => children.iter().find_map(|child| child.first(tag)),
            Node::Element(element) => {
                if element.tag == tag {
                    Some(element)
                } else {
                    element.children.iter().find_map(|child| child.first(tag))
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

fn collect<'tree>(node: &'tree Node, tag: &str, found: &mut Vec<&'tree Element>) {
    match node {
        Node::Text(_) => {}
        Node::Fragment(children) => {
            for child in children {
                collect(child, tag, found);
            }
        }
        Node::Element(element) => {
            if element.tag == tag {
                found.push(element);
            }
            for child in &element.children {
                collect(child, tag, found);
            }
        }
    }
}
