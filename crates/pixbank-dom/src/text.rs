//! Plain-text snapshots of render trees.
//!
//! Used by tests and the text output mode of the demo binary to assert
//! on visible content without caring about markup. Block-level
//! elements end their accumulated text with a newline; `img` elements
//! contribute their `alt` text.

use crate::node::Node;

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "footer", "h1", "h2", "h3", "h4",
    "h5", "h6", "header", "li", "main", "nav", "ol", "p", "section", "table", "tr", "ul",
];

fn is_block(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

/// The visible text of a tree, top to bottom.
pub fn text_content(node: &Node) -> String {
    let mut out = String::new();
    collect(&mut out, node);
    out
}

fn collect(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Fragment(children) => {
            for child in children {
                collect(out, child);
            }
        }
        Node::Element(element) => {
            if element.tag == "img"
                && let Some(alt) = element.attribute("alt")
            {
                out.push_str(alt);
            }
            for child in &element.children {
                collect(out, child);
            }
            if is_block(&element.tag) && !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;

    #[test]
    fn text_nodes_concatenate() {
        let tree = Node::fragment(vec![Node::text("R$ "), Node::text("125,50")]);
        assert_eq!(text_content(&tree), "R$ 125,50");
    }

    #[test]
    fn block_elements_break_lines() {
        let tree: Node = Element::new("main")
            .child(Element::new("p").child(Node::text("Saldo")))
            .child(Element::new("p").child(Node::text("Extrato")))
            .into();

        assert_eq!(text_content(&tree), "Saldo\nExtrato\n");
    }

    #[test]
    fn images_contribute_alt_text() {
        let tree: Node = Element::new("footer")
            .child(Element::new("img").attr("src", "img/logo_pix.png").attr("alt", "Ícone usuário"))
            .into();

        assert_eq!(text_content(&tree), "Ícone usuário\n");
    }

    #[test]
    fn inline_elements_do_not_break_lines() {
        let tree: Node = Element::new("p")
            .child(Node::text("total "))
            .child(Element::new("strong").child(Node::text("R$ 10,00")))
            .into();

        assert_eq!(text_content(&tree), "total R$ 10,00\n");
    }
}
