//! Page layout composing the shared chrome.

use pixbank_dom::Node;

use crate::footer::footer;
use crate::main_content::main_content;
use crate::style::StyleConfig;

/// Wrap page content in the main-content container and append the
/// footer below it.
pub fn layout(styles: &StyleConfig, children: Vec<Node>) -> Node {
    Node::fragment(vec![
        main_content(&styles.main_content, children),
        footer(&styles.footer),
    ])
}
