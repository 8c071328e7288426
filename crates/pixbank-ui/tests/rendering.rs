//! Rendering contract for the presentational components.
//!
//! Pins the output structure the rest of the workspace relies on: the
//! fixed footer logo, identity passthrough of main-content children,
//! graceful degradation when a class map has no root entry, and
//! render determinism.

use pixbank_dom::{Element, Node, html, text_content};
use pixbank_ui::{
    ClassMap, LOGO_ALT, LOGO_SRC, ROOT_CLASS, StyleConfig, footer, layout, main_content,
};

fn footer_styles() -> ClassMap {
    ClassMap::new().with(ROOT_CLASS, "footer")
}

fn content_styles() -> ClassMap {
    ClassMap::new().with(ROOT_CLASS, "main-content")
}

// ============================================================================
// Footer
// ============================================================================

#[test]
fn footer_renders_exactly_one_logo_image() {
    let node = footer(&footer_styles());

    let images = node.find_all("img");
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].attribute("src"), Some(LOGO_SRC));
    assert_eq!(images[0].attribute("alt"), Some(LOGO_ALT));
}

#[test]
fn footer_container_carries_the_mapped_root_class() {
    let node = footer(&ClassMap::new().with(ROOT_CLASS, "footer-3xk"));

    let root = node.as_element().unwrap();
    assert_eq!(root.tag, "footer");
    assert_eq!(root.attribute("class"), Some("footer-3xk"));
    assert_eq!(root.children.len(), 1);
}

#[test]
fn footer_without_root_class_renders_unclassed() {
    let node = footer(&ClassMap::new());

    let root = node.as_element().unwrap();
    assert_eq!(root.attribute("class"), None);
    // Still the same structure underneath.
    assert_eq!(node.find_all("img").len(), 1);
}

#[test]
fn footer_consults_only_the_root_entry() {
    let plain = footer(&ClassMap::new());
    let noisy = footer(&ClassMap::new().with("banner", "big").with("icon", "small"));
    assert_eq!(plain, noisy);
}

#[test]
fn footer_markup_is_fixed() {
    let markup = html::render(&footer(&footer_styles()));
    assert_eq!(
        markup,
        "<footer class=\"footer\"><img src=\"img/logo_pix.png\" alt=\"Ícone usuário\"></footer>"
    );
}

// ============================================================================
// Main content
// ============================================================================

#[test]
fn main_content_nests_children_in_one_grouping_element() {
    let node = main_content(&content_styles(), vec![Node::text("Hello")]);

    let root = node.as_element().unwrap();
    assert_eq!(root.tag, "main");
    assert_eq!(root.attribute("class"), Some("main-content"));
    assert_eq!(root.children.len(), 1);

    let group = root.children[0].as_element().unwrap();
    assert_eq!(group.tag, "div");
    assert_eq!(group.children, vec![Node::text("Hello")]);
}

#[test]
fn main_content_with_no_children_keeps_the_empty_group() {
    let node = main_content(&content_styles(), vec![]);

    let group = node.first("div").unwrap();
    assert!(group.children.is_empty());
    assert_eq!(
        html::render(&node),
        "<main class=\"main-content\"><div></div></main>"
    );
}

#[test]
fn main_content_passes_children_through_unchanged() {
    let children = vec![
        Element::new("h1").child(Node::text("Extrato")).into(),
        Node::text("R$ 125,50"),
        Element::new("ul")
            .child(Element::new("li").child(Node::text("PIX enviado")))
            .into(),
    ];

    let node = main_content(&content_styles(), children.clone());

    let group = node.first("div").unwrap();
    assert_eq!(group.children, children);
}

#[test]
fn main_content_preserves_child_order_in_markup() {
    let node = main_content(
        &content_styles(),
        vec![
            Element::new("p").child(Node::text("first")).into(),
            Element::new("p").child(Node::text("second")).into(),
            Element::new("p").child(Node::text("third")).into(),
        ],
    );

    let markup = html::render(&node);
    let first = markup.find("first").unwrap();
    let second = markup.find("second").unwrap();
    let third = markup.find("third").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn main_content_without_root_class_still_wraps_children() {
    let node = main_content(&ClassMap::new(), vec![Node::text("Saldo")]);

    assert_eq!(node.as_element().unwrap().attribute("class"), None);
    assert_eq!(html::render(&node), "<main><div>Saldo</div></main>");
}

// ============================================================================
// Layout and determinism
// ============================================================================

#[test]
fn layout_orders_content_before_footer() {
    let page = layout(&StyleConfig::default(), vec![Node::text("Extrato")]);
    let markup = html::render(&page);

    assert_eq!(
        markup,
        "<main class=\"main-content\"><div>Extrato</div></main>\
         <footer class=\"footer\"><img src=\"img/logo_pix.png\" alt=\"Ícone usuário\"></footer>"
    );
}

#[test]
fn layout_contains_exactly_one_logo() {
    let page = layout(
        &StyleConfig::default(),
        vec![Element::new("img").attr("src", "img/chart.png").into()],
    );

    let logos: Vec<_> = page
        .find_all("img")
        .into_iter()
        .filter(|img| img.attribute("src") == Some(LOGO_SRC))
        .collect();
    assert_eq!(logos.len(), 1);
}

#[test]
fn rendering_is_deterministic() {
    let build = || {
        layout(
            &StyleConfig::default(),
            vec![Element::new("h1").child(Node::text("Saldo")).into()],
        )
    };

    assert_eq!(build(), build());
    assert_eq!(html::render(&build()), html::render(&build()));
}

#[test]
fn unstyled_layout_keeps_structure_and_content() {
    let page = layout(&StyleConfig::unstyled(), vec![Node::text("Extrato")]);

    assert_eq!(
        html::render(&page),
        "<main><div>Extrato</div></main>\
         <footer><img src=\"img/logo_pix.png\" alt=\"Ícone usuário\"></footer>"
    );
}

#[test]
fn text_snapshot_reads_top_to_bottom() {
    let page = layout(
        &StyleConfig::default(),
        vec![
            Element::new("h1").child(Node::text("Extrato PIX")).into(),
            Element::new("p").child(Node::text("R$ 125,50")).into(),
        ],
    );

    assert_eq!(text_content(&page), "Extrato PIX\nR$ 125,50\nÍcone usuário\n");
}
