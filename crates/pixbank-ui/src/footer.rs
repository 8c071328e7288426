//! The shared page footer.

use pixbank_dom::{Element, Node};
use tracing::debug;

use crate::style::{ClassMap, ROOT_CLASS};

/// Logo asset path, served by the static asset pipeline.
pub const LOGO_SRC: &str = "img/logo_pix.png";

/// Accessible description of the logo image.
pub const LOGO_ALT: &str = "Ícone usuário";

/// Render the footer: one container holding the PIX logo.
///
/// The structure is the same on every call; `styles` only decides the
/// container's class. A map without a [`ROOT_CLASS`] entry yields an
/// unclassed container.
pub fn footer(styles: &ClassMap) -> Node {
    let mut root = Element::new("footer");
    match styles.class(ROOT_CLASS) {
        Some(class) => root = root.class(class),
        None => debug!(component = "footer", "no root class mapped, rendering unclassed"),
    }

    root.child(Element::new("img").attr("src", LOGO_SRC).attr("alt", LOGO_ALT))
        .into()
}
