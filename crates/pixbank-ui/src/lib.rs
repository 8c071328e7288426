//! Presentational components for pixbank pages.
//!
//! Every component is a stateless function from an injected
//! [`ClassMap`] (and, for containers, caller-supplied children) to a
//! [`pixbank_dom::Node`]. Components never own styling decisions: the
//! build pipeline that generated the class strings hands them in
//! through [`StyleConfig`], and a missing entry degrades to unclassed
//! markup instead of failing.

pub mod footer;
pub mod layout;
pub mod main_content;
pub mod style;

pub use footer::{LOGO_ALT, LOGO_SRC, footer};
pub use layout::layout;
pub use main_content::main_content;
pub use style::{ClassMap, ROOT_CLASS, StyleConfig};
