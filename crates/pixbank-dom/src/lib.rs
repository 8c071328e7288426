//! Framework-independent render tree for pixbank.
//!
//! Presentational components in this workspace are plain functions that
//! return [`Node`] values. Nothing here knows about a UI framework's
//! dispatch or lifecycle: a `Node` is just data, so it can be compared
//! in tests, serialized, rendered to HTML with [`html::render`], or
//! reduced to its visible text with [`text::text_content`].

pub mod html;
pub mod node;
pub mod text;

mod escape;

pub use escape::{escape_attribute, escape_text};
pub use html::{render, render_document};
pub use node::{Attribute, Element, Node};
pub use text::text_content;
