//! Style-class mappings injected into components.
//!
//! The styling pipeline owns the concrete class strings; components
//! only look up symbolic names. Maps are plain data so a deployment
//! can ship alternative themes as JSON without touching component
//! code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Symbolic name of the class carried by a component's outermost
/// element. Every component consults this entry and ignores the rest.
pub const ROOT_CLASS: &str = "root";

/// Lookup table from symbolic class names to concrete class strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassMap {
    classes: BTreeMap<String, String>,
}

impl ClassMap {
    /// An empty map. Components render unclassed markup from it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping, builder-style.
    pub fn with(mut self, name: impl Into<String>, class: impl Into<String>) -> Self {
        self.classes.insert(name.into(), class.into());
        self
    }

    /// Resolve a symbolic name to its class string.
    pub fn class(&self, name: &str) -> Option<&str> {
        self.classes.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// The per-component class maps a page hands to [`crate::layout`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub footer: ClassMap,
    pub main_content: ClassMap,
}

impl Default for StyleConfig {
    /// The stock pixbank classes, mirroring the shipped stylesheet.
    fn default() -> Self {
        Self {
            footer: ClassMap::new().with(ROOT_CLASS, "footer"),
            main_content: ClassMap::new().with(ROOT_CLASS, "main-content"),
        }
    }
}

impl StyleConfig {
    /// A config with no classes at all.
    pub fn unstyled() -> Self {
        Self {
            footer: ClassMap::new(),
            main_content: ClassMap::new(),
        }
    }
}
