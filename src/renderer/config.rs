//! Output settings for SVG documents
//!
//! These only change how the document is written. Fonts, spacing and what
//! gets drawn live in [`TreeConfig`](crate::TreeConfig).

use serde::Deserialize;

/// How a laid-out tree is written as SVG.
///
/// Loaded from the `[svg]` table of a settings file; missing keys keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Blank margin around the tree and its movement arrows
    pub padding: f64,

    /// Start with `<?xml ...?>` so the file stands alone
    pub xml_declaration: bool,

    /// Spaces per nesting level; 0 writes the document on a single line
    pub indent: usize,

    /// Prepended to every class and id (`sprouts__label`, `sprouts__node-3`)
    pub class_prefix: String,

    /// Give each node group an id derived from its [`NodeId`](crate::NodeId)
    pub node_ids: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            padding: 10.0,
            xml_declaration: true,
            indent: 2,
            class_prefix: "sprouts__".to_string(),
            node_ids: true,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Single-line output, e.g. for embedding in HTML or data URLs
    pub fn compact(self) -> Self {
        self.with_indent(0)
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn with_node_ids(mut self, enabled: bool) -> Self {
        self.node_ids = enabled;
        self
    }

    /// Prefixed class or id name
    pub(crate) fn name(&self, base: &str) -> String {
        format!("{}{}", self.class_prefix, base)
    }
}
