//! Sprouts - syntax tree diagrams from labelled bracket notation
//!
//! This library provides a bracket parser, an editable tree model with
//! movement (traces and coreference), a layout engine, and an SVG renderer.
//!
//! # Example
//!
//! ```rust
//! use sprouts::render;
//!
//! let svg = render("[S [NP she] [VP [V left]]]");
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod layout;
pub mod parser;
pub mod renderer;
pub mod serializer;
pub mod tree;

pub use error::{ParseDiagnostic, Span, TreeError};
pub use layout::{layout, layout_subtree, ConfigError, FontConfig, TreeConfig, TreeLayout};
pub use parser::{parse, parse_with_diagnostics, ParseOutput};
pub use renderer::{export_slug, render_svg, svg_data_url, SvgConfig};
pub use serializer::serialize;
pub use tree::{Direction, Node, NodeId, NodeSpec, Tree};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur around the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The bracket source could not be read
    #[error("failed to read '{}': {source}", path.display())]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The display settings could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A node id did not name a node of the tree
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Fonts, spacing and display toggles
    pub tree: TreeConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Tree settings sit at the top level, output settings in `[svg]`
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct Output {
            svg: SvgConfig,
        }

        let tree = TreeConfig::from_toml(content)?;
        let output: Output = toml::from_str(content)?;
        Ok(Self {
            tree,
            svg: output.svg,
        })
    }

    /// Set the tree display configuration
    pub fn with_tree(mut self, config: TreeConfig) -> Self {
        self.tree = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Render bracket text to SVG with default configuration
///
/// Malformed input is recovered rather than rejected; use
/// [`parse_with_diagnostics`] to see what was repaired.
pub fn render(source: &str) -> String {
    render_with_config(source, &RenderConfig::default())
}

/// Render bracket text to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use sprouts::{render_with_config, RenderConfig, SvgConfig, TreeConfig};
///
/// let config = RenderConfig::new()
///     .with_tree(TreeConfig::default().with_lazy_triangles(true))
///     .with_svg(SvgConfig::default().with_xml_declaration(false));
///
/// let svg = render_with_config("[S [NP the cat] [VP sat]]", &config);
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("<polygon"));
/// ```
pub fn render_with_config(source: &str, config: &RenderConfig) -> String {
    let output = parse_with_diagnostics(source);
    for diagnostic in &output.diagnostics {
        debug!("parser recovered: {}", diagnostic);
    }
    render_tree(&output.tree, config)
}

/// Render an already-built tree
pub fn render_tree(tree: &Tree, config: &RenderConfig) -> String {
    let result = layout(tree, &config.tree);
    render_svg(&result, &config.tree, &config.svg)
}

/// Render only the constituent rooted at `node`
pub fn render_subtree(tree: &Tree, node: NodeId, config: &RenderConfig) -> Result<String, RenderError> {
    if !tree.is_attached(node) {
        return Err(TreeError::UnknownNode(node).into());
    }
    let result = layout_subtree(tree, node, &config.tree);
    Ok(render_svg(&result, &config.tree, &config.svg))
}

/// Read bracket text from a file and render it
pub fn render_file(path: &Path, config: &RenderConfig) -> Result<String, RenderError> {
    let source = std::fs::read_to_string(path).map_err(|source| RenderError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(render_with_config(&source, config))
}
