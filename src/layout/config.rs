//! Display settings shared by layout and rendering
//!
//! A [`TreeConfig`] is an immutable snapshot: settings changes build a new
//! value and the tree is laid out again with it.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Font settings for one class of text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    /// Size in points
    pub size: f64,
    pub color: String,
    pub bold: bool,
    pub italic: bool,
}

impl FontConfig {
    pub fn new(family: impl Into<String>, size: f64, color: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            size,
            color: color.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Same font with italics switched
    pub fn toggled_italic(&self) -> Self {
        Self {
            italic: !self.italic,
            ..self.clone()
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::new("Open Sans", 18.0, "#2e1a06")
    }
}

/// Settings for laying out and drawing a tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Font for phrase labels
    pub node_font: FontConfig,

    /// Font for lexical heads
    pub head_font: FontConfig,

    /// Horizontal gap between siblings
    pub node_spacing_x: f64,

    /// Vertical distance from a parent's top to its children's top
    pub node_spacing_y: f64,

    /// Gap left between a connector and the text it touches
    pub line_padding: f64,

    pub line_width: f64,

    pub line_color: String,

    /// Draw a vertical line between a label and its head
    pub head_lines: bool,

    /// Draw triangles for every head under a label ending in `P`
    pub lazy_triangles: bool,

    /// Lay out traces; when off, traces and their movement arcs are omitted
    pub show_traces: bool,

    /// Vertical radius of movement arcs
    pub arc_depth: f64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            node_font: FontConfig::default(),
            head_font: FontConfig::new("Courier New", 14.0, "#9b1d00"),
            node_spacing_x: 12.0,
            node_spacing_y: 50.0,
            line_padding: 1.0,
            line_width: 1.0,
            line_color: "#2e1a06".to_string(),
            head_lines: false,
            lazy_triangles: false,
            show_traces: true,
            arc_depth: 30.0,
        }
    }
}

impl TreeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string; missing keys keep defaults
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_node_font(mut self, font: FontConfig) -> Self {
        self.node_font = font;
        self
    }

    pub fn with_head_font(mut self, font: FontConfig) -> Self {
        self.head_font = font;
        self
    }

    /// Set horizontal and vertical node spacing
    pub fn with_spacing(mut self, x: f64, y: f64) -> Self {
        self.node_spacing_x = x;
        self.node_spacing_y = y;
        self
    }

    /// Set connector width, color and padding
    pub fn with_lines(mut self, width: f64, color: impl Into<String>, padding: f64) -> Self {
        self.line_width = width;
        self.line_color = color.into();
        self.line_padding = padding;
        self
    }

    pub fn with_head_lines(mut self, enabled: bool) -> Self {
        self.head_lines = enabled;
        self
    }

    pub fn with_lazy_triangles(mut self, enabled: bool) -> Self {
        self.lazy_triangles = enabled;
        self
    }

    pub fn with_show_traces(mut self, enabled: bool) -> Self {
        self.show_traces = enabled;
        self
    }

    pub fn with_arc_depth(mut self, depth: f64) -> Self {
        self.arc_depth = depth;
        self
    }
}
