//! SVG renderer for tree layouts
//!
//! This module takes a [`TreeLayout`](crate::layout::TreeLayout) and produces
//! an SVG string whose styling comes from CSS classes generated off the
//! [`TreeConfig`](crate::layout::TreeConfig) fonts and line settings.

pub mod config;
pub mod export;
pub mod svg;

pub use config::SvgConfig;
pub use export::{export_slug, svg_data_url};
pub use svg::render_svg;
