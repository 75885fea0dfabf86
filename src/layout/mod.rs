//! Layout engine for computing node positions and connectors
//!
//! This module takes a [`Tree`](crate::Tree) and a [`TreeConfig`] and
//! produces a [`TreeLayout`]: box sizes, text anchors, connector lines and
//! triangles, and the movement arcs between traces and antecedents.
//! Geometry is recomputed in full on every call.

pub mod config;
pub mod engine;
pub mod metrics;
pub mod movement;
pub mod types;

pub use config::{ConfigError, FontConfig, TreeConfig};
pub use engine::{layout, layout_subtree};
pub use movement::route_movements;
pub use types::*;
