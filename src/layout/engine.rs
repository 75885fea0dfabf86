//! Recursive tree layout
//!
//! Each node is laid out with its own origin at (0, 0): children first, then
//! the node sizes itself around them and shifts each child into place. The
//! root therefore ends up in absolute coordinates.

use log::trace;

use super::config::TreeConfig;
use super::metrics::{self, BASELINE_RATIO};
use super::movement::route_movements;
use super::types::{
    BoundingBox, Connector, HeadLayout, LabelLayout, NodeLayout, Point, TreeLayout,
};
use crate::serializer::TRIANGLE_MARKER;
use crate::tree::{NodeId, Tree};

/// Head text rendered as the null-element symbol
const NULL_HEAD: &str = "0";
const NULL_SYMBOL: &str = "∅";

/// Lay out the whole tree. Traces hidden by the configuration produce no
/// geometry and no movement connector.
pub fn layout(tree: &Tree, config: &TreeConfig) -> TreeLayout {
    layout_subtree(tree, tree.root(), config)
}

/// Lay out the constituent rooted at `id` as if it were a whole tree.
/// Movement connectors whose other end lies outside the constituent are
/// dropped.
pub fn layout_subtree(tree: &Tree, id: NodeId, config: &TreeConfig) -> TreeLayout {
    let root = layout_node(tree, id, config);
    let movements = route_movements(tree, &root, config);
    let bounds = movements
        .iter()
        .fold(root.bounds, |acc, m| acc.union(&m.bounds()));
    TreeLayout {
        root,
        movements,
        bounds,
    }
}

/// Lay out `id` and its visible descendants with the node's origin at (0, 0)
pub fn layout_node(tree: &Tree, id: NodeId, config: &TreeConfig) -> NodeLayout {
    let node = &tree[id];
    let label_size =
        metrics::measure_label(node.label(), node.coreference_name(), &config.node_font);

    let mut layout = NodeLayout {
        id,
        offset: Point::new(0.0, 0.0),
        bounds: BoundingBox::zero(),
        label: LabelLayout {
            text: node.label().to_string(),
            index: node.coreference_name().to_string(),
            position: Point::new(0.0, label_size.height * BASELINE_RATIO),
        },
        head: None,
        head_connector: None,
        edge: None,
        is_trace: node.is_trace(),
        children: Vec::new(),
    };

    let (width, height) = if !node.is_leaf() {
        layout_children(tree, node.children(), label_size.width, label_size.height, config, &mut layout)
    } else if let Some(head) = node.visible_head() {
        layout_head(node.label(), head, node.is_trace(), label_size.width, label_size.height, config, &mut layout)
    } else {
        (label_size.width, label_size.height)
    };

    layout.bounds = BoundingBox::new(0.0, 0.0, width, height);
    layout.label.position.x = width / 2.0;
    trace!("laid out {} ({}) at {:.1}x{:.1}", id, node.label(), width, height);
    layout
}

fn layout_children(
    tree: &Tree,
    children: &[NodeId],
    label_width: f64,
    label_height: f64,
    config: &TreeConfig,
    layout: &mut NodeLayout,
) -> (f64, f64) {
    let visible: Vec<NodeId> = children
        .iter()
        .copied()
        .filter(|&c| config.show_traces || !tree[c].is_trace())
        .collect();
    let only_child = children.len() == 1;

    let mut running = 0.0;
    let mut height = label_height;
    for (i, &child) in visible.iter().enumerate() {
        let mut child_layout = layout_node(tree, child, config);
        let child_width = child_layout.bounds.width;

        let x = if only_child && child_width < label_width {
            (label_width - child_width) / 2.0
        } else {
            running
        };
        child_layout.translate(x, config.node_spacing_y);
        child_layout.offset = Point::new(x, config.node_spacing_y);
        child_layout.edge = Some(Connector::Line {
            from: Point::new(
                x + child_width / 2.0,
                config.node_spacing_y - config.line_padding,
            ),
            to: Point::new(0.0, label_height + config.line_padding),
        });

        height = f64::max(height, config.node_spacing_y + child_layout.bounds.height);
        running += child_width;
        if i + 1 < visible.len() {
            running += config.node_spacing_x;
        }
        layout.children.push(child_layout);
    }

    let width = f64::max(label_width, running);
    for child in &mut layout.children {
        if let Some(Connector::Line { to, .. }) = &mut child.edge {
            to.x = width / 2.0;
        }
    }
    (width, height)
}

fn layout_head(
    label: &str,
    head: &str,
    is_trace: bool,
    label_width: f64,
    label_height: f64,
    config: &TreeConfig,
    layout: &mut NodeLayout,
) -> (f64, f64) {
    let (text, explicit_triangle) = match head.strip_prefix(TRIANGLE_MARKER) {
        Some(rest) => (rest, true),
        None => (head, false),
    };
    let text = if text == NULL_HEAD { NULL_SYMBOL } else { text };

    let lazy_triangle =
        config.lazy_triangles && label.chars().count() > 1 && label.ends_with('P');
    let triangle = explicit_triangle || lazy_triangle;
    let connected = triangle || config.head_lines;

    let font = if is_trace {
        config.head_font.toggled_italic()
    } else {
        config.head_font.clone()
    };
    let head_size = metrics::measure(text, &font);
    let width = f64::max(label_width, head_size.width);
    let center = width / 2.0;
    let rows = if connected { 2.0 } else { 1.0 };

    layout.head = Some(HeadLayout {
        text: text.to_string(),
        position: Point::new(center, label_height + head_size.height * rows),
        italic: font.italic,
    });

    let connector_bottom = label_height + head_size.height;
    layout.head_connector = if triangle {
        Some(Connector::Triangle {
            apex: Point::new(center, label_height),
            left: Point::new(0.0, connector_bottom),
            right: Point::new(width, connector_bottom),
        })
    } else if connected {
        Some(Connector::Line {
            from: Point::new(center, label_height),
            to: Point::new(center, connector_bottom),
        })
    } else {
        None
    };

    let height = label_height + head_size.height * (rows + 1.0 - BASELINE_RATIO);
    (width, height)
}
