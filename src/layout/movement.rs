//! Movement connectors between traces and their antecedents

use std::collections::HashMap;

use log::trace;

use super::config::TreeConfig;
use super::types::*;
use crate::tree::{NodeId, Tree};

/// Gap between a moved phrase and the loop drawn around it
const LOOP_PADDING: f64 = 6.0;

/// Route one connector per visible (trace, antecedent) pair.
///
/// Pairs where either side is not part of the laid-out tree are skipped.
/// Output follows the pre-order of the traces, so repeated layouts of the
/// same tree produce the same list.
pub fn route_movements(tree: &Tree, root: &NodeLayout, config: &TreeConfig) -> Vec<Movement> {
    let placed: HashMap<NodeId, &NodeLayout> = root.iter().map(|n| (n.id, n)).collect();

    root.iter()
        .filter(|n| n.is_trace)
        .filter_map(|trace_layout| {
            let antecedent = tree[trace_layout.id].coreference_link()?;
            let antecedent_layout = placed.get(&antecedent)?;
            let movement = if tree[antecedent].is_leaf() {
                arc_between(trace_layout, antecedent_layout, config)
            } else {
                loop_around(trace_layout.id, antecedent_layout)
            };
            trace!("movement {} -> {}", antecedent, trace_layout.id);
            Some(movement)
        })
        .collect()
}

/// Elliptical arc from the antecedent's center to the trace's center.
///
/// The horizontal radius spans half the distance between the points; the
/// sweep flips with direction so the curve always bows below both.
fn arc_between(trace: &NodeLayout, antecedent: &NodeLayout, config: &TreeConfig) -> Movement {
    let from = antecedent.bounds.center();
    let to = trace.bounds.center();
    Movement::Arc {
        trace: trace.id,
        antecedent: antecedent.id,
        from,
        to,
        rx: (to.x - from.x).abs() / 2.0,
        ry: config.arc_depth,
        sweep: from.x > to.x,
    }
}

fn loop_around(trace: NodeId, antecedent: &NodeLayout) -> Movement {
    Movement::Loop {
        trace,
        antecedent: antecedent.id,
        center: antecedent.bounds.center(),
        rx: antecedent.bounds.width / 2.0 + LOOP_PADDING,
        ry: antecedent.bounds.height / 2.0 + LOOP_PADDING,
    }
}
