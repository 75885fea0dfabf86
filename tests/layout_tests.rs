//! Integration tests for layout geometry

use sprouts::layout::{Connector, Movement, NodeLayout};
use sprouts::{layout, parse, FontConfig, TreeConfig};

fn check_widths(node: &NodeLayout, config: &TreeConfig) {
    if node.children.is_empty() {
        return;
    }
    let sum: f64 = node.children.iter().map(|c| c.bounds.width).sum();
    assert!(
        node.bounds.width + 1e-9 >= sum,
        "{} narrower than its children",
        node.label.text
    );
    for child in &node.children {
        assert!((child.bounds.y - node.bounds.y - config.node_spacing_y).abs() < 1e-9);
        check_widths(child, config);
    }
}

#[test]
fn test_branch_width_covers_children() {
    let tree = parse(
        "[CP [DP_1 who] [C' [C did] [TP [DP you] [T' [T] [VP [V see] [DP_1 t]]]]]]",
    );
    let config = TreeConfig::default();
    let result = layout(&tree, &config);
    check_widths(&result.root, &config);
}

#[test]
fn test_width_equals_sum_without_spacing() {
    let tree = parse("[VP [V eat] [NP cake] [AdvP quickly]]");
    let config = TreeConfig::default().with_spacing(0.0, 40.0);
    let result = layout(&tree, &config);
    let sum: f64 = result.root.children.iter().map(|c| c.bounds.width).sum();
    assert!((result.root.bounds.width - sum).abs() < 1e-9);
}

#[test]
fn test_layout_is_idempotent() {
    let tree = parse("[TP [DP_1 she] [T' [T] [VP [DP_1 t] [V left]]]]");
    let config = TreeConfig::default().with_lazy_triangles(true);
    assert_eq!(layout(&tree, &config), layout(&tree, &config));
}

#[test]
fn test_relayout_after_edit() {
    let mut tree = parse("[S [NP she] [VP left]]");
    let config = TreeConfig::default();
    let before = layout(&tree, &config);

    let root = tree.root();
    tree.add_child(root, "AdvP").unwrap();
    let after = layout(&tree, &config);
    assert_eq!(after.root.children.len(), 3);
    assert!(after.root.bounds.width > before.root.bounds.width);
}

#[test]
fn test_larger_font_widens_tree() {
    let tree = parse("[S [NP she] [VP left]]");
    let small = layout(&tree, &TreeConfig::default());
    let big = layout(
        &tree,
        &TreeConfig::default().with_head_font(FontConfig::new("Courier New", 28.0, "#000")),
    );
    assert!(big.root.bounds.width > small.root.bounds.width);
    assert!(big.root.bounds.height > small.root.bounds.height);
}

#[test]
fn test_movement_arc_connects_centers() {
    let tree = parse("[TP [DP_1 she] [T' [T] [VP [DP_1 t] [V left]]]]");
    let result = layout(&tree, &TreeConfig::default());
    assert_eq!(result.movements.len(), 1);

    let movement = &result.movements[0];
    let trace = result.find(movement.trace()).unwrap();
    let antecedent = result.find(movement.antecedent()).unwrap();
    match movement {
        Movement::Arc { from, to, .. } => {
            assert_eq!(*from, antecedent.bounds.center());
            assert_eq!(*to, trace.bounds.center());
        }
        other => panic!("expected an arc, got {:?}", other),
    }
    assert!(result.bounds.width >= result.root.bounds.width);
}

#[test]
fn test_arc_between_depths_fits_in_bounds() {
    let tree = parse("[CP [DP_1 who] [C' [C did] [TP [DP you] [VP [V see] [DP_1 t]]]]]");
    let result = layout(&tree, &TreeConfig::default());
    assert_eq!(result.movements.len(), 1);

    let movement = &result.movements[0];
    let Movement::Arc { from, to, .. } = movement else {
        panic!("expected an arc, got {:?}", movement);
    };
    assert!((from.y - to.y).abs() > 1.0);

    // a stretched arc bulges past the box spanned by its endpoints
    let arc = movement.bounds();
    assert!(arc.width > (from.x - to.x).abs() + 1e-6);
    assert!(arc.height > (from.y - to.y).abs() + 1e-6);

    let all = result.bounds;
    assert!(all.x <= arc.x + 1e-9 && all.y <= arc.y + 1e-9);
    assert!(all.right() + 1e-9 >= arc.right() && all.bottom() + 1e-9 >= arc.bottom());
}

#[test]
fn test_every_child_has_an_edge() {
    let tree = parse("[S [NP [D the] [N cat]] [VP [V sat]]]");
    let result = layout(&tree, &TreeConfig::default());
    for node in result.nodes() {
        let expected = node.id != tree.root();
        assert_eq!(node.edge.is_some(), expected);
        if let Some(edge) = &node.edge {
            assert!(matches!(edge, Connector::Line { .. }));
        }
    }
}
