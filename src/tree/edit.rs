//! Structural mutators: adding, wrapping, removing and moving nodes
//!
//! Every mutator validates its arguments before touching the arena, so a
//! failed call leaves the tree exactly as it was.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::{Node, NodeId, Tree};
use crate::error::TreeError;
use crate::parser::split_label;

/// Head text given to the trace left behind by a move
pub const TRACE_HEAD: &str = "t";

/// Options for [`Tree::add_child_with`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeSpec {
    pub label: String,
    pub head: Option<String>,
    /// Insertion index among the parent's children; `None` appends
    pub position: Option<usize>,
}

impl NodeSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the lexical head
    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.head = Some(head.into());
        self
    }

    /// Set the insertion index
    pub fn position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl From<&str> for NodeSpec {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Reject labels that would not read back as the same label: empty ones,
/// ones containing whitespace or brackets, and ones whose last `_` would be
/// taken for a coreference index.
fn check_label(label: &str) -> Result<(), TreeError> {
    let unwritable = label.is_empty()
        || label.chars().any(|c| c.is_whitespace() || c == '[' || c == ']')
        || !split_label(label).1.is_empty();
    if unwritable {
        return Err(TreeError::InvalidLabel(label.to_string()));
    }
    Ok(())
}

/// Heads are single-spaced words without brackets
fn check_head(head: &str) -> Result<(), TreeError> {
    let normalized = head.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized != head || head.contains(['[', ']']) {
        return Err(TreeError::InvalidHead(head.to_string()));
    }
    Ok(())
}

impl Tree {
    /// Append a childless, headless node labelled `label` under `parent`
    pub fn add_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
    ) -> Result<NodeId, TreeError> {
        self.add_child_with(parent, NodeSpec::new(label))
    }

    /// Insert a new node under `parent` as described by `new_node`
    pub fn add_child_with(&mut self, parent: NodeId, new_node: NodeSpec) -> Result<NodeId, TreeError> {
        check_label(&new_node.label)?;
        if let Some(head) = &new_node.head {
            check_head(head)?;
        }
        let len = self.node(parent)?.children.len();
        let position = new_node.position.unwrap_or(len);
        if position > len {
            return Err(TreeError::OutOfRange { position, len });
        }
        Ok(self.attach(parent, position, Node::new(new_node.label, new_node.head)))
    }

    /// Append a node without checking its label; the parser uses this to
    /// keep whatever it recovered.
    pub(crate) fn push_child(&mut self, parent: NodeId, label: &str) -> Result<NodeId, TreeError> {
        let position = self.node(parent)?.children.len();
        Ok(self.attach(parent, position, Node::new(label, None)))
    }

    fn attach(&mut self, parent: NodeId, position: usize, mut child: Node) -> NodeId {
        child.parent = Some(parent);
        let id = self.alloc(child);
        self.nodes[parent.0].children.insert(position, id);
        id
    }

    /// Wrap `node` in a new parent that takes its place among its siblings.
    ///
    /// Wrapping the root makes the new node the root of the tree.
    pub fn add_parent(
        &mut self,
        node: NodeId,
        label: impl Into<String>,
        head: Option<String>,
    ) -> Result<NodeId, TreeError> {
        let label = label.into();
        check_label(&label)?;
        if let Some(head) = &head {
            check_head(head)?;
        }
        let grandparent = self.node(node)?.parent;
        let site = self.index_in_parent(node);

        let mut wrapper = Node::new(label, head);
        wrapper.parent = grandparent;
        wrapper.children.push(node);
        let id = self.alloc(wrapper);
        self.nodes[node.0].parent = Some(id);

        match (grandparent, site) {
            (Some(gp), Some(index)) => self.nodes[gp.0].children[index] = id,
            _ if node == self.root => self.set_root(id),
            _ => {}
        }
        Ok(id)
    }

    /// Detach the child at `position` and return its id.
    ///
    /// Coreference links that cross the cut are dropped on both sides.
    pub fn remove_child(&mut self, parent: NodeId, position: usize) -> Result<NodeId, TreeError> {
        let len = self.node(parent)?.children.len();
        if position >= len {
            return Err(TreeError::OutOfRange { position, len });
        }

        let child = self.nodes[parent.0].children.remove(position);
        self.nodes[child.0].parent = None;
        self.sever_links(child);
        Ok(child)
    }

    /// Detach `node` from its own parent
    pub fn remove(&mut self, node: NodeId) -> Result<NodeId, TreeError> {
        let parent = self.node(node)?.parent.ok_or(TreeError::NoParent(node))?;
        let position = self
            .index_in_parent(node)
            .ok_or(TreeError::UnknownNode(node))?;
        self.remove_child(parent, position)
    }

    pub fn set_label(&mut self, node: NodeId, label: impl Into<String>) -> Result<(), TreeError> {
        let label = label.into();
        check_label(&label)?;
        self.node_mut(node)?.label = label;
        Ok(())
    }

    /// Set the lexical head; an empty head clears it
    pub fn set_head(&mut self, node: NodeId, head: impl Into<String>) -> Result<(), TreeError> {
        let head = head.into();
        check_head(&head)?;
        self.node_mut(node)?.head = Some(head);
        Ok(())
    }

    /// Move `mover` under `target` at `position` (default 0), leaving a trace.
    ///
    /// The mover keeps its coreference index, or receives the lowest unused
    /// numeric one. The trace takes the mover's old place among its siblings
    /// and is linked with the mover. On a repeated move the previous trace is
    /// pointed at the new trace, so the chain stays pairwise. When `target`
    /// carries a head, a copy of that head is first adjoined as a new last
    /// child of `target`.
    ///
    /// Returns the id of the new trace.
    pub fn move_to(
        &mut self,
        mover: NodeId,
        target: NodeId,
        position: Option<usize>,
    ) -> Result<NodeId, TreeError> {
        let parent = self.node(mover)?.parent.ok_or(TreeError::NoParent(mover))?;
        let target_node = self.node(target)?;
        if let Some(stray) = [mover, target].into_iter().find(|&n| !self.is_attached(n)) {
            return Err(TreeError::Detached(stray));
        }
        if self.contains(mover, target) {
            return Err(TreeError::CyclicMove { mover, target });
        }

        let adjoined_head = target_node.visible_head().map(str::to_string);
        let len = target_node.children.len() + usize::from(adjoined_head.is_some());
        let position = position.unwrap_or(0);
        if position > len {
            return Err(TreeError::OutOfRange { position, len });
        }
        let site = self
            .index_in_parent(mover)
            .ok_or(TreeError::UnknownNode(mover))?;

        if self.nodes[mover.0].coreference_name.is_empty() {
            self.nodes[mover.0].coreference_name = self.next_coreference_name();
        }
        let name = self.nodes[mover.0].coreference_name.clone();
        let previous = self.nodes[mover.0].coreference_link;

        let mut trace = Node::new(self.nodes[mover.0].label.clone(), Some(TRACE_HEAD.to_string()));
        trace.parent = Some(parent);
        trace.is_trace = true;
        trace.coreference_name = name.clone();
        trace.coreference_link = Some(mover);
        let trace_id = self.alloc(trace);
        self.nodes[parent.0].children[site] = trace_id;

        if let Some(old) = previous {
            self.nodes[old.0].coreference_link = Some(trace_id);
        }
        self.nodes[mover.0].coreference_link = Some(trace_id);

        if let Some(head) = adjoined_head {
            let mut adjunct = Node::new(self.nodes[target.0].label.clone(), Some(head));
            adjunct.parent = Some(target);
            let adjunct_id = self.alloc(adjunct);
            self.nodes[target.0].children.push(adjunct_id);
        }

        self.nodes[target.0].children.insert(position, mover);
        self.nodes[mover.0].parent = Some(target);

        debug!(
            "moved {} under {} at {}, trace {} indexed _{}",
            mover, target, position, trace_id, name
        );
        Ok(trace_id)
    }

    /// Replace the subtree at `node` with a tree parsed from `source`.
    ///
    /// Replacing the root swaps the whole tree; a detached node other than
    /// the root is rejected. Returns the id of the new subtree root.
    pub fn replace_with_parsed(&mut self, node: NodeId, source: &str) -> Result<NodeId, TreeError> {
        let parent = self.node(node)?.parent;
        let parsed = crate::parser::parse(source);

        match parent {
            Some(parent) => {
                let position = self
                    .index_in_parent(node)
                    .ok_or(TreeError::UnknownNode(node))?;
                self.remove_child(parent, position)?;
                let id = self.import(&parsed);
                self.nodes[id.0].parent = Some(parent);
                self.nodes[parent.0].children.insert(position, id);
                Ok(id)
            }
            None if node == self.root => {
                let id = self.import(&parsed);
                self.set_root(id);
                Ok(id)
            }
            None => Err(TreeError::NoParent(node)),
        }
    }

    /// Copy the reachable part of `other` into this arena, remapping ids.
    fn import(&mut self, other: &Tree) -> NodeId {
        let order = other.descendants(other.root());
        let base = self.nodes.len();
        let map: HashMap<NodeId, NodeId> = order
            .iter()
            .enumerate()
            .map(|(i, &old)| (old, NodeId(base + i)))
            .collect();

        for &old in &order {
            let mut node = other[old].clone();
            node.children = node.children.iter().map(|c| map[c]).collect();
            node.parent = node.parent.and_then(|p| map.get(&p).copied());
            node.coreference_link = node.coreference_link.and_then(|l| map.get(&l).copied());
            self.nodes.push(node);
        }
        map[&other.root()]
    }

    /// Drop coreference links between the detached subtree at `cut` and the
    /// rest of the tree. On either side, a node left with no partner loses
    /// its index.
    fn sever_links(&mut self, cut: NodeId) {
        let inside = self.descendants(cut);
        let inside_set: HashSet<NodeId> = inside.iter().copied().collect();
        let attached = self.descendants(self.root);

        self.unlink_across(&inside, |l| !inside_set.contains(&l));
        self.unlink_across(&attached, |l| inside_set.contains(&l));
    }

    /// Clear links from `side` that satisfy `crosses`, then clear the names of
    /// nodes on `side` that nothing there still links to.
    fn unlink_across(&mut self, side: &[NodeId], crosses: impl Fn(NodeId) -> bool) {
        let orphaned: Vec<NodeId> = side
            .iter()
            .copied()
            .filter(|id| self.nodes[id.0].coreference_link.is_some_and(&crosses))
            .collect();
        for &id in &orphaned {
            self.nodes[id.0].coreference_link = None;
        }
        for &id in &orphaned {
            let still_referenced = side
                .iter()
                .any(|m| self.nodes[m.0].coreference_link == Some(id));
            if !still_referenced {
                debug!("{} lost its coreference partner", id);
                self.nodes[id.0].coreference_name.clear();
            }
        }
    }

    /// Lowest positive integer not yet used as an index in the tree
    fn next_coreference_name(&self) -> String {
        let used: HashSet<&str> = self
            .descendants(self.root)
            .into_iter()
            .map(|id| self.nodes[id.0].coreference_name.as_str())
            .collect();
        (1..)
            .map(|n: u32| n.to_string())
            .find(|candidate| !used.contains(candidate.as_str()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(tree: &Tree, id: NodeId) -> Vec<String> {
        tree.children(id)
            .iter()
            .map(|&c| tree.label(c).to_string())
            .collect()
    }

    #[test]
    fn test_add_child_appends_by_default() {
        let mut tree = Tree::new("VP");
        let root = tree.root();
        tree.add_child(root, "V").unwrap();
        tree.add_child(root, "NP").unwrap();
        assert_eq!(labels(&tree, root), vec!["V", "NP"]);
    }

    #[test]
    fn test_add_child_at_position() {
        let mut tree = Tree::new("VP");
        let root = tree.root();
        tree.add_child(root, "V").unwrap();
        tree.add_child(root, "NP").unwrap();
        tree.add_child_with(root, NodeSpec::new("AdvP").position(1))
            .unwrap();
        tree.add_child_with(root, NodeSpec::new("PP").position(3))
            .unwrap();
        assert_eq!(labels(&tree, root), vec!["V", "AdvP", "NP", "PP"]);
    }

    #[test]
    fn test_add_child_out_of_range() {
        let mut tree = Tree::new("VP");
        let root = tree.root();
        let err = tree
            .add_child_with(root, NodeSpec::new("V").position(1))
            .unwrap_err();
        assert_eq!(err, TreeError::OutOfRange { position: 1, len: 0 });
        assert_eq!(tree.arena_len(), 1);
    }

    #[test]
    fn test_add_parent_splices_into_grandparent() {
        let mut tree = Tree::new("VP");
        let root = tree.root();
        let v = tree.add_child(root, "V").unwrap();
        let np = tree.add_child(root, "NP").unwrap();
        let vbar = tree.add_parent(np, "V'", None).unwrap();
        assert_eq!(tree.children(root), &[v, vbar]);
        assert_eq!(tree.children(vbar), &[np]);
        assert_eq!(tree.parent(np), Some(vbar));
        assert_eq!(tree.parent(vbar), Some(root));
    }

    #[test]
    fn test_add_parent_on_root_replaces_root() {
        let mut tree = Tree::new("VP");
        let old_root = tree.root();
        let tp = tree.add_parent(old_root, "TP", None).unwrap();
        assert_eq!(tree.root(), tp);
        assert_eq!(tree.parent(old_root), Some(tp));
        assert_eq!(tree.parent(tp), None);
    }

    #[test]
    fn test_remove_child_out_of_range() {
        let mut tree = Tree::new("VP");
        let root = tree.root();
        tree.add_child(root, "V").unwrap();
        let err = tree.remove_child(root, 1).unwrap_err();
        assert_eq!(err, TreeError::OutOfRange { position: 1, len: 1 });
        assert_eq!(tree.children(root).len(), 1);
    }

    #[test]
    fn test_remove_root_is_rejected() {
        let mut tree = Tree::new("VP");
        let root = tree.root();
        assert_eq!(tree.remove(root), Err(TreeError::NoParent(root)));
    }

    #[test]
    fn test_move_leaves_linked_trace() {
        let mut tree = Tree::new("CP");
        let cp = tree.root();
        let c = tree.add_child(cp, "C'").unwrap();
        let vp = tree.add_child(c, "VP").unwrap();
        let dp = tree
            .add_child_with(vp, NodeSpec::new("DP").head("what"))
            .unwrap();

        let trace = tree.move_to(dp, cp, None).unwrap();

        assert_eq!(tree.children(cp), &[dp, c]);
        assert_eq!(tree.children(vp), &[trace]);
        assert!(tree[trace].is_trace());
        assert_eq!(tree.head(trace), Some(TRACE_HEAD));
        assert_eq!(tree.label(trace), "DP");
        assert_eq!(tree[dp].coreference_name(), "1");
        assert_eq!(tree[trace].coreference_name(), "1");
        assert_eq!(tree[dp].coreference_link(), Some(trace));
        assert_eq!(tree[trace].coreference_link(), Some(dp));
    }

    #[test]
    fn test_move_keeps_existing_index() {
        let mut tree = crate::parser::parse("[CP [C'] [VP [DP_4 who] [V left]]]");
        let cp = tree.root();
        let vp = tree.children(cp)[1];
        let dp = tree.children(vp)[0];
        let trace = tree.move_to(dp, cp, Some(0)).unwrap();
        assert_eq!(tree[dp].coreference_name(), "4");
        assert_eq!(tree[trace].coreference_name(), "4");
    }

    #[test]
    fn test_second_move_redirects_old_trace() {
        let mut tree = Tree::new("CP");
        let cp = tree.root();
        let tp = tree.add_child(cp, "TP").unwrap();
        let vp = tree.add_child(tp, "VP").unwrap();
        let dp = tree
            .add_child_with(vp, NodeSpec::new("DP").head("she"))
            .unwrap();

        let first = tree.move_to(dp, tp, None).unwrap();
        let second = tree.move_to(dp, cp, None).unwrap();

        assert_eq!(tree[dp].coreference_link(), Some(second));
        assert_eq!(tree[second].coreference_link(), Some(dp));
        assert_eq!(tree[first].coreference_link(), Some(second));
        assert_eq!(tree.parent(second), Some(tp));
        assert_eq!(tree.parent(first), Some(vp));
    }

    #[test]
    fn test_move_adjoins_to_head() {
        let mut tree = Tree::new("TP");
        let tp = tree.root();
        let t = tree
            .add_child_with(tp, NodeSpec::new("T").head("-ed"))
            .unwrap();
        let vp = tree.add_child(tp, "VP").unwrap();
        let v = tree
            .add_child_with(vp, NodeSpec::new("V").head("walk"))
            .unwrap();

        tree.move_to(v, t, None).unwrap();

        let children = tree.children(t).to_vec();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], v);
        assert_eq!(tree.label(children[1]), "T");
        assert_eq!(tree.head(children[1]), Some("-ed"));
    }

    #[test]
    fn test_move_into_own_subtree_fails() {
        let mut tree = Tree::new("VP");
        let root = tree.root();
        let np = tree.add_child(root, "NP").unwrap();
        let n = tree.add_child(np, "N").unwrap();
        let before = tree.clone();

        assert_eq!(
            tree.move_to(np, n, None),
            Err(TreeError::CyclicMove { mover: np, target: n })
        );
        assert_eq!(
            tree.move_to(np, np, None),
            Err(TreeError::CyclicMove { mover: np, target: np })
        );
        assert!(tree.structurally_eq(&before));
        assert_eq!(tree.arena_len(), before.arena_len());
    }

    #[test]
    fn test_move_position_checked_before_mutation() {
        let mut tree = Tree::new("VP");
        let root = tree.root();
        let a = tree.add_child(root, "A").unwrap();
        let b = tree.add_child(root, "B").unwrap();
        let err = tree.move_to(a, b, Some(1)).unwrap_err();
        assert_eq!(err, TreeError::OutOfRange { position: 1, len: 0 });
        assert_eq!(tree[a].coreference_name(), "");
        assert_eq!(tree.children(root), &[a, b]);
    }

    #[test]
    fn test_move_root_fails() {
        let mut tree = Tree::new("VP");
        let root = tree.root();
        let v = tree.add_child(root, "V").unwrap();
        assert_eq!(tree.move_to(root, v, None), Err(TreeError::NoParent(root)));

        let mut lone = Tree::new("S");
        let s = lone.root();
        let detached = lone.add_child(s, "A").unwrap();
        lone.remove(detached).unwrap();
        assert_eq!(lone.move_to(detached, s, None), Err(TreeError::NoParent(detached)));
    }

    #[test]
    fn test_removing_antecedent_unlinks_trace() {
        let mut tree = Tree::new("CP");
        let cp = tree.root();
        let vp = tree.add_child(cp, "VP").unwrap();
        let dp = tree
            .add_child_with(vp, NodeSpec::new("DP").head("what"))
            .unwrap();
        let trace = tree.move_to(dp, cp, None).unwrap();

        tree.remove(dp).unwrap();

        assert_eq!(tree[trace].coreference_link(), None);
        assert_eq!(tree[trace].coreference_name(), "");
        assert_eq!(tree[dp].coreference_link(), None);
        assert_eq!(tree[dp].coreference_name(), "");
    }

    #[test]
    fn test_removing_one_link_of_chain_keeps_inner_names() {
        let mut tree = crate::parser::parse("[CP [C'] [TP [T'] [VP [DP who] [V left]]]]");
        let cp = tree.root();
        let tp = tree.children(cp)[1];
        let vp = tree.children(tp)[1];
        let dp = tree.children(vp)[0];
        let first = tree.move_to(dp, tp, Some(0)).unwrap();
        let second = tree.move_to(dp, cp, Some(0)).unwrap();

        // Both traces leave with TP; the older one still points at the newer
        tree.remove(tp).unwrap();

        assert_eq!(tree[dp].coreference_link(), None);
        assert_eq!(tree[dp].coreference_name(), "");
        assert_eq!(tree[second].coreference_link(), None);
        assert_eq!(tree[second].coreference_name(), "1");
        assert_eq!(tree[first].coreference_link(), Some(second));
        assert_eq!(tree[first].coreference_name(), "1");
    }

    #[test]
    fn test_move_involving_detached_nodes_fails() {
        let mut tree = crate::parser::parse("[S [NP she] [VP [V left]] [XP [X x]]]");
        let s = tree.root();
        let np = tree.children(s)[0];
        let vp = tree.children(s)[1];
        let xp = tree.remove_child(s, 2).unwrap();
        let x = tree.children(xp)[0];
        let before = tree.clone();

        assert_eq!(tree.move_to(np, xp, None), Err(TreeError::Detached(xp)));
        assert_eq!(tree.move_to(x, vp, None), Err(TreeError::Detached(x)));
        assert!(tree.structurally_eq(&before));
        assert_eq!(tree.arena_len(), before.arena_len());
        assert!(tree.is_attached(np));
        assert_eq!(tree[np].coreference_name(), "");
    }

    #[test]
    fn test_unwritable_labels_are_rejected() {
        let mut tree = Tree::new("S");
        let root = tree.root();
        for label in ["wh_DP", "A B", "", "X[", "N]"] {
            assert_eq!(
                tree.add_child(root, label),
                Err(TreeError::InvalidLabel(label.to_string()))
            );
        }
        assert_eq!(
            tree.add_parent(root, "C P", None),
            Err(TreeError::InvalidLabel("C P".to_string()))
        );
        assert_eq!(
            tree.set_label(root, "S_x"),
            Err(TreeError::InvalidLabel("S_x".to_string()))
        );
        assert_eq!(tree.arena_len(), 1);
        assert_eq!(tree.label(root), "S");

        // A trailing underscore is not an index
        tree.set_label(root, "S_").unwrap();
    }

    #[test]
    fn test_unwritable_heads_are_rejected() {
        let mut tree = Tree::new("S");
        let root = tree.root();
        for head in ["a]", " padded", "two  spaces", "line\nbreak"] {
            assert_eq!(
                tree.add_child_with(root, NodeSpec::new("N").head(head)),
                Err(TreeError::InvalidHead(head.to_string()))
            );
            assert_eq!(
                tree.set_head(root, head),
                Err(TreeError::InvalidHead(head.to_string()))
            );
        }
        tree.set_head(root, "the old man").unwrap();
        tree.set_head(root, "").unwrap();
        assert_eq!(tree.head(root), Some(""));
    }

    #[test]
    fn test_accepted_labels_round_trip() {
        let mut tree = Tree::new("S");
        let root = tree.root();
        for label in ["T'", "N-bar", "S_", "v*", "0"] {
            tree.add_child_with(root, NodeSpec::new(label).head("x")).unwrap();
        }
        let reparsed = crate::parser::parse(&tree.to_bracket_string());
        assert!(reparsed.structurally_eq(&tree), "{}", tree.to_bracket_string());
    }

    #[test]
    fn test_auto_index_skips_used_names() {
        let mut tree = crate::parser::parse("[S [A_1 x] [B y] [A_1 t]]");
        let s = tree.root();
        let b = tree.children(s)[1];
        let trace = tree.move_to(b, s, None).unwrap();
        assert_eq!(tree[trace].coreference_name(), "2");
    }

    #[test]
    fn test_replace_with_parsed_subtree() {
        let mut tree = crate::parser::parse("[VP [V eat] [NP cake]]");
        let root = tree.root();
        let np = tree.children(root)[1];
        let new = tree.replace_with_parsed(np, "[NP [D the] [N pie]]").unwrap();
        assert_eq!(tree.children(root)[1], new);
        assert_eq!(tree.parent(new), Some(root));
        assert_eq!(tree.to_bracket_string(), "[VP [V eat] [NP [D the] [N pie]]]");
    }

    #[test]
    fn test_replace_detached_node_fails() {
        let mut tree = crate::parser::parse("[S [NP she] [VP left]]");
        let root = tree.root();
        let np = tree.remove_child(root, 0).unwrap();
        assert_eq!(
            tree.replace_with_parsed(np, "[XP boom]"),
            Err(TreeError::NoParent(np))
        );
        assert_eq!(tree.root(), root);
        assert_eq!(tree.to_bracket_string(), "[S [VP left]]");
    }

    #[test]
    fn test_replace_with_parsed_root() {
        let mut tree = crate::parser::parse("[VP [V eat]]");
        let root = tree.root();
        let new = tree.replace_with_parsed(root, "[TP [T will]]").unwrap();
        assert_eq!(tree.root(), new);
        assert_eq!(tree.to_bracket_string(), "[TP [T will]]");
    }
}
