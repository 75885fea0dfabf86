//! Syntax tree model
//!
//! Nodes live in a flat arena owned by [`Tree`] and refer to each other by
//! [`NodeId`]. Parent back-references and coreference links are plain ids, so
//! the cycles they form never touch ownership.

mod edit;
mod navigate;
mod node;

pub use edit::{NodeSpec, TRACE_HEAD};
pub use navigate::Direction;
pub use node::{Node, NodeId};

use std::ops::Index;

use crate::error::TreeError;

/// A syntax tree: node arena plus the id of the current root.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Create a tree holding a single childless root
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(label, None)],
            root: NodeId(0),
        }
    }

    /// Create a tree whose root is a leaf with lexical content
    pub fn with_head(label: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(label, Some(head.into()))],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    /// Look up a node by id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id.0).ok_or(TreeError::UnknownNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.nodes.get_mut(id.0).ok_or(TreeError::UnknownNode(id))
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Number of nodes reachable from the root
    pub fn len(&self) -> usize {
        self.descendants(self.root).len()
    }

    /// A tree always has at least its root
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Size of the arena, detached nodes included
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    pub fn label(&self, id: NodeId) -> &str {
        self[id].label()
    }

    pub fn head(&self, id: NodeId) -> Option<&str> {
        self[id].head()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self[id].children()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent()
    }

    /// Position of the node among its parent's children
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.get(id)?.parent?;
        self[parent].children.iter().position(|&c| c == id)
    }

    /// Number of edges between the node and the top of its tree
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Strict ancestors, nearest first
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.get(id).and_then(|n| n.parent), move |&p| {
            self.get(p).and_then(|n| n.parent)
        })
    }

    /// `node` and everything below it, in pre-order
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let Some(n) = self.get(id) else { continue };
            out.push(id);
            stack.extend(n.children.iter().rev());
        }
        out
    }

    /// True when `node` is `ancestor` or lies below it
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|a| a == ancestor)
    }

    /// True when the node is reachable from the current root
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.get(id).is_some() && self.contains(self.root, id)
    }

    /// Structural equality from the roots down: labels, heads, child order,
    /// trace flags, coreference names and the shape of coreference pairing.
    ///
    /// Arena ids may differ between the two trees.
    pub fn structurally_eq(&self, other: &Tree) -> bool {
        let ours = self.descendants(self.root);
        let theirs = other.descendants(other.root);
        if ours.len() != theirs.len() {
            return false;
        }
        let position = |order: &[NodeId], id: Option<NodeId>| {
            id.and_then(|id| order.iter().position(|&n| n == id))
        };
        ours.iter().zip(&theirs).all(|(&a, &b)| {
            let (na, nb) = (&self[a], &other[b]);
            na.label == nb.label
                && na.head.as_deref().unwrap_or("") == nb.head.as_deref().unwrap_or("")
                && na.children.len() == nb.children.len()
                && na.is_trace == nb.is_trace
                && na.coreference_name == nb.coreference_name
                && position(&ours, na.coreference_link) == position(&theirs, nb.coreference_link)
        })
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
