//! Arena node and identifier types

use std::fmt;

/// Index of a node inside its [`Tree`](super::Tree) arena.
///
/// Ids stay valid for the lifetime of the tree: removing a subtree detaches
/// it but never frees or reuses its slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One constituent of a syntax tree: a phrase or a lexical item.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) label: String,
    pub(crate) head: Option<String>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) coreference_name: String,
    pub(crate) coreference_link: Option<NodeId>,
    pub(crate) is_trace: bool,
}

impl Node {
    pub(crate) fn new(label: impl Into<String>, head: Option<String>) -> Self {
        Self {
            label: label.into(),
            head,
            children: Vec::new(),
            parent: None,
            coreference_name: String::new(),
            coreference_link: None,
            is_trace: false,
        }
    }

    /// Phrase category, e.g. `VP`
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lexical content, if any
    pub fn head(&self) -> Option<&str> {
        self.head.as_deref()
    }

    /// The head, only when it carries text
    pub fn visible_head(&self) -> Option<&str> {
        self.head.as_deref().filter(|h| !h.is_empty())
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Coreference index shown as a subscript; empty when unindexed
    pub fn coreference_name(&self) -> &str {
        &self.coreference_name
    }

    /// The other member of this node's coreference pair
    pub fn coreference_link(&self) -> Option<NodeId> {
        self.coreference_link
    }

    pub fn is_trace(&self) -> bool {
        self.is_trace
    }

    /// True when the node has no children. Children take precedence over a
    /// head, so a node with both renders as a branch.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Label with its `_name` coreference suffix, as written in bracket text
    pub fn indexed_label(&self) -> String {
        if self.coreference_name.is_empty() {
            self.label.clone()
        } else {
            format!("{}_{}", self.label, self.coreference_name)
        }
    }
}
