//! Tree to bracket text
//!
//! The canonical form is `[Label_index child child]` or `[Label head]`,
//! which [`parse`](crate::parse) reads back into an equivalent tree.

use crate::tree::{NodeId, Tree};

/// Marker at the start of a head that requests a triangle connector
pub const TRIANGLE_MARKER: char = '^';

/// Serialize the subtree at `node`.
///
/// With `heads_only` the result is the flat sentence: leaf heads in order,
/// separated by single spaces, without labels, indices or triangle markers.
/// With `highlight` labels and heads are wrapped in `<span>` elements for
/// display; the markup is XML-escaped and is not part of the grammar.
pub fn serialize(tree: &Tree, node: NodeId, heads_only: bool, highlight: bool) -> String {
    if heads_only {
        let mut words = Vec::new();
        collect_heads(tree, node, highlight, &mut words);
        return words.join(" ");
    }
    let mut out = String::new();
    write_bracketed(tree, node, highlight, &mut out);
    out
}

fn write_bracketed(tree: &Tree, id: NodeId, highlight: bool, out: &mut String) {
    let node = &tree[id];
    out.push('[');
    let label = node.indexed_label();
    if highlight {
        out.push_str(&span("node", &label));
    } else {
        out.push_str(&label);
    }

    if !node.is_leaf() {
        for &child in node.children() {
            out.push(' ');
            write_bracketed(tree, child, highlight, out);
        }
    } else if let Some(head) = node.visible_head() {
        out.push(' ');
        if highlight {
            out.push_str(&span("head", head));
        } else {
            out.push_str(head);
        }
    }
    out.push(']');
}

fn collect_heads(tree: &Tree, id: NodeId, highlight: bool, words: &mut Vec<String>) {
    let node = &tree[id];
    if !node.is_leaf() {
        for &child in node.children() {
            collect_heads(tree, child, highlight, words);
        }
        return;
    }
    let Some(head) = node.visible_head() else {
        return;
    };
    let head = head.strip_prefix(TRIANGLE_MARKER).unwrap_or(head).trim();
    if head.is_empty() {
        return;
    }
    words.push(if highlight {
        span("head", head)
    } else {
        head.to_string()
    });
}

fn span(class: &str, text: &str) -> String {
    format!(r#"<span class="{}">{}</span>"#, class, escape_xml(text))
}

/// Escape text for inclusion in XML/HTML markup
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl Tree {
    /// Canonical bracket text of the whole tree
    pub fn to_bracket_string(&self) -> String {
        serialize(self, self.root(), false, false)
    }

    /// The flat sentence spelled out by the tree's heads
    pub fn sentence(&self) -> String {
        serialize(self, self.root(), true, false)
    }
}
