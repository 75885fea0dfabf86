//! Permissive bracket parser
//!
//! A single left-to-right pass over the token stream. The parser never
//! fails: malformed input is repaired in place and each repair is reported
//! as a [`ParseDiagnostic`].

use std::collections::HashMap;

use log::{debug, trace};

use super::lexer::{tokenize, Span, Token};
use crate::error::ParseDiagnostic;
use crate::tree::{Node, NodeId, Tree, TRACE_HEAD};

/// A parsed tree together with the repairs made on the way
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub tree: Tree,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Parse bracket text into a tree, discarding diagnostics
pub fn parse(source: &str) -> Tree {
    parse_with_diagnostics(source).tree
}

/// Parse bracket text into a tree and report any repairs
pub fn parse_with_diagnostics(source: &str) -> ParseOutput {
    let mut parser = Parser::default();
    for (token, span) in tokenize(source) {
        parser.step(token, span);
    }
    parser.finish(source.len())
}

/// Split a trailing `_name` coreference index off a label
pub fn split_label(word: &str) -> (&str, &str) {
    match word.rsplit_once('_') {
        Some((label, name)) if !label.is_empty() && !name.is_empty() => (label, name),
        _ => (word, ""),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Next word names a phrase
    #[default]
    Label,
    /// Words accumulate into the current node's head
    Head,
}

#[derive(Default)]
struct Parser {
    tree: Option<Tree>,
    current: Option<NodeId>,
    state: State,
    /// Span of the `[` waiting for its label
    open_bracket: Option<Span>,
    pending_head: Vec<String>,
    root_bracketed: bool,
    root_closed: bool,
    label_spans: HashMap<NodeId, Span>,
    diagnostics: Vec<ParseDiagnostic>,
}

impl Parser {
    fn step(&mut self, token: Token, span: Span) {
        trace!("{:?} at {:?} in {:?}", token, span, self.state);
        match token {
            Token::Open => {
                if let Some(pending) = self.open_bracket.take() {
                    self.open_node(String::new(), pending);
                }
                self.flush_head();
                if self.root_closed {
                    debug!("content after the root at {:?}", span);
                    self.diagnostics
                        .push(ParseDiagnostic::TrailingContent { span: span.clone() });
                }
                if self.tree.is_none() {
                    self.root_bracketed = true;
                }
                self.open_bracket = Some(span);
                self.state = State::Label;
            }
            Token::Word(word) => match self.state {
                State::Label => {
                    let span = match self.open_bracket.take() {
                        Some(open) => open.end..span.end,
                        None => span,
                    };
                    self.open_node(word, span);
                }
                State::Head => {
                    if self.root_closed && self.current == self.root() && self.pending_head.is_empty() {
                        self.diagnostics
                            .push(ParseDiagnostic::TrailingContent { span: span.clone() });
                    }
                    self.pending_head.push(word);
                }
            },
            Token::Close => {
                if let Some(pending) = self.open_bracket.take() {
                    self.open_node(String::new(), pending);
                }
                self.flush_head();
                self.close(span);
            }
        }
    }

    fn root(&self) -> Option<NodeId> {
        self.tree.as_ref().map(Tree::root)
    }

    /// Create a node for `word` under the cursor and descend into it
    fn open_node(&mut self, word: String, span: Span) {
        let (label, name) = split_label(&word);
        if label.is_empty() {
            self.diagnostics
                .push(ParseDiagnostic::MissingLabel { span: span.clone() });
        }

        let id = if let Some(tree) = self.tree.as_mut() {
            match self.current {
                Some(parent) => tree
                    .push_child(parent, label)
                    .unwrap_or_else(|_| tree.root()),
                None => tree.root(),
            }
        } else {
            let tree = Tree::new(label);
            let root = tree.root();
            self.tree = Some(tree);
            root
        };
        if let Some(tree) = self.tree.as_mut() {
            tree.set_coreference_name(id, name);
        }

        self.label_spans.insert(id, span);
        self.current = Some(id);
        self.state = State::Head;
    }

    /// Attach accumulated head words to the current node
    fn flush_head(&mut self) {
        if self.pending_head.is_empty() {
            return;
        }
        let words = std::mem::take(&mut self.pending_head).join(" ");
        if let (Some(tree), Some(id)) = (self.tree.as_mut(), self.current) {
            let head = match tree.head(id) {
                Some(existing) if !existing.is_empty() => format!("{} {}", existing, words),
                _ => words,
            };
            tree.set_head_unchecked(id, head);
        }
    }

    fn close(&mut self, span: Span) {
        let (Some(tree), Some(current)) = (self.tree.as_ref(), self.current) else {
            debug!("']' before any phrase at {:?}", span);
            self.diagnostics.push(ParseDiagnostic::UnmatchedClose { span });
            return;
        };

        match tree.parent(current) {
            Some(parent) => self.current = Some(parent),
            None if self.root_bracketed && !self.root_closed => self.root_closed = true,
            None => {
                debug!("unmatched ']' at {:?}", span);
                self.diagnostics.push(ParseDiagnostic::UnmatchedClose { span });
            }
        }
        self.state = State::Head;
    }

    fn finish(mut self, end: usize) -> ParseOutput {
        if let Some(pending) = self.open_bracket.take() {
            self.open_node(String::new(), pending);
        }
        self.flush_head();

        let mut tree = self.tree.take().unwrap_or_else(|| Tree::new(""));

        let unclosed = match self.current {
            Some(current) => {
                tree.depth(current) + usize::from(self.root_bracketed && !self.root_closed)
            }
            None => 0,
        };
        if unclosed > 0 {
            debug!("{} unclosed brackets at end of input", unclosed);
            self.diagnostics.push(ParseDiagnostic::UnclosedBrackets {
                span: end..end,
                count: unclosed,
            });
        }

        resolve_coreferences(&mut tree, &self.label_spans, &mut self.diagnostics);

        ParseOutput {
            tree,
            diagnostics: self.diagnostics,
        }
    }
}

struct IndexEntry {
    first: NodeId,
    linked: bool,
}

/// Link coindexed pairs in document order.
///
/// The first node carrying an index is remembered; the next one with the
/// same label is linked with it and becomes a trace if its head is `t`.
fn resolve_coreferences(
    tree: &mut Tree,
    spans: &HashMap<NodeId, Span>,
    diagnostics: &mut Vec<ParseDiagnostic>,
) {
    let mut index: HashMap<String, IndexEntry> = HashMap::new();

    for id in tree.descendants(tree.root()) {
        let node = &tree[id];
        if node.coreference_name().is_empty() {
            continue;
        }
        let name = node.coreference_name().to_string();
        let span = spans.get(&id).cloned().unwrap_or_default();

        let Some(entry) = index.get_mut(&name) else {
            index.insert(name, IndexEntry { first: id, linked: false });
            continue;
        };

        let first_label = tree.label(entry.first).to_string();
        if first_label != node.label() {
            diagnostics.push(ParseDiagnostic::MismatchedCoreference {
                span,
                name,
                label: node.label().to_string(),
                first_label,
            });
        } else if entry.linked {
            diagnostics.push(ParseDiagnostic::ExtraCoreference { span, name });
        } else {
            let is_trace = node.head() == Some(TRACE_HEAD);
            tree.link_pair(entry.first, id, is_trace);
            entry.linked = true;
        }
    }
}

impl Tree {
    pub(crate) fn set_coreference_name(&mut self, id: NodeId, name: &str) {
        if let Ok(node) = self.node_mut(id) {
            node.coreference_name = name.to_string();
        }
    }

    pub(crate) fn set_head_unchecked(&mut self, id: NodeId, head: String) {
        if let Ok(node) = self.node_mut(id) {
            node.head = Some(head);
        }
    }

    /// Link two nodes reciprocally, optionally marking the second a trace
    pub(crate) fn link_pair(&mut self, first: NodeId, second: NodeId, second_is_trace: bool) {
        let linked = |node: &mut Node, other: NodeId| node.coreference_link = Some(other);
        if let Ok(node) = self.node_mut(first) {
            linked(node, second);
        }
        if let Ok(node) = self.node_mut(second) {
            linked(node, first);
            node.is_trace = second_is_trace;
        }
    }
}
