//! Error and diagnostic types

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::tree::NodeId;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised by structural edits on a [`Tree`](crate::Tree).
///
/// A mutator that returns one of these has left the tree unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("position {position} is out of range for a node with {len} children")]
    OutOfRange { position: usize, len: usize },

    #[error("cannot move {mover} under {target}: the target lies inside the moved subtree")]
    CyclicMove { mover: NodeId, target: NodeId },

    #[error("node {0} has no parent")]
    NoParent(NodeId),

    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("node {0} is not part of the tree")]
    Detached(NodeId),

    #[error("label {0:?} cannot be written in bracket notation")]
    InvalidLabel(String),

    #[error("head {0:?} cannot be written in bracket notation")]
    InvalidHead(String),
}

/// A recovery the bracket parser made while reading malformed input.
///
/// The parser never fails; these describe what it did instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDiagnostic {
    #[error("unmatched ']' ignored")]
    UnmatchedClose { span: Span },

    #[error("{count} unclosed '[' at end of input")]
    UnclosedBrackets { span: Span, count: usize },

    #[error("content after the root was closed is attached to the root")]
    TrailingContent { span: Span },

    #[error("'[' without a label")]
    MissingLabel { span: Span },

    #[error("index '_{name}' on {label} does not match {first_label}; left unlinked")]
    MismatchedCoreference {
        span: Span,
        name: String,
        label: String,
        first_label: String,
    },

    #[error("index '_{name}' already links a pair; left unlinked")]
    ExtraCoreference { span: Span, name: String },
}

impl ParseDiagnostic {
    pub fn span(&self) -> &Span {
        match self {
            Self::UnmatchedClose { span }
            | Self::UnclosedBrackets { span, .. }
            | Self::TrailingContent { span }
            | Self::MissingLabel { span }
            | Self::MismatchedCoreference { span, .. }
            | Self::ExtraCoreference { span, .. } => span,
        }
    }

    /// Format the diagnostic with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.hint())
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Self::UnmatchedClose { .. } => "nothing left to close here",
            Self::UnclosedBrackets { .. } => "open phrases are closed automatically",
            Self::TrailingContent { .. } => "added as a child of the root",
            Self::MissingLabel { .. } => "phrase has an empty label",
            Self::MismatchedCoreference { .. } => "labels must match to link",
            Self::ExtraCoreference { .. } => "only the first two occurrences link",
        }
    }
}
