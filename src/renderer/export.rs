//! Helpers for saving rendered trees

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::tree::Tree;

/// Longest filename slug produced by [`export_slug`]
pub const SLUG_LENGTH: usize = 32;

/// Encode an SVG document as a `data:` URL suitable for a download link
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

/// Filename stem derived from the tree's sentence: lowercased, with runs of
/// whitespace collapsed to `-`, cut to [`SLUG_LENGTH`] characters.
///
/// Falls back to the root label when the tree has no heads, and to `"tree"`
/// when that is empty too.
pub fn export_slug(tree: &Tree) -> String {
    let sentence = tree.sentence();
    let source = if sentence.trim().is_empty() {
        tree.label(tree.root()).to_string()
    } else {
        sentence
    };

    let slug = source
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
        .chars()
        .take(SLUG_LENGTH)
        .collect::<String>();

    if slug.is_empty() {
        "tree".to_string()
    } else {
        slug
    }
}
