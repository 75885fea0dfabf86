//! Parser for bracketed-phrase notation

mod grammar;
pub mod lexer;

pub use grammar::{parse, parse_with_diagnostics, split_label, ParseOutput};
