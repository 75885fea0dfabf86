//! Lexer for bracketed-phrase notation using logos

use logos::Logos;

pub use crate::error::Span;

/// Tokens of the bracket grammar. Runs of whitespace are skipped, which
/// normalizes them to a single separator.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum Token {
    #[token("[")]
    Open,

    #[token("]")]
    Close,

    /// A label or a head word
    #[regex(r"[^ \t\n\r\x0B\x0C\[\]]+", |lex| lex.slice().to_string())]
    Word(String),
}

/// Tokenize bracket text, pairing each token with its byte span
pub fn tokenize(source: &str) -> Vec<(Token, Span)> {
    Token::lexer(source)
        .spanned()
        .filter_map(|(token, span)| token.ok().map(|t| (t, span)))
        .collect()
}
