//! Lexer for O#.
//!
//! Converts source text into an ordered stream of classified, positioned
//! [`Token`]s for a parser to consume. Whitespace and comments are kept as
//! tokens, so the raw spans of the stream tile the source exactly.
//!
//! Two entry points:
//! - [`tokenize`]: lazy [`Scanner`] iterator, one token per `next()`.
//! - [`lex`]: eager; collects every token plus the [`LexError`]
//!   diagnostics for anomalies the scanner recovered from.
//!
//! Scanning is total. Unterminated strings and unrecognized characters still
//! produce tokens; they are flagged, never fatal.

mod escape;
pub mod keywords;
mod lex_error;
mod scanner;
mod span;
mod token;

use tracing::debug;

pub use keywords::KEYWORD_TABLE_VERSION;
pub use lex_error::{LexError, LexErrorKind};
pub use osharp_lexer_core::SourcePos;
pub use scanner::Scanner;
pub use span::Span;
pub use token::{NumberValue, Token, TokenFlags, TokenKind};

/// Start scanning `source`.
///
/// The returned iterator is lazy and single-use. It always ends with one
/// [`TokenKind::EndOfFile`] positioned at the end of the input.
pub fn tokenize(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

/// Result of scanning a whole source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput<'src> {
    /// Every token, trivia included, ending with `EndOfFile`.
    pub tokens: Vec<Token<'src>>,
    /// Diagnostics in source order.
    pub errors: Vec<LexError>,
}

impl<'src> LexOutput<'src> {
    /// `true` if any token was unterminated or unrecognized.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Tokens a parser cares about: whitespace and comments filtered out.
    /// `EndOfFile` is kept.
    pub fn significant(&self) -> impl Iterator<Item = &Token<'src>> {
        self.tokens.iter().filter(|tok| !tok.kind.is_trivia())
    }
}

/// Scan `source` to completion.
pub fn lex(source: &str) -> LexOutput<'_> {
    let mut output = LexOutput::default();
    for token in tokenize(source) {
        if let Some(error) = LexError::from_token(&token) {
            output.errors.push(error);
        }
        output.tokens.push(token);
    }
    debug!(
        bytes = source.len(),
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed source"
    );
    output
}
