//! Lexical diagnostics.
//!
//! The scanner never fails. Anomalies it recovers from are recorded on the
//! token as [`TokenFlags`] and can be turned into a [`LexError`] for
//! reporting. Producing diagnostics never changes the token stream.

use thiserror::Error;

use crate::span::Span;
use crate::token::{Token, TokenFlags};

/// What kind of anomaly the scanner recovered from.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// String literal reached end of input without a closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Character outside every lexical class and the symbol set.
    #[error("unrecognized character {ch:?}")]
    UnrecognizedCharacter { ch: char },
}

/// A positioned lexical diagnostic.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {line}:{column}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Raw span of the offending token.
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl LexError {
    /// Derive a diagnostic from a flagged token.
    ///
    /// Returns `None` for well-formed tokens.
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        let kind = if token.flags.contains(TokenFlags::UNTERMINATED) {
            LexErrorKind::UnterminatedString
        } else if token.flags.contains(TokenFlags::UNRECOGNIZED) {
            LexErrorKind::UnrecognizedCharacter {
                ch: token.lexeme.chars().next()?,
            }
        } else {
            return None;
        };
        Some(LexError {
            kind,
            span: token.span,
            line: token.line,
            column: token.column,
        })
    }

    /// Short actionable hint for the diagnostic.
    pub fn help(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnterminatedString => "add a closing `\"` to end the string",
            LexErrorKind::UnrecognizedCharacter { .. } => {
                "remove the character or move it inside a string literal"
            }
        }
    }
}
