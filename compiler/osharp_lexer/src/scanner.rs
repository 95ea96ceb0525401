//! The token scanner: raw tokens in, cooked tokens out.
//!
//! ```text
//! source → RawScanner → (RawTag, len) → cook → Token
//! ```
//!
//! Cooking resolves keywords, decodes string escapes, strips comment
//! markers and sets [`TokenFlags`]. It never looks at more than the current
//! raw token, so the scanner is lazy: each `next()` does the work for
//! exactly one token.

use std::borrow::Cow;
use std::iter::FusedIterator;

use osharp_lexer_core::{Cursor, RawScanner, RawTag, SourcePos};
use tracing::{debug, trace};

use crate::escape::unescape_string;
use crate::keywords;
use crate::span::Span;
use crate::token::{Token, TokenFlags, TokenKind};

/// Lazy, forward-only token iterator over one source text.
///
/// Yields every token, trivia included, and finishes with exactly one
/// [`TokenKind::EndOfFile`]. After that it returns `None`. A scanner cannot
/// be rewound; construct a new one to scan again.
pub struct Scanner<'src> {
    raw: RawScanner<'src>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            raw: RawScanner::new(Cursor::new(source)),
            finished: false,
        }
    }

    /// Position where the next token will start.
    pub fn position(&self) -> SourcePos {
        self.raw.position()
    }

    fn cook(tag: RawTag, text: &'src str) -> (TokenKind, Cow<'src, str>, TokenFlags) {
        match tag {
            RawTag::Whitespace => (
                TokenKind::Whitespace,
                Cow::Borrowed(text),
                TokenFlags::empty(),
            ),
            RawTag::Ident => {
                let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
                (kind, Cow::Borrowed(text), TokenFlags::empty())
            }
            RawTag::Number => (TokenKind::Number, Cow::Borrowed(text), TokenFlags::empty()),
            RawTag::String => {
                // Both quotes are ASCII, so these slices are on char boundaries.
                let body = &text[1..text.len() - 1];
                Self::cook_string(body, TokenFlags::empty())
            }
            RawTag::UnterminatedString => {
                Self::cook_string(&text[1..], TokenFlags::UNTERMINATED)
            }
            RawTag::LineComment => (
                TokenKind::Comment,
                Cow::Borrowed(&text[2..]),
                TokenFlags::empty(),
            ),
            RawTag::Symbol => (TokenKind::Symbol, Cow::Borrowed(text), TokenFlags::empty()),
            RawTag::Unknown => (
                TokenKind::Symbol,
                Cow::Borrowed(text),
                TokenFlags::UNRECOGNIZED,
            ),
            RawTag::Eof => (TokenKind::EndOfFile, Cow::Borrowed(""), TokenFlags::empty()),
        }
    }

    fn cook_string(
        body: &'src str,
        mut flags: TokenFlags,
    ) -> (TokenKind, Cow<'src, str>, TokenFlags) {
        let lexeme = unescape_string(body);
        if matches!(lexeme, Cow::Owned(_)) {
            flags |= TokenFlags::ESCAPED;
        }
        (TokenKind::String, lexeme, flags)
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }

        let start = self.raw.position();
        let raw = self.raw.next_token();
        let text = self.raw.cursor().slice_from(start.offset);

        let (kind, lexeme, flags) = Self::cook(raw.tag, text);
        if raw.tag.is_anomaly() {
            debug!(
                tag = raw.tag.name(),
                line = start.line,
                column = start.column,
                "recovered from lexical anomaly"
            );
        }
        trace!(
            kind = kind.name(),
            line = start.line,
            column = start.column,
            len = raw.len,
            "token"
        );

        self.finished = kind.is_eof();
        let span = if self.finished {
            Span::point(start.offset)
        } else {
            Span::new(start.offset, start.offset + raw.len)
        };
        Some(Token {
            kind,
            lexeme,
            line: start.line,
            column: start.column,
            span,
            flags,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            let remaining = self.raw.cursor().source_len() - self.raw.position().offset;
            // One token per remaining byte at most, plus EndOfFile.
            (1, Some(remaining as usize + 1))
        }
    }
}

impl FusedIterator for Scanner<'_> {}
