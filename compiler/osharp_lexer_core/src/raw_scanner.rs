//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner does not resolve keywords or decode escapes; those are
//! deferred to the cooking layer. It does know every token's extent, which
//! is all the position bookkeeping needs.
//!
//! # Dispatch
//!
//! At each position exactly one rule applies, checked in priority order:
//!
//! 1. whitespace run
//! 2. identifier run (letter or `_` start)
//! 3. number literal (decimal digit start)
//! 4. string literal (`"`)
//! 5. line comment (`//`)
//! 6. single-character symbol from [`SYMBOLS`](crate::SYMBOLS)
//! 7. single unknown character

use crate::char_class::{
    is_digit, is_ident_continue, is_ident_start, is_symbol, is_whitespace,
};
use crate::cursor::{Cursor, SourcePos};
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner over a [`Cursor`].
///
/// Produces one token per [`next_token()`](Self::next_token) call. Calls
/// after end of input keep returning zero-length [`RawTag::Eof`].
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Position where the next token will start.
    #[inline]
    pub fn position(&self) -> SourcePos {
        self.cursor.position()
    }

    /// The underlying cursor, for slicing token text.
    #[inline]
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Produce the next raw token.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        match self.cursor.current() {
            c if is_whitespace(c) => self.whitespace(start),
            c if is_ident_start(c) => self.identifier(start),
            c if is_digit(c) => self.number(start),
            '"' => self.string(start),
            '/' if self.cursor.peek() == '/' => self.line_comment(start),
            c if is_symbol(c) => self.single(start, RawTag::Symbol),
            _ => self.single(start, RawTag::Unknown),
        }
    }

    #[inline]
    fn finish(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.finish(start, RawTag::Whitespace)
    }

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.finish(start, RawTag::Ident)
    }

    /// Digits, then optionally `.` and more digits. `12.` is a complete
    /// literal; there is no exponent and no sign.
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_digit);
        if self.cursor.current() == '.' {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }
        self.finish(start, RawTag::Number)
    }

    /// A backslash always consumes the character after it, so `\"` never
    /// closes the literal. Newlines are allowed inside the body.
    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                _ if self.cursor.is_eof() => {
                    return self.finish(start, RawTag::UnterminatedString);
                }
                '"' => {
                    self.cursor.advance();
                    return self.finish(start, RawTag::String);
                }
                '\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                _ => self.cursor.advance(),
            }
        }
    }

    fn line_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.advance();
        self.cursor.eat_until_newline_or_eof();
        self.finish(start, RawTag::LineComment)
    }

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.finish(start, tag)
    }
}

#[cfg(test)]
mod tests;
