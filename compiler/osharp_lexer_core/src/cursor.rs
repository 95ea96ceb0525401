//! Position-tracking cursor over source text.
//!
//! The cursor advances one character at a time and maintains the three
//! pieces of scanner state: byte offset, 1-based line and 1-based column.
//! Consuming `\n` increments the line and resets the column to 1; every
//! other character advances the column by one. This rule applies no matter
//! which token class is doing the consuming.
//!
//! # EOF
//!
//! [`current()`](Cursor::current) returns [`EOF_CHAR`] (`'\0'`) past the end
//! of input. Source text may contain interior NULs, so callers distinguish
//! the two with [`is_eof()`](Cursor::is_eof).

use std::fmt;

/// Character returned by [`Cursor::current`] and [`Cursor::peek`] at EOF.
pub const EOF_CHAR: char = '\0';

/// A resolved source position: byte offset plus 1-based line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePos {
    /// Byte offset from the start of the source.
    pub offset: u32,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, counted in characters.
    pub column: u32,
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Cursor over a `&str`.
///
/// The cursor is [`Copy`], so a snapshot for lookahead is a plain copy.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: u32,
    line: u32,
    column: u32,
}

// &str = 16, 3 x u32 = 12, padded to 32 on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    ///
    /// Offsets are `u32`. Sources longer than `u32::MAX` bytes are cut at the
    /// last character boundary that fits.
    pub fn new(source: &'a str) -> Self {
        let src = if u32::try_from(source.len()).is_ok() {
            source
        } else {
            let mut end = u32::MAX as usize;
            while !source.is_char_boundary(end) {
                end -= 1;
            }
            &source[..end]
        };
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.src[self.pos as usize..]
    }

    /// The character under the cursor, or [`EOF_CHAR`] at end of input.
    #[inline]
    pub fn current(&self) -> char {
        self.rest().chars().next().unwrap_or(EOF_CHAR)
    }

    /// The character after the current one, or [`EOF_CHAR`].
    #[inline]
    pub fn peek(&self) -> char {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next().unwrap_or(EOF_CHAR)
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.src.len()
    }

    /// Consume one character. A no-op at EOF.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    pub fn advance(&mut self) {
        let Some(c) = self.rest().chars().next() else {
            return;
        };
        self.pos += c.len_utf8() as u32;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advance while `pred` holds for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Consume a maximal whitespace run, newlines included.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Advance to the next `\n` (not consumed) or EOF.
    ///
    /// The skipped text contains no newline, so only the column moves.
    pub fn eat_until_newline_or_eof(&mut self) {
        let rest = self.rest();
        let end = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
        self.skip_inline(end);
    }

    /// Skip ahead to the next byte that can end or alter a string body:
    /// `"`, `\` or `\n`. Returns the character now under the cursor
    /// ([`EOF_CHAR`] if none was found).
    pub fn skip_to_string_delim(&mut self) -> char {
        let rest = self.rest();
        let end = memchr::memchr3(b'"', b'\\', b'\n', rest.as_bytes()).unwrap_or(rest.len());
        self.skip_inline(end);
        self.current()
    }

    /// Skip `len` bytes known to contain no `\n`, on a char boundary.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len and its char count are bounded by the source length, which fits in u32"
    )]
    fn skip_inline(&mut self, len: usize) {
        let skipped = &self.rest()[..len];
        self.column += skipped.chars().count() as u32;
        self.pos += len as u32;
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Snapshot of the cursor's position.
    #[inline]
    pub fn position(&self) -> SourcePos {
        SourcePos {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Length of the scanned source in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Cursor::new caps the source at u32::MAX bytes"
    )]
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.src.len() as u32
    }

    /// Source text between two byte offsets.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source on character boundaries. This
    /// holds for offsets taken from token boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.src[start as usize..end as usize]
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
mod tests;
