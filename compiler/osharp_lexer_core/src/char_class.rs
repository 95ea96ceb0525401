//! Character classes used by the raw scanner's dispatch.
//!
//! The symbol set is part of the language's lexical contract. Adding or
//! removing a character here changes which tokens are flagged as
//! unrecognized downstream.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// The fixed set of single-character punctuation symbols.
pub const SYMBOLS: [char; 15] = [
    '{', '}', '(', ')', '[', ']', ';', ',', ':', '=', '+', '-', '*', '/', '.',
];

/// Whitespace per Unicode `White_Space`, including `\n` and `\r`.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// First character of an identifier: any alphabetic character or `_`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Subsequent identifier characters: alphanumeric or `_`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Decimal digit: ASCII `0-9` or any other Unicode `Nd` character
/// (`٣`, `１`). Other numerics such as `½` and `²` are not digits.
#[inline]
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Member of the fixed symbol set.
#[inline]
pub fn is_symbol(c: char) -> bool {
    matches!(
        c,
        '{' | '}' | '(' | ')' | '[' | ']' | ';' | ',' | ':' | '=' | '+' | '-' | '*' | '/' | '.'
    )
}
