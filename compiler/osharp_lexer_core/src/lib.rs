//! Low-level scanner for O# source text.
//!
//! This crate turns a `&str` into a stream of `(RawTag, len)` pairs. It knows
//! the lexical *shape* of every token class but nothing about keywords or
//! escape decoding; those belong to the cooking layer in `osharp_lexer`.
//!
//! ```text
//! &str → Cursor → RawScanner → RawToken { tag, len }
//! ```
//!
//! The scanner is total: every input, however malformed, produces a finite
//! sequence of tokens ending in [`RawTag::Eof`]. Anomalies (unterminated
//! strings, characters outside the symbol set) are encoded as tags.

mod char_class;
mod cursor;
mod raw_scanner;
mod tag;

pub use char_class::{
    is_digit, is_ident_continue, is_ident_start, is_symbol, is_whitespace, SYMBOLS,
};
pub use cursor::{Cursor, SourcePos, EOF_CHAR};
pub use raw_scanner::RawScanner;
pub use tag::{RawTag, RawToken};
