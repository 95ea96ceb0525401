//! Escape decoding for string literal bodies.
//!
//! Recognized escapes: `\n` `\t` `\"` `\\`. Any other escaped character
//! passes through literally (`\x` decodes to `x`); this is not an error. A
//! backslash with nothing after it (only possible in an unterminated
//! literal at end of input) is dropped.

use std::borrow::Cow;

/// Decode a string body (the text between the quotes).
///
/// Fast path: a body without backslashes is returned borrowed.
pub(crate) fn unescape_string(body: &str) -> Cow<'_, str> {
    if !body.contains('\\') {
        return Cow::Borrowed(body);
    }

    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some(other) => result.push(other),
            None => {}
        }
    }
    Cow::Owned(result)
}
