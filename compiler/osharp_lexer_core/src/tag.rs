//! Raw token tags.
//!
//! A [`RawTag`] names the lexical shape of a token before cooking. Anomalies
//! are tags too ([`RawTag::UnterminatedString`], [`RawTag::Unknown`]), so the
//! scanner never needs an error channel.

/// Lexical class of a raw token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    /// Maximal run of whitespace, newlines included.
    Whitespace,
    /// Identifier-shaped run; may cook to a keyword.
    Ident,
    /// Digits, optionally followed by `.` and more digits.
    Number,
    /// String literal closed by `"`.
    String,
    /// String literal that hit end of input before its closing `"`.
    UnterminatedString,
    /// `//` up to (not including) the next newline.
    LineComment,
    /// One character from the fixed symbol set.
    Symbol,
    /// One character that no other rule accepts.
    Unknown,
    /// End of input. Always zero length.
    Eof,
}

impl RawTag {
    /// Short human-readable name, used in debug output.
    pub const fn name(self) -> &'static str {
        match self {
            RawTag::Whitespace => "whitespace",
            RawTag::Ident => "identifier",
            RawTag::Number => "number",
            RawTag::String => "string",
            RawTag::UnterminatedString => "unterminated string",
            RawTag::LineComment => "comment",
            RawTag::Symbol => "symbol",
            RawTag::Unknown => "unknown character",
            RawTag::Eof => "end of file",
        }
    }

    /// Tags that encode a lexical anomaly.
    pub const fn is_anomaly(self) -> bool {
        matches!(self, RawTag::UnterminatedString | RawTag::Unknown)
    }
}

/// A raw token: tag plus byte length. The start offset is implied by the
/// running sum of previous lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
