//! Cooked tokens: kind, lexeme, position and flags.

use std::borrow::Cow;
use std::fmt;

use bitflags::bitflags;

use crate::span::Span;

/// Lexical category of a token.
///
/// The keyword variants and the spellings that produce them are a
/// compatibility-sensitive contract; see [`crate::keywords`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Lexical classes ===
    Identifier,
    Number,
    String,
    Symbol,
    Whitespace,
    Comment,
    EndOfFile,
    /// Reserved word without a dedicated kind.
    Keyword,

    // === Modifiers and declarations ===
    Public,
    Private,
    Internal,
    Static,
    Void,
    Return,

    // === Type names ===
    Int,
    Float,
    Double,
    Long,
    /// The `string` type name. Distinct from [`TokenKind::String`] literals.
    StringType,
    Bool,

    // === Reactive ===
    OnChanged,

    // === Capabilities and execution ===
    Safe,
    Unsafe,
    IO,
    Net,
    All,
    Parallel,

    // === Control flow ===
    If,
    Else,
    For,
    Foreach,
    While,
    Continue,
    End,
    Try,
    Error,
    Final,
    New,

    // === Built-in objects ===
    Console,
    NetworkServer,
    NetworkConnector,
    NetworkUtils,
}

impl TokenKind {
    /// Stable display name, identical to the variant name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Symbol => "Symbol",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Comment => "Comment",
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Keyword => "Keyword",
            TokenKind::Public => "Public",
            TokenKind::Private => "Private",
            TokenKind::Internal => "Internal",
            TokenKind::Static => "Static",
            TokenKind::Void => "Void",
            TokenKind::Return => "Return",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::Double => "Double",
            TokenKind::Long => "Long",
            TokenKind::StringType => "StringType",
            TokenKind::Bool => "Bool",
            TokenKind::OnChanged => "OnChanged",
            TokenKind::Safe => "Safe",
            TokenKind::Unsafe => "Unsafe",
            TokenKind::IO => "IO",
            TokenKind::Net => "Net",
            TokenKind::All => "All",
            TokenKind::Parallel => "Parallel",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::For => "For",
            TokenKind::Foreach => "Foreach",
            TokenKind::While => "While",
            TokenKind::Continue => "Continue",
            TokenKind::End => "End",
            TokenKind::Try => "Try",
            TokenKind::Error => "Error",
            TokenKind::Final => "Final",
            TokenKind::New => "New",
            TokenKind::Console => "Console",
            TokenKind::NetworkServer => "NetworkServer",
            TokenKind::NetworkConnector => "NetworkConnector",
            TokenKind::NetworkUtils => "NetworkUtils",
        }
    }

    /// Any reserved word, including the generic [`TokenKind::Keyword`].
    pub const fn is_keyword(self) -> bool {
        !matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::Symbol
                | TokenKind::Whitespace
                | TokenKind::Comment
                | TokenKind::EndOfFile
        )
    }

    /// Whitespace and comments.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    #[inline]
    pub const fn is_eof(self) -> bool {
        matches!(self, TokenKind::EndOfFile)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Per-token well-formedness and decoding flags.
    ///
    /// Scanning never fails; these flags let a consumer detect anomalies
    /// without rescanning the source.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// String literal reached end of input without a closing `"`.
        const UNTERMINATED = 1 << 0;
        /// `Symbol` token whose character is outside the fixed symbol set.
        const UNRECOGNIZED = 1 << 1;
        /// String lexeme was decoded and differs from the raw body.
        const ESCAPED = 1 << 2;
    }
}

/// Numeric interpretation of a `Number` lexeme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberValue {
    Int(u64),
    Float(f64),
}

/// A classified, positioned unit of source text.
///
/// `lexeme` borrows from the source unless escape decoding produced new
/// text, in which case it is owned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Raw text, except: decoded content for strings, body without `//`
    /// for comments, empty for `EndOfFile`.
    pub lexeme: Cow<'src, str>,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
    /// Raw byte range, delimiters and escapes included.
    pub span: Span,
    pub flags: TokenFlags,
}

impl Token<'_> {
    #[inline]
    pub fn text(&self) -> &str {
        &self.lexeme
    }

    /// `false` for unterminated strings and unrecognized characters.
    pub fn is_well_formed(&self) -> bool {
        !self
            .flags
            .intersects(TokenFlags::UNTERMINATED | TokenFlags::UNRECOGNIZED)
    }

    /// Interpret a `Number` lexeme.
    ///
    /// Lexemes with a decimal point are floats. Integers that overflow
    /// `u64` fall back to `Float`. Returns `None` for other kinds and for
    /// numbers spelled with non-ASCII digits (`٣`, `１2`).
    pub fn number_value(&self) -> Option<NumberValue> {
        if self.kind != TokenKind::Number || !self.lexeme.is_ascii() {
            return None;
        }
        if !self.lexeme.contains('.') {
            if let Ok(n) = self.lexeme.parse::<u64>() {
                return Some(NumberValue::Int(n));
            }
        }
        self.lexeme.parse::<f64>().ok().map(NumberValue::Float)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) at {}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}
