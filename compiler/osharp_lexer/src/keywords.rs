//! Reserved-word table.
//!
//! Keyword matching is case-insensitive: `If`, `IF` and `if` all resolve to
//! [`TokenKind::If`]. The table is keyed by the lowercased spelling and
//! built once, then shared read-only by every scanner.
//!
//! `string` resolves to [`TokenKind::StringType`] (the type name), never to
//! [`TokenKind::String`] (literals). `short` is reserved without a dedicated
//! kind and resolves to the generic [`TokenKind::Keyword`].
//!
//! Changing this table changes which source text classifies as an
//! identifier. Bump [`KEYWORD_TABLE_VERSION`] when it changes.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// Version of the reserved-word contract.
pub const KEYWORD_TABLE_VERSION: u32 = 1;

/// Longest reserved word (`networkconnector`).
const MAX_KEYWORD_LEN: usize = 16;

/// Lowercased spelling → kind.
const RESERVED: [(&str, TokenKind); 35] = [
    ("public", TokenKind::Public),
    ("private", TokenKind::Private),
    ("internal", TokenKind::Internal),
    ("static", TokenKind::Static),
    ("void", TokenKind::Void),
    ("return", TokenKind::Return),
    ("int", TokenKind::Int),
    ("float", TokenKind::Float),
    ("double", TokenKind::Double),
    ("long", TokenKind::Long),
    ("string", TokenKind::StringType),
    ("bool", TokenKind::Bool),
    ("onchanged", TokenKind::OnChanged),
    ("safe", TokenKind::Safe),
    ("unsafe", TokenKind::Unsafe),
    ("io", TokenKind::IO),
    ("net", TokenKind::Net),
    ("all", TokenKind::All),
    ("parallel", TokenKind::Parallel),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("foreach", TokenKind::Foreach),
    ("while", TokenKind::While),
    ("continue", TokenKind::Continue),
    ("end", TokenKind::End),
    ("try", TokenKind::Try),
    ("error", TokenKind::Error),
    ("final", TokenKind::Final),
    ("new", TokenKind::New),
    ("console", TokenKind::Console),
    ("networkserver", TokenKind::NetworkServer),
    ("networkconnector", TokenKind::NetworkConnector),
    ("networkutils", TokenKind::NetworkUtils),
    ("short", TokenKind::Keyword),
];

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| RESERVED.iter().copied().collect());

/// Look up a reserved word, ignoring ASCII case.
///
/// Returns `None` for ordinary identifiers. All reserved words are ASCII,
/// so identifiers containing non-ASCII characters are rejected before any
/// hashing, as are identifiers too short or too long to be keywords.
pub fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    if !(2..=MAX_KEYWORD_LEN).contains(&bytes.len()) || !bytes.is_ascii() {
        return None;
    }

    let mut buf = [0u8; MAX_KEYWORD_LEN];
    let lowered = &mut buf[..bytes.len()];
    lowered.copy_from_slice(bytes);
    lowered.make_ascii_lowercase();
    let key = std::str::from_utf8(lowered).ok()?;

    KEYWORDS.get(key).copied()
}

/// Every reserved spelling (lowercase) with its kind, in table order.
pub fn reserved_words() -> impl Iterator<Item = (&'static str, TokenKind)> {
    RESERVED.iter().copied()
}
