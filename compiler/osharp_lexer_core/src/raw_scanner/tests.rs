use super::*;
use pretty_assertions::assert_eq;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<RawToken> {
    let mut scanner = RawScanner::new(Cursor::new(source));
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

/// Helper: scan and return tags only.
fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

/// Helper: scan and return `(tag, text)` pairs.
fn scan_text(source: &str) -> Vec<(RawTag, &str)> {
    let mut offset = 0usize;
    scan(source)
        .into_iter()
        .map(|t| {
            let text = &source[offset..offset + t.len as usize];
            offset += t.len as usize;
            (t.tag, text)
        })
        .collect()
}

// ─── Invariants ────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "int age = 20;",
        "\"hello\\\" there\" 12.5",
        "// comment\nx",
        "  \t\n  \r\n  ",
        "@#$ é→ \"unterminated",
        "\"trailing backslash\\",
    ];
    for source in sources {
        let total: usize = scan(source).iter().map(|t| t.len as usize).sum();
        assert_eq!(total, source.len(), "total token length mismatch for {source:?}");
    }
}

#[test]
fn every_token_has_positive_length() {
    for source in ["int x", "+-*/", "\"s\" 'c'", "  \n", "//"] {
        for tok in scan(source) {
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
        }
    }
}

#[test]
fn eof_is_sticky_and_zero_length() {
    let mut scanner = RawScanner::new(Cursor::new("x"));
    assert_eq!(scanner.next_token().tag, RawTag::Ident);
    for _ in 0..3 {
        assert_eq!(scanner.next_token(), RawToken { tag: RawTag::Eof, len: 0 });
    }
}

// ─── Dispatch ────────────────────────────────────────────

#[test]
fn declaration_statement() {
    assert_eq!(
        scan_text("int age = 20;"),
        vec![
            (RawTag::Ident, "int"),
            (RawTag::Whitespace, " "),
            (RawTag::Ident, "age"),
            (RawTag::Whitespace, " "),
            (RawTag::Symbol, "="),
            (RawTag::Whitespace, " "),
            (RawTag::Number, "20"),
            (RawTag::Symbol, ";"),
        ]
    );
}

#[test]
fn whitespace_run_spans_newlines() {
    assert_eq!(
        scan_text(" \n\t\r\n x"),
        vec![(RawTag::Whitespace, " \n\t\r\n "), (RawTag::Ident, "x")]
    );
}

#[test]
fn identifiers_with_underscores_and_digits() {
    assert_eq!(scan_text("_a1 b_2"), vec![
        (RawTag::Ident, "_a1"),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "b_2"),
    ]);
}

#[test]
fn unicode_identifier() {
    assert_eq!(scan_text("größe"), vec![(RawTag::Ident, "größe")]);
}

#[test]
fn unicode_decimal_digits() {
    assert_eq!(scan_text("٣"), vec![(RawTag::Number, "٣")]);
    assert_eq!(scan_text("１2.٥"), vec![(RawTag::Number, "１2.٥")]);
    assert_eq!(scan_text("½"), vec![(RawTag::Unknown, "½")]);
}

#[test]
fn numbers() {
    assert_eq!(scan_text("12.34"), vec![(RawTag::Number, "12.34")]);
    assert_eq!(scan_text("12."), vec![(RawTag::Number, "12.")]);
    assert_eq!(scan_text("1.2.3"), vec![
        (RawTag::Number, "1.2"),
        (RawTag::Symbol, "."),
        (RawTag::Number, "3"),
    ]);
}

#[test]
fn leading_minus_is_a_symbol() {
    assert_eq!(scan_tags("-5"), vec![RawTag::Symbol, RawTag::Number]);
}

#[test]
fn exponent_is_not_part_of_number() {
    assert_eq!(scan_text("1e5"), vec![(RawTag::Number, "1"), (RawTag::Ident, "e5")]);
}

#[test]
fn strings() {
    assert_eq!(scan_text(r#""abc""#), vec![(RawTag::String, r#""abc""#)]);
    assert_eq!(scan_text(r#""a\"b" x"#), vec![
        (RawTag::String, r#""a\"b""#),
        (RawTag::Whitespace, " "),
        (RawTag::Ident, "x"),
    ]);
    assert_eq!(scan_text(r#""a\\" x"#)[0], (RawTag::String, r#""a\\""#));
}

#[test]
fn multiline_string() {
    assert_eq!(scan_text("\"a\nb\""), vec![(RawTag::String, "\"a\nb\"")]);
}

#[test]
fn unterminated_strings() {
    assert_eq!(scan_text("\"abc"), vec![(RawTag::UnterminatedString, "\"abc")]);
    assert_eq!(scan_text("\""), vec![(RawTag::UnterminatedString, "\"")]);
    assert_eq!(scan_text("\"abc\\"), vec![(RawTag::UnterminatedString, "\"abc\\")]);
    assert_eq!(scan_text("\"abc\\\""), vec![(RawTag::UnterminatedString, "\"abc\\\"")]);
}

#[test]
fn comments() {
    assert_eq!(scan_text("// comment\nx"), vec![
        (RawTag::LineComment, "// comment"),
        (RawTag::Whitespace, "\n"),
        (RawTag::Ident, "x"),
    ]);
    assert_eq!(scan_text("//"), vec![(RawTag::LineComment, "//")]);
    assert_eq!(scan_text("a//b"), vec![(RawTag::Ident, "a"), (RawTag::LineComment, "//b")]);
}

#[test]
fn single_slash_is_a_symbol() {
    assert_eq!(scan_text("a / b")[2], (RawTag::Symbol, "/"));
}

#[test]
fn every_symbol_is_recognized() {
    let source = "{}()[];,:=+-*.";
    let tags = scan_tags(source);
    assert_eq!(tags.len(), source.chars().count());
    assert!(tags.iter().all(|&t| t == RawTag::Symbol));
}

#[test]
fn unknown_characters() {
    assert_eq!(scan_text("@"), vec![(RawTag::Unknown, "@")]);
    assert_eq!(scan_text("a@b"), vec![
        (RawTag::Ident, "a"),
        (RawTag::Unknown, "@"),
        (RawTag::Ident, "b"),
    ]);
    assert_eq!(scan_text("→"), vec![(RawTag::Unknown, "→")]);
    assert_eq!(scan_text("\0"), vec![(RawTag::Unknown, "\0")]);
}

// ─── Positions ────────────────────────────────────────────

#[test]
fn positions_after_multiline_string() {
    let mut scanner = RawScanner::new(Cursor::new("\"a\nbc\" x"));
    scanner.next_token();
    scanner.next_token();
    let pos = scanner.position();
    assert_eq!((pos.line, pos.column), (2, 5));
}

#[test]
fn positions_after_comment() {
    let mut scanner = RawScanner::new(Cursor::new("// c\n  y"));
    scanner.next_token();
    scanner.next_token();
    let pos = scanner.position();
    assert_eq!((pos.line, pos.column), (2, 3));
}

// ─── Property Tests ────────────────────────────────────────────

mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokens_cover_arbitrary_input(source in any::<String>()) {
            let total: usize = scan(&source).iter().map(|t| t.len as usize).sum();
            prop_assert_eq!(total, source.len());
        }

        #[test]
        fn tokens_cover_lexical_soup(
            source in "[a-zA-Z0-9_ \t\n\"\\\\/.;={}@#é]{0,64}"
        ) {
            let tokens = scan(&source);
            let total: usize = tokens.iter().map(|t| t.len as usize).sum();
            prop_assert_eq!(total, source.len());
            prop_assert!(tokens.iter().all(|t| t.len > 0));
        }
    }
}
