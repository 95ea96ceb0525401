use super::*;
use pretty_assertions::assert_eq;

#[test]
fn starts_at_line_one_column_one() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.position(), SourcePos { offset: 0, line: 1, column: 1 });
    assert_eq!(cursor.current(), 'a');
    assert_eq!(cursor.peek(), 'b');
    assert!(!cursor.is_eof());
}

#[test]
fn empty_source_is_immediately_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), EOF_CHAR);
    assert_eq!(cursor.peek(), EOF_CHAR);
    assert_eq!(cursor.source_len(), 0);
}

#[test]
fn advance_moves_column() {
    let mut cursor = Cursor::new("ab");
    cursor.advance();
    assert_eq!(cursor.position(), SourcePos { offset: 1, line: 1, column: 2 });
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.column(), 3);
}

#[test]
fn newline_increments_line_and_resets_column() {
    let mut cursor = Cursor::new("a\nb");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.line(), 2);
    assert_eq!(cursor.column(), 1);
    assert_eq!(cursor.current(), 'b');
}

#[test]
fn advance_at_eof_is_noop() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    let before = cursor.position();
    cursor.advance();
    assert_eq!(cursor.position(), before);
}

#[test]
fn multibyte_characters_count_as_one_column() {
    let mut cursor = Cursor::new("é→x");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current(), 'x');
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.column(), 3);
}

#[test]
fn interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0");
    assert_eq!(cursor.current(), EOF_CHAR);
    assert!(!cursor.is_eof());
}

#[test]
fn eat_while_stops_at_predicate_failure() {
    let mut cursor = Cursor::new("123abc");
    cursor.eat_while(|c| c.is_ascii_digit());
    assert_eq!(cursor.slice_from(0), "123");
    assert_eq!(cursor.current(), 'a');
}

#[test]
fn eat_whitespace_tracks_lines() {
    let mut cursor = Cursor::new("  \n\t\n  x");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), 'x');
    assert_eq!(cursor.line(), 3);
    assert_eq!(cursor.column(), 3);
}

#[test]
fn eat_until_newline_leaves_newline() {
    let mut cursor = Cursor::new("// héllo\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), '\n');
    assert_eq!(cursor.line(), 1);
    assert_eq!(cursor.column(), 9);
}

#[test]
fn eat_until_newline_without_newline_reaches_eof() {
    let mut cursor = Cursor::new("no newline");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
    assert_eq!(cursor.column(), 11);
}

#[test]
fn skip_to_string_delim_finds_each_delimiter() {
    let mut cursor = Cursor::new("abc\"");
    assert_eq!(cursor.skip_to_string_delim(), '"');
    assert_eq!(cursor.column(), 4);

    let mut cursor = Cursor::new("ab\\n");
    assert_eq!(cursor.skip_to_string_delim(), '\\');

    let mut cursor = Cursor::new("ab\ncd");
    assert_eq!(cursor.skip_to_string_delim(), '\n');
    assert_eq!(cursor.line(), 1);

    let mut cursor = Cursor::new("abcd");
    assert_eq!(cursor.skip_to_string_delim(), EOF_CHAR);
    assert!(cursor.is_eof());
}

#[test]
fn copy_is_a_snapshot() {
    let mut cursor = Cursor::new("xy");
    let snapshot = cursor;
    cursor.advance();
    assert_eq!(snapshot.current(), 'x');
    assert_eq!(cursor.current(), 'y');
}

#[test]
fn slice_returns_source_text() {
    let cursor = Cursor::new("int age");
    assert_eq!(cursor.slice(4, 7), "age");
}

#[test]
fn source_pos_displays_line_and_column() {
    let pos = SourcePos { offset: 10, line: 3, column: 7 };
    assert_eq!(pos.to_string(), "3:7");
}
