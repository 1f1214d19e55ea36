//! Integration tests for end-to-end scanning.
//!
//! These tests verify that the pipeline works from a file on disk through
//! loading, scanning and rendering of both result tables.

use std::path::PathBuf;

use clexer::{
    errors::errors::ErrorImpl,
    lexer::{lexer::scan, tokens::TokenKind},
    render_error,
    report::table::{render_symbol_table, render_token_table},
    source::loader::load_source,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

#[test]
fn test_scan_program_fixture() {
    let source = load_source(&fixture("program.txt")).unwrap();
    let (tokens, symbols) = scan(&source, Some("program.txt".to_string())).unwrap();

    assert_eq!(
        symbols.iter().collect::<Vec<_>>(),
        vec![(1, "main"), (2, "total"), (3, "i"), (4, "msg")]
    );

    let operators = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.value.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        operators,
        vec!["=", "=", "<=", "=", "+", "=", "+", "!=", "&&", ">=", "="]
    );

    let strings = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .map(|t| t.value.as_str())
        .collect::<Vec<_>>();
    assert_eq!(strings, vec!["done"]);

    assert_eq!(tokens.first().map(|t| t.pair()), Some((TokenKind::Reserved, "int")));
    assert_eq!(tokens.last().map(|t| t.pair()), Some((TokenKind::Delimiter, "}")));
}

#[test]
fn test_render_program_tables() {
    let source = load_source(&fixture("program.txt")).unwrap();
    let (tokens, symbols) = scan(&source, None).unwrap();

    let token_table = render_token_table(&tokens);
    assert!(token_table.starts_with("+----+------------+--------+\n|  # | Type       | Value  |\n"));
    assert!(token_table.contains("|  1 | RESERVED   | int    |"));
    assert!(token_table.contains("| STRING     | done   |"));

    let symbol_table = render_symbol_table(&symbols);
    assert!(symbol_table.contains("| 4 | msg    |"));
}

#[test]
fn test_fraction_fixture_fails_at_dot() {
    let source = load_source(&fixture("fraction.txt")).unwrap();
    let error = scan(&source, Some("fraction.txt".to_string())).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::InvalidCharacter { character: '.' });

    let rendered = render_error(&error, Some(&source));
    assert!(rendered.contains("-> fraction.txt"));
    assert!(rendered.contains("1 | int x = 3.5;"));
    assert!(rendered.contains("  | ---------^"));
}

#[test]
fn test_blank_fixture_is_rejected() {
    let error = load_source(&fixture("blank.txt")).unwrap_err();

    assert!(matches!(error.get_kind(), ErrorImpl::EmptyFile { .. }));
}
