//! Tests for the errors module

use super::*;
use text_size::{TextRange, TextSize};

#[test]
fn test_error_codes_are_distinct() {
    let kinds = [
        ErrorKind::MalformedSectionDef,
        ErrorKind::MalformedMultiIndent,
        ErrorKind::UnterminatedSeeClause,
        ErrorKind::EmptyParams,
    ];
    let mut codes: Vec<_> = kinds.iter().map(ErrorKind::code).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}

#[test]
fn test_structural_kinds() {
    assert!(ErrorKind::MalformedSectionDef.is_structural());
    assert!(ErrorKind::MalformedMultiIndent.is_structural());
    assert!(!ErrorKind::EmptyParams.is_structural());
}

#[test]
fn test_builder_workflow() {
    let opened = TextRange::new(TextSize::new(0), TextSize::new(1));
    let err = SyntaxError::builder(ErrorKind::MalformedSectionDef)
        .message("expected ']' to close table reference")
        .range(TextRange::empty(TextSize::new(11)))
        .hint("add ']'")
        .related("opened here", opened)
        .build();

    assert_eq!(err.kind, ErrorKind::MalformedSectionDef);
    assert!(err.has_hint());
    assert!(err.has_related());
    assert_eq!(err.related[0].range, opened);
}

#[test]
fn test_builder_default_message() {
    let err = SyntaxError::builder(ErrorKind::EmptyParams).build();
    assert_eq!(err.message, "empty parameter list");
}

#[test]
fn test_display() {
    let err = SyntaxError::at_offset(
        ErrorKind::UnterminatedSeeClause,
        "expected identifier after 'for'",
        TextSize::new(8),
    );
    assert_eq!(
        err.to_string(),
        "unterminated See clause [E0301]: expected identifier after 'for'"
    );
    assert!(err.format_detailed().ends_with("at 8..8"));
}
