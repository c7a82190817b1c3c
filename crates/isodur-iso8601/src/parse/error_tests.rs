//! Tests for duration parse errors.

use super::*;

#[test]
fn test_parse_error_new() {
    let error = ParseError::new(ParseErrorKind::MissingPrefix, 1);
    assert_eq!(error.kind, ParseErrorKind::MissingPrefix);
    assert_eq!(error.column, 1);
    assert!(error.context.is_none());
}

#[test]
fn test_parse_error_with_context() {
    let error = ParseError::new(ParseErrorKind::UnknownDesignator, 4).with_context("found 'F'");

    assert_eq!(error.kind, ParseErrorKind::UnknownDesignator);
    assert_eq!(error.column, 4);
    assert_eq!(error.context.as_deref(), Some("found 'F'"));
}

#[test]
fn test_parse_error_display() {
    let error = ParseError::new(ParseErrorKind::OutOfOrder, 5);
    let display = format!("{error}");
    assert!(display.contains("designator out of order"));
    assert!(display.contains("column 5"));
}

#[test]
fn test_parse_error_display_with_context() {
    let error = ParseError::new(ParseErrorKind::ExpectedNumber, 2).with_context("found 'P'");
    assert_eq!(
        error.to_string(),
        "expected integer at column 2: found 'P'"
    );
}

#[test]
fn test_all_error_kinds_display() {
    let kinds = [
        (ParseErrorKind::Empty, "empty duration"),
        (ParseErrorKind::MissingPrefix, "duration must start with 'P'"),
        (ParseErrorKind::ExpectedNumber, "expected integer"),
        (ParseErrorKind::MissingDesignator, "missing designator"),
        (ParseErrorKind::UnknownDesignator, "unknown designator"),
        (ParseErrorKind::OutOfOrder, "designator out of order"),
        (ParseErrorKind::EmptyTimePart, "empty time part"),
        (ParseErrorKind::NoComponents, "duration has no components"),
        (ParseErrorKind::Overflow, "integer overflow"),
    ];

    for (kind, expected) in kinds {
        assert_eq!(kind.to_string(), expected);
    }
}
