//! Unit tests for error handling.

use std::sync::Arc;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::{parse, Position};

fn position(offset: usize, line: usize, column: usize) -> Position {
    Position {
        offset,
        line,
        column,
        file: Arc::new("test.ael".to_string()),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "unrecognised character `@`".to_string(),
            expected: "an expression".to_string(),
        },
        position(10, 1, 11),
    );

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.get_position().offset, 10);
}

#[test]
fn test_error_display_includes_position_and_expectation() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "`)`".to_string(),
            expected: "an expression".to_string(),
        },
        position(8, 2, 3),
    );

    assert_eq!(
        error.to_string(),
        "test.ael:2:3: SyntaxError: expected an expression, found `)`"
    );
}

#[test]
fn test_reserved_keyword_error() {
    let error = Error::new(
        ErrorImpl::ReservedKeyword {
            keyword: "let".to_string(),
        },
        position(4, 1, 5),
    );

    assert_eq!(
        error.get_detail().to_string(),
        "expected identifier, found reserved keyword `let`"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 200 }, position(0, 1, 1));

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(
        error.get_detail().to_string(),
        "expression nests deeper than 200 levels"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "end of input".to_string(),
            expected: "`)`".to_string(),
        },
        position(0, 1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `)` here"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_render_points_at_offending_column() {
    let source = "let x = 1\nprint x +\n";
    let error = parse(source).unwrap_err();

    let rendered = error.render(source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "SyntaxError: expected an expression, found end of input");
    assert_eq!(lines[1], "-> input:3:1");
}

#[test]
fn test_render_with_caret() {
    let source = "print 1 ) ";
    let error = parse(source).unwrap_err();

    let rendered = error.render(source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[1], "-> input:1:9");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "1 | print 1 ) ");
    assert_eq!(lines[4], "  | --------^");
}

#[test]
fn test_render_unrecognised_character() {
    let source = "let x = 1\nx = 2 # 3";
    let error = parse(source).unwrap_err();

    let rendered = error.render(source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "SyntaxError: expected a statement, found unrecognised character `#`"
    );
    assert_eq!(lines[1], "-> input:2:7");
    assert_eq!(lines[4], "  | ------^");
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    let error = parse("x = ").unwrap_err();
    assert_error(&error);
}
