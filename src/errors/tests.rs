//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position() -> Position {
    Position::new(3, 7, Rc::new("test.src".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        position(),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedComment, position());

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
    assert_eq!(error.get_position().file.as_str(), "test.src");
}

#[test]
fn test_error_names() {
    let cases = [
        (
            ErrorImpl::UndelimitedLexeme {
                lexeme: "12".to_string(),
                found: '#',
            },
            "UndelimitedLexeme",
        ),
        (
            ErrorImpl::MalformedExponent {
                lexeme: "1e".to_string(),
            },
            "MalformedExponent",
        ),
        (ErrorImpl::InvalidEscape { escape: 'q' }, "InvalidEscape"),
        (ErrorImpl::CharacterLiteral, "CharacterLiteral"),
        (
            ErrorImpl::NumberParseError {
                token: "99999999999999999999".to_string(),
            },
            "NumberParseError",
        ),
        (ErrorImpl::LexemeTooLong { limit: 8 }, "LexemeTooLong"),
        (
            ErrorImpl::UnterminatedString {
                content: "abc".to_string(),
            },
            "UnterminatedString",
        ),
        (ErrorImpl::UnterminatedComment, "UnterminatedComment"),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, position()).get_error_name(), name);
    }
}

#[test]
fn test_end_of_input_errors() {
    let unterminated_string = Error::new(
        ErrorImpl::UnterminatedString {
            content: String::new(),
        },
        position(),
    );
    let unterminated_comment = Error::new(ErrorImpl::UnterminatedComment, position());
    let bad_escape = Error::new(ErrorImpl::InvalidEscape { escape: 'x' }, position());

    assert!(unterminated_string.is_end_of_input());
    assert!(unterminated_comment.is_end_of_input());
    assert!(!bad_escape.is_end_of_input());
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        position(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UndelimitedLexeme {
            lexeme: "abc".to_string(),
            found: '$',
        },
        position(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`abc`")),
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
fn test_error_display() {
    let error = Error::new(ErrorImpl::InvalidEscape { escape: 'q' }, position());

    assert_eq!(
        error.to_string(),
        "invalid escape sequence \\q at test.src:3:7"
    );
}

#[test]
fn test_error_source() {
    let error = Error::new(ErrorImpl::CharacterLiteral, position());
    let source = std::error::Error::source(&error).unwrap();

    assert_eq!(source.to_string(), "character constants are not supported");
}
