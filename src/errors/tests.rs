//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, Span};
use std::rc::Rc;

fn token_at(value: &str, offset: u32) -> Token {
    let file = Rc::new("test.lua".to_string());
    Token {
        kind: TokenKind::Keyword,
        value: value.to_string(),
        span: Span {
            start: Position(offset, Rc::clone(&file)),
            end: Position(offset + value.len() as u32, file),
        },
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnknownToken {
            found: "then".to_string(),
        },
        Some(token_at("then", 10)),
    );

    assert_eq!(error.get_error_name(), "UnknownToken");
    assert_eq!(error.get_token().unwrap().value, "then");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "identifier".to_string(),
            found: "do".to_string(),
        },
        Some(token_at("do", 42)),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.lua");
}

#[test]
fn test_eof_error() {
    let error = Error::at_eof(Position(7, Rc::new("test.lua".to_string())));

    assert_eq!(error.get_error_name(), "UnexpectedEof");
    assert!(error.get_token().is_none());
    assert_eq!(error.get_position().0, 7);
    assert_eq!(error.message(), "unexpected end of file");
    assert_eq!(error.to_string(), "unexpected end of file");
}

#[test]
fn test_error_messages() {
    let error = Error::new(
        ErrorImpl::UnexpectedValue {
            expected: ")".to_string(),
            found: ",".to_string(),
        },
        Some(token_at(",", 3)),
    );

    assert_eq!(error.message(), "unexpected value - expected \")\", found \",\"");
    assert_eq!(error.to_string(), "unexpected value - expected \")\", found \",\" at byte 3");
}

#[test]
fn test_error_tips() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "Keyword `then`".to_string(),
            found: "do".to_string(),
        },
        Some(token_at("do", 0)),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "expected Keyword `then`, found `do`"),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}
