use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    token: Option<Token>,
    position: Position,
}

impl Error {
    /// An error raised at `token`.
    pub fn new(error_impl: ErrorImpl, token: Option<Token>) -> Self {
        let position = token
            .as_ref()
            .map(|token| token.span.start.clone())
            .unwrap_or_else(Position::null);

        Error {
            internal_error: error_impl,
            token,
            position,
        }
    }

    /// An error raised after the last token, at `position`.
    pub fn at_eof(position: Position) -> Self {
        Error {
            internal_error: ErrorImpl::UnexpectedEof,
            token: None,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// The offending token, `None` when the stream ran out.
    pub fn get_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedValue { .. } => "UnexpectedValue",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected {}, found `{}`", expected, found))
            }
            ErrorImpl::UnexpectedValue { expected, found } => {
                ErrorTip::Suggestion(format!("expected `{}`, found `{}`", expected, found))
            }
            ErrorImpl::UnexpectedEof => ErrorTip::Suggestion(String::from(
                "the file ended inside a statement, is an `end` missing?",
            )),
            ErrorImpl::UnknownToken { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a statement, expected `for`, `if` or a function call",
                found
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.token {
            Some(token) => write!(f, "{} at byte {}", self.internal_error, token.span.start.0),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token - expected {expected}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("unexpected value - expected {expected:?}, found {found:?}")]
    UnexpectedValue { expected: String, found: String },
    #[error("unexpected end of file")]
    UnexpectedEof,
    #[error("unknown token - {found:?}")]
    UnknownToken { found: String },
}
