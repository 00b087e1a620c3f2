//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the tokenizer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets of the current file
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits the whole match as one token
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span covering `$start..$end` in the lexer's file.
#[macro_export]
macro_rules! MK_SPAN {
    ($lexer:expr, $start:expr, $end:expr) => {
        Span {
            start: Position($start as u32, Rc::clone(&$lexer.file)),
            end: Position($end as u32, Rc::clone(&$lexer.file)),
        }
    };
}

/// Creates a lexer handler for rules whose entire match becomes one token.
///
/// Generates a handler function that flushes any pending skipped characters,
/// pushes a token of the given kind holding the matched text and advances
/// the lexer past it.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[0-9]+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Number),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            let start = lexer.pos;
            let end = start + matched.len();
            lexer.push(MK_TOKEN!($kind, String::from(matched), MK_SPAN!(lexer, start, end)));
            lexer.advance_n(matched.len());
        }
    };
}
