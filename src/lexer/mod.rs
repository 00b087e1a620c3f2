//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of lexemes for parsing. It handles:
//!
//! - Tokenization of source code using an ordered list of regex rules
//! - Recognition of keywords, identifiers, literals, operators and comments
//! - Grouping of unrecognised characters and whitespace into skipped spans
//! - Byte offset tracking for error reporting

pub mod lexer;
pub mod tokens;
