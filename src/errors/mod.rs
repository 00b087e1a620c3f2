//! Error types and error handling for the parser.
//!
//! This module defines the errors produced while parsing a token stream.
//! It includes:
//!
//! - Error structures carrying the offending token and its position
//! - The closed set of parser failure kinds
//! - Helpful error messages and suggestions
//!
//! Lexing has no error type: it degrades unmatched input to skipped spans.

pub mod errors;

#[cfg(test)]
mod tests;
