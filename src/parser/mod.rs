//! Parser module for building the syntax tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! lexeme stream into a tree of [`Node`](crate::ast::ast::Node)s. It handles:
//!
//! - Blocks, dispatching on the next token to a statement production
//! - `for` loops and `if`/`elseif`/`else` chains
//! - Single argument function calls
//! - Expressions: literals, identifiers, parentheses and binary operators
//!
//! Each grammar production is one function that builds one node. Failures
//! are returned as [`Error`](crate::errors::errors::Error) and abort the
//! whole parse.

pub mod expr;
pub mod parser;
pub mod stmt;
