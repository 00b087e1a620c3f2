//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct, the token consumption
//! primitives every production is built from, and the `parse` entry points.
//!
//! The parser walks an immutable slice of lexemes with a cursor. Skipped
//! spans and comments are trivia: `peek_token` looks past them without
//! moving, and `next_token` hangs them on the node being built so the tree
//! keeps every character of the source.

use std::rc::Rc;

use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Lexeme, Token, TokenKind},
    Position,
};

use super::stmt::parse_block_body;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// The lexemes to parse, trivia included
    lexemes: &'a [Lexeme],
    /// Index of the next unconsumed lexeme
    pos: usize,
    /// Where an end of file error points
    eof: Position,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser over `lexemes`.
    pub fn new(lexemes: &'a [Lexeme]) -> Self {
        let eof = lexemes
            .last()
            .map(|lexeme| lexeme.get_span().end.clone())
            .unwrap_or_else(|| Position(0, Rc::new(String::from("shell"))));

        Parser { lexemes, pos: 0, eof }
    }

    /// Returns the next grammar token without consuming anything.
    pub fn peek_token(&self) -> Option<&'a Token> {
        let lexemes = self.lexemes;
        lexemes[self.pos..].iter().find_map(Lexeme::as_grammar_token)
    }

    /// Consumes up to and including the next grammar token.
    ///
    /// Trivia passed on the way is appended to `node`. The token itself is
    /// returned, not appended.
    pub fn next_token(&mut self, node: &mut Node) -> Result<Token, Error> {
        let lexemes = self.lexemes;

        while let Some(lexeme) = lexemes.get(self.pos) {
            self.pos += 1;

            if let Some(token) = lexeme.as_grammar_token() {
                tracing::trace!(token = %token, "consumed token");
                return Ok(token.clone());
            }

            node.push(lexeme.clone());
        }

        self.fail(node, Error::at_eof(self.eof.clone()))
    }

    /// Consumes the next token, requiring it to be `kind` spelled `value`,
    /// and appends it to `node`.
    pub fn expect(&mut self, node: &mut Node, kind: TokenKind, value: &str) -> Result<Token, Error> {
        let token = self.next_token(node)?;

        if token.kind != kind {
            let error = ErrorImpl::UnexpectedToken {
                expected: format!("{} `{}`", kind, value),
                found: token.value.clone(),
            };
            return self.fail(node, Error::new(error, Some(token)));
        }

        if token.value != value {
            let error = ErrorImpl::UnexpectedValue {
                expected: String::from(value),
                found: token.value.clone(),
            };
            return self.fail(node, Error::new(error, Some(token)));
        }

        node.push(token.clone());
        Ok(token)
    }

    /// Leaves `error` in the tree where it happened and returns it.
    pub fn fail<T>(&self, node: &mut Node, error: Error) -> Result<T, Error> {
        tracing::debug!(error = %error, "parse failed");
        node.push(error.clone());
        Err(error)
    }

    /// Builds a `kind` node under `parent` with `build`.
    ///
    /// The node is attached whether or not `build` succeeds, so a failed
    /// parse still leaves everything consumed so far in the tree.
    pub fn within<F>(&mut self, parent: &mut Node, kind: NodeKind, build: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Self, &mut Node) -> Result<(), Error>,
    {
        tracing::trace!(kind = %kind, "entering production");

        let mut node = Node::new(kind);
        let result = build(self, &mut node);
        parent.push(node);
        result
    }

    /// Consumes what is left after the top level block: trivia is attached to
    /// `root`, a leftover token is an error.
    fn finish(&mut self, root: &mut Node) -> Result<(), Error> {
        if let Some(token) = self.peek_token() {
            let error = ErrorImpl::UnexpectedToken {
                expected: String::from("end of file"),
                found: token.value.clone(),
            };
            return self.fail(root, Error::new(error, Some(token.clone())));
        }

        let lexemes = self.lexemes;
        while let Some(lexeme) = lexemes.get(self.pos) {
            root.push(lexeme.clone());
            self.pos += 1;
        }

        Ok(())
    }
}

/// Parses a lexeme stream into a tree rooted at a `Body` node.
///
/// # Returns
///
/// The root node, or the first error met. Use [`parse_partial`] to also get
/// the tree built before the error.
///
/// Recursion follows the nesting of the source, one call chain per nested
/// expression or block. A chain of some thousands of binary operators can
/// exhaust a default 8 MiB stack; run on a thread with a larger stack when
/// parsing untrusted input of that size.
pub fn parse(lexemes: &[Lexeme]) -> Result<Node, Error> {
    match parse_partial(lexemes) {
        (root, None) => Ok(root),
        (_, Some(error)) => Err(error),
    }
}

/// Parses a lexeme stream, returning the tree built so far alongside any
/// error.
///
/// On failure the tree stops where parsing stopped and the node being built
/// at that point holds the error as a [`Child::Error`](crate::ast::ast::Child)
/// leaf.
pub fn parse_partial(lexemes: &[Lexeme]) -> (Node, Option<Error>) {
    let mut parser = Parser::new(lexemes);
    let mut root = Node::new(NodeKind::Body);

    let result = parse_block_body(&mut parser, &mut root).and_then(|_| parser.finish(&mut root));

    tracing::debug!(lexemes = lexemes.len(), ok = result.is_ok(), "parsed lexemes");
    (root, result.err())
}
