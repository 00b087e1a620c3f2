use std::rc::Rc;

use crate::{
    errors::errors::Error,
    lexer::tokens::{Lexeme, SkipClass, SkippedChar, SkippedSpan, Token, TokenKind},
    Position, Span,
};

use super::ast::{Child, Node, NodeKind};

fn span(start: u32, end: u32) -> Span {
    let file = Rc::new("test.lua".to_string());
    Span {
        start: Position(start, Rc::clone(&file)),
        end: Position(end, file),
    }
}

fn token(kind: TokenKind, value: &str) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: span(0, value.len() as u32),
    }
}

fn space() -> SkippedSpan {
    SkippedSpan {
        chars: vec![SkippedChar { class: SkipClass::Space, ch: ' ' }],
        span: span(0, 1),
    }
}

#[test]
fn test_source_text_walks_leaves_in_order() {
    let mut lhs = Node::new(NodeKind::Lhs);
    lhs.push(token(TokenKind::Identifier, "print"));

    let mut function = Node::new(NodeKind::Function);
    function.push(lhs);
    function.push(token(TokenKind::Operator, "("));
    function.push(Lexeme::Skipped(space()));
    function.push(token(TokenKind::Number, "1"));
    function.push(token(TokenKind::Operator, ")"));
    function.push(Error::at_eof(Position::null()));

    assert_eq!(function.source_text(), "print( 1)");
}

#[test]
fn test_tokens_skip_comments() {
    let mut body = Node::new(NodeKind::Body);
    body.push(token(TokenKind::Comment, "-- note"));
    body.push(token(TokenKind::Identifier, "x"));

    let direct: Vec<&str> = body.tokens().map(|t| t.value.as_str()).collect();
    assert_eq!(direct, vec!["x"]);
    assert_eq!(body.all_tokens().len(), 1);
    assert!(body.children[0].is_trivia());
    assert!(!body.children[1].is_trivia());
}

#[test]
fn test_pop_node_only_takes_nodes() {
    let mut expr = Node::new(NodeKind::Expr);
    expr.push(token(TokenKind::Number, "1"));
    assert!(expr.pop_node().is_none());
    assert_eq!(expr.children.len(), 1);

    expr.push(Node::new(NodeKind::Expr));
    assert_eq!(expr.pop_node().map(|n| n.kind), Some(NodeKind::Expr));
    assert_eq!(expr.children.len(), 1);
}

#[test]
fn test_find_error_searches_depth_first() {
    let mut inner = Node::new(NodeKind::Expr);
    inner.push(Error::at_eof(Position::null()));

    let mut root = Node::new(NodeKind::Body);
    root.push(Node::new(NodeKind::Function));
    root.push(inner);

    assert!(root.find_error().is_some());
    assert!(matches!(root.children[1], Child::Node(_)));
    assert!(Node::new(NodeKind::Body).find_error().is_none());
}
