use std::fmt::Display;

use crate::{
    errors::errors::Error,
    lexer::tokens::{Lexeme, SkippedSpan, Token, TokenKind},
};

/// Node Types
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum NodeKind {
    Body,
    Function,
    Lhs,
    Expr,
    For,
    If,
    ElseIf,
    Else,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A leaf or subtree hanging off a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    Token(Token),
    Skipped(SkippedSpan),
    /// Marks where parsing stopped in a partial tree.
    Error(Error),
}

impl From<Lexeme> for Child {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Token(token) => Child::Token(token),
            Lexeme::Skipped(skipped) => Child::Skipped(skipped),
        }
    }
}

impl Child {
    /// Whitespace, unmatched characters and comments.
    pub fn is_trivia(&self) -> bool {
        match self {
            Child::Skipped(_) => true,
            Child::Token(token) => token.kind == TokenKind::Comment,
            _ => false,
        }
    }
}

/// A syntax tree node.
///
/// Children are kept in source order, tokens included, so the leaves of a
/// successfully parsed tree spell out the original source.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Child>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node { kind, children: vec![] }
    }

    pub fn push(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    /// Direct child nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|child| match child {
            Child::Node(node) => Some(node),
            _ => None,
        })
    }

    /// Direct token children, comments excluded.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.children.iter().filter_map(|child| match child {
            Child::Token(token) if token.kind != TokenKind::Comment => Some(token),
            _ => None,
        })
    }

    /// Every non-comment token in the subtree, depth first.
    pub fn all_tokens(&self) -> Vec<&Token> {
        let mut out = vec![];
        self.collect_tokens(&mut out);
        out
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        for child in &self.children {
            match child {
                Child::Node(node) => node.collect_tokens(out),
                Child::Token(token) if token.kind != TokenKind::Comment => out.push(token),
                _ => {}
            }
        }
    }

    /// The first direct child node of `kind`.
    pub fn child(&self, kind: NodeKind) -> Option<&Node> {
        self.nodes().find(|node| node.kind == kind)
    }

    /// The error leaf left in a partial tree, searched depth first.
    pub fn find_error(&self) -> Option<&Error> {
        self.children.iter().find_map(|child| match child {
            Child::Error(error) => Some(error),
            Child::Node(node) => node.find_error(),
            _ => None,
        })
    }

    /// Concatenates every token and skipped span in the subtree.
    pub fn source_text(&self) -> String {
        let mut out = String::new();
        self.write_source(&mut out);
        out
    }

    fn write_source(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Node(node) => node.write_source(out),
                Child::Token(token) => out.push_str(&token.value),
                Child::Skipped(skipped) => out.push_str(&skipped.text()),
                Child::Error(_) => {}
            }
        }
    }

    /// Removes and returns the last child if it is a node.
    pub(crate) fn pop_node(&mut self) -> Option<Node> {
        match self.children.last() {
            Some(Child::Node(_)) => match self.children.pop() {
                Some(Child::Node(node)) => Some(node),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<Token> for Child {
    fn from(token: Token) -> Self {
        Child::Token(token)
    }
}

impl From<Error> for Child {
    fn from(error: Error) -> Self {
        Child::Error(error)
    }
}
