use std::fmt::Write;

use crate::{
    ast::ast::{Child, Node},
    lexer::tokens::{Lexeme, SkippedSpan, Token},
};

const INDENT: &str = "  ";

/// One line per lexeme: `Kind "text"` for tokens, the character classes for
/// skipped spans.
pub fn lexemes(lexemes: &[Lexeme]) -> String {
    let mut out = String::new();

    for lexeme in lexemes {
        match lexeme {
            Lexeme::Token(token) => render_token(&mut out, token),
            Lexeme::Skipped(skipped) => render_skipped(&mut out, skipped),
        }
        out.push('\n');
    }

    out
}

/// Indented outline of `root`.
///
/// Skipped spans and comments are left out unless `include_trivia` is set.
pub fn tree(root: &Node, include_trivia: bool) -> String {
    let mut out = String::new();
    render_node(&mut out, root, 0, include_trivia);
    out
}

fn render_node(out: &mut String, node: &Node, depth: usize, include_trivia: bool) {
    let _ = writeln!(out, "{}{}", INDENT.repeat(depth), node.kind);

    for child in &node.children {
        if child.is_trivia() && !include_trivia {
            continue;
        }

        match child {
            Child::Node(inner) => render_node(out, inner, depth + 1, include_trivia),
            Child::Token(token) => {
                out.push_str(&INDENT.repeat(depth + 1));
                render_token(out, token);
                out.push('\n');
            }
            Child::Skipped(skipped) => {
                out.push_str(&INDENT.repeat(depth + 1));
                render_skipped(out, skipped);
                out.push('\n');
            }
            Child::Error(error) => {
                let _ = writeln!(out, "{}Error {}", INDENT.repeat(depth + 1), error);
            }
        }
    }
}

fn render_token(out: &mut String, token: &Token) {
    let _ = write!(out, "{} {:?}", token.kind, token.value);
}

fn render_skipped(out: &mut String, skipped: &SkippedSpan) {
    out.push_str("Skipped");
    for ch in &skipped.chars {
        let _ = write!(out, " {}", ch.class);
    }
}
