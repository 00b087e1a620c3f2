use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref SKIP_LOOKUP: HashMap<char, SkipClass> = {
        let mut map = HashMap::new();
        map.insert('\r', SkipClass::CarriageReturn);
        map.insert('\n', SkipClass::LineFeed);
        map.insert('\t', SkipClass::Tab);
        map.insert(' ', SkipClass::Space);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    String,
    Comment,
    Number,
    Operator,
    Keyword,
    Identifier,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}`", self.kind, self.value)
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }

    /// True for a keyword token whose text is one of `words`.
    pub fn is_keyword(&self, words: &[&str]) -> bool {
        self.kind == TokenKind::Keyword && words.contains(&self.value.as_str())
    }

    /// Operators that can join two operands. Parentheses and commas are
    /// operator tokens too but only ever delimit.
    pub fn is_binary_operator(&self) -> bool {
        self.kind == TokenKind::Operator && !matches!(self.value.as_str(), "(" | ")" | ",")
    }
}

/// Display classification of a character the lexer did not turn into a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SkipClass {
    CarriageReturn,
    LineFeed,
    Tab,
    Space,
    Other,
}

impl SkipClass {
    pub fn of(ch: char) -> SkipClass {
        *SKIP_LOOKUP.get(&ch).unwrap_or(&SkipClass::Other)
    }
}

impl Display for SkipClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SkipClass::CarriageReturn => "carriage-return",
            SkipClass::LineFeed => "line-feed",
            SkipClass::Tab => "tab",
            SkipClass::Space => "space",
            SkipClass::Other => "other",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedChar {
    pub class: SkipClass,
    pub ch: char,
}

/// A run of consecutive characters that matched no token rule.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedSpan {
    pub chars: Vec<SkippedChar>,
    pub span: Span,
}

impl SkippedSpan {
    pub fn text(&self) -> String {
        self.chars.iter().map(|c| c.ch).collect()
    }

    /// Whether every character is plain whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.chars.iter().all(|c| c.class != SkipClass::Other)
    }
}

/// One item of the lexer output.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    Token(Token),
    Skipped(SkippedSpan),
}

impl Lexeme {
    pub fn text(&self) -> String {
        match self {
            Lexeme::Token(token) => token.value.clone(),
            Lexeme::Skipped(skipped) => skipped.text(),
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Lexeme::Token(token) => &token.span,
            Lexeme::Skipped(skipped) => &skipped.span,
        }
    }

    /// The token this lexeme carries if the grammar can consume it. Comments
    /// are tokens but never grammar-visible.
    pub fn as_grammar_token(&self) -> Option<&Token> {
        match self {
            Lexeme::Token(token) if token.kind != TokenKind::Comment => Some(token),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Lexeme::Token(token) => Some(token),
            Lexeme::Skipped(_) => None,
        }
    }
}
