use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_SPAN, MK_TOKEN};

use super::tokens::{Lexeme, SkipClass, SkippedChar, SkippedSpan, Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Token rules in priority order. The first rule matching at the current
    /// position wins, so keywords sit before identifiers and two character
    /// operators before their one character prefixes. Word boundaries are
    /// ASCII only, and `and`/`or` need none.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::String) },
        RegexPattern { regex: Regex::new("^--[^\r\n]*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comment) },
        RegexPattern { regex: Regex::new("^-?[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Number) },
        RegexPattern { regex: Regex::new("^(==|<=|>=|!=|=|\\(|\\)|,|and|or)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator) },
        RegexPattern { regex: Regex::new("^(for|if|elseif|else|end|do|then)(?-u:\\b)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Keyword) },
        RegexPattern { regex: Regex::new("^[a-z][a-z0-9_]*(?-u:\\b)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Identifier) },
    ];
}

pub struct Lexer {
    lexemes: Vec<Lexeme>,
    pending: Vec<SkippedChar>,
    pending_start: usize,
    source: String,
    pub(crate) pos: usize,
    pub(crate) file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            lexemes: vec![],
            pending: vec![],
            pending_start: 0,
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Emits a token, closing off any skipped run in front of it.
    pub fn push(&mut self, token: Token) {
        self.flush_skipped();
        self.lexemes.push(Lexeme::Token(token));
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Moves one character from the input into the pending skipped run.
    fn skip_char(&mut self) {
        let Some(ch) = self.remainder().chars().next() else {
            return;
        };

        if self.pending.is_empty() {
            self.pending_start = self.pos;
        }
        self.pending.push(SkippedChar { class: SkipClass::of(ch), ch });
        self.advance_n(ch.len_utf8());
    }

    fn flush_skipped(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let chars = std::mem::take(&mut self.pending);
        let span = MK_SPAN!(self, self.pending_start, self.pos);
        self.lexemes.push(Lexeme::Skipped(SkippedSpan { chars, span }));
    }
}

/// Splits `source` into tokens and skipped runs.
///
/// Never fails: characters no rule accepts are kept as skipped spans, so the
/// concatenated text of the result is always exactly `source`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Lexeme> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            let found = pattern
                .regex
                .find(lex.remainder())
                .map(|m| m.as_str().to_string());

            if let Some(text) = found {
                tracing::trace!(rule = pattern.regex.as_str(), text = %text, "matched token rule");
                (pattern.handler)(&mut lex, &text);
                matched = true;
                break;
            }
        }

        if !matched {
            lex.skip_char();
        }
    }

    lex.flush_skipped();

    tracing::debug!(file = %lex.file, lexemes = lex.lexemes.len(), "tokenized source");
    lex.lexemes
}

/// The grammar-visible tokens of a lexeme stream, dropping skipped spans and
/// comments.
pub fn significant_tokens(lexemes: &[Lexeme]) -> Vec<&Token> {
    lexemes.iter().filter_map(Lexeme::as_grammar_token).collect()
}
