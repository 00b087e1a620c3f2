#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod render;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte offset `position`.
///
/// Returns the 1-based line number, the line's text (terminator included) and
/// the offset within that line, or `None` if `position` lies past the source.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

/// Renders a diagnostic with the offending line and a caret under the token.
///
/// ```text
/// Error: UnexpectedValue (expected `)`, found `,`)
/// -> fizz.lua
///    |
/// 20 | print(1, 2)
///    | -------^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let position = error.get_position();
    out.push_str(&format!("-> {}\n", position.1));

    // Past the end of the source there is no line to point into.
    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_text
        .get(removed_whitespace..line_pos)
        .map_or(0, |prefix| prefix.chars().count())
        + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::lexer::tokenize,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 27).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position("abc", 3).is_none());
        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_format_error_points_at_token() {
        let source = "x = 1\n  print(2 3)\n";
        let lexemes = tokenize(source.to_string(), Some("demo.lua".to_string()));
        let three = lexemes
            .iter()
            .filter_map(|l| l.as_token())
            .find(|t| t.value == "3")
            .unwrap()
            .clone();

        let error = Error::new(
            ErrorImpl::UnexpectedValue { expected: ")".to_string(), found: "3".to_string() },
            Some(three),
        );
        let rendered = super::format_error(&error, source);

        assert_eq!(
            rendered,
            "Error: UnexpectedValue (expected `)`, found `3`)\n-> demo.lua\n  |\n2 | print(2 3)\n  | --------^\n"
        );
    }
}
