#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod interner;
pub mod lexer;
pub mod macros;

pub use interner::{table::LiteralTable, tables::LiteralTables};
pub use lexer::{
    lexer::{tokenize, tokenize_with, Lexed, LexerOptions, Tokenizer, DEFAULT_MAX_LEXEME_LENGTH},
    source::{CharSource, StringSource},
    tokens::{KeywordKind, SymbolKind, Token, TokenKind, FIRST_TYPE_KEYWORD, UNKNOWN_SYMBOL},
};

/// A line/column location inside a named source.
///
/// Lines start at 1. Columns count characters read on the current line, so
/// the first character of a line is at column 1 and column 0 means "before
/// anything was read".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `source`, without its newline.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source.split('\n').nth(index)
}

/// Prints `error` with a caret under the offending column.
///
/// ```text
/// Error: UndelimitedLexeme (`12` must be followed by ...)
/// -> main.src:3:7
///   |
/// 3 | a = 12#;
///   | ------^
/// ```
pub fn display_error(error: &Error, source: &str) {
    print!("{}", render_error(error, source));
}

/// Builds the diagnostic printed by [`display_error`].
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", position));

    let Some(line_text) = get_line(source, position.line) else {
        return rendered;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace);
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use super::{get_line, remove_starting_whitespace, render_error, tokenize, Position};
    use std::rc::Rc;

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";
        assert_eq!(get_line(source, 1), Some("Hello, world!"));
        assert_eq!(get_line(source, 3), Some(""));
        assert_eq!(get_line(source, 4), Some("Testing { }"));
        assert_eq!(get_line(source, 0), None);
        assert_eq!(get_line("one line", 2), None);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        assert_eq!(remove_starting_whitespace("  \tx = 1;"), ("x = 1;", 3));
        assert_eq!(remove_starting_whitespace("x"), ("x", 0));
    }

    #[test]
    fn test_position_display() {
        let position = Position::new(3, 7, Rc::new("main.src".to_string()));
        assert_eq!(position.to_string(), "main.src:3:7");
    }

    #[test]
    fn test_render_error_points_at_offending_line() {
        let source = "integer x = 1e\n;\n";
        let error = tokenize(source.to_string(), None).unwrap_err();

        let rendered = render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], "-> shell:1:15");
        assert_eq!(lines[3], "1 | integer x = 1e");
        assert_eq!(lines[4], format!("  | {}^", "-".repeat(14)));
    }

    #[test]
    fn test_render_error_strips_indentation() {
        let source = "a\n\t  12#\n";
        let error = tokenize(source.to_string(), None).unwrap_err();

        let rendered = render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "2 | 12#");
        assert_eq!(lines[4], "  | --^");
    }
}
