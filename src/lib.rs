#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::Error;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its line break.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders a diagnostic together with the offending source line.
///
/// ```text
///   error: expected value at 20:12
///      |
///   20 | let a = 1 +;
///      | -----------^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let header = error.to_string();

    let Some(line_text) = get_line(source, position.line) else {
        return header;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    let mut rendered = String::new();
    rendered.push_str(&header);
    rendered.push('\n');
    rendered.push_str(&format!("{:>padding$}\n", "|"));
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (&string[start..], start)
}
