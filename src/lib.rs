#![allow(clippy::module_inception)]

use std::fmt::Display;

use serde::Serialize;

use crate::errors::errors::{Error, ErrorTip};

pub mod analysis;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod request;
pub mod server;
pub mod syntax_checker;
pub mod type_checker;

extern crate regex;

pub use analysis::analysis::{analyze, AnalysisResult};
pub use request::decode_source;

/// Source location of a token: 1-based line, column of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: i32,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` in `content`, newline included.
pub fn get_line_at_position(content: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    content.split_inclusive('\n').nth(index)
}


/// Renders a diagnostic the way the CLI prints it:
///
/// ```text
/// Error: message (tip)
/// -> file:20:9
///    |
/// 20 | let a = #;
///    | --------^
/// ```
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error, error.get_tip()));
    }

    let Some(position) = error.get_position() else {
        out.push_str(&format!("-> {}\n", file));
        return out;
    };

    out.push_str(&format!("-> {}:{}\n", file, position));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // Columns count bytes; the underline follows the characters of the shown
    // line so it stays aligned after multibyte characters and inner tabs.
    let byte_offset = ((position.column.max(1) - 1) as usize).saturating_sub(removed_whitespace);
    let underline: String = line_text_removed
        .trim_end()
        .char_indices()
        .take_while(|(index, _)| *index < byte_offset)
        .map(|(_, c)| if c == '\t' { '\t' } else { '-' })
        .collect();

    out.push_str(&format!("{:>padding$} {}^\n", "|", underline));
    out
}

/// Renders the `--format report` view: the token table, the per-kind counts
/// and each phase's verdict followed by its rendered diagnostics.
pub fn render_report(result: &AnalysisResult, source: &str, file: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("Tokens ({})\n", result.tokens.len()));
    for token in &result.tokens {
        out.push_str(&format!(
            "  {:>4}:{:<4} {:<16} {}\n",
            token.position.line,
            token.position.column,
            token.kind.as_str(),
            token.value.escape_debug()
        ));
    }

    out.push_str("\nToken statistics\n");
    for (kind, count) in &result.token_stats {
        out.push_str(&format!("  {:<16} {}\n", kind.as_str(), count));
    }

    for (phase, valid, errors) in [
        ("Syntax", result.syntax_valid, &result.syntax_errors),
        ("Semantics", result.semantic_valid, &result.semantic_errors),
    ] {
        if valid {
            out.push_str(&format!("\n{}: valid\n", phase));
        } else {
            out.push_str(&format!("\n{}: {} error(s)\n", phase, errors.len()));
            for error in errors {
                out.push_str(&display_error(error, source, file));
            }
        }
    }

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
