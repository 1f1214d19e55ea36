#![allow(clippy::module_inception)]

use std::{rc::Rc, sync::Once};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;
pub mod source;
pub mod symbols;

extern crate regex;

/// A byte offset into a source file, together with the file's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

static TRACING_INIT: Once = Once::new();

/// Installs the stderr log subscriber. Safe to call more than once.
///
/// Filtering follows `RUST_LOG` (e.g. `RUST_LOG=clexer=trace`) and falls
/// back to `warn` when it is unset or invalid.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line without its terminator and the
/// byte offset of `position` inside that line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let text = line.trim_end_matches(['\n', '\r']).to_string();
            return Some((index + 1, text, position - start));
        }

        start = end;
    }

    None
}

/// Renders `error` as a caret diagnostic.
///
/// ```text
/// Error: InvalidCharacter (...)
/// -> input.txt
///   |
/// 1 | int x = 3.5;
///   | ---------^
/// ```
///
/// The source excerpt is only shown for scan errors when `source` is given.
pub fn render_error(error: &Error, source: Option<&str>) -> String {
    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let excerpt = source
        .filter(|_| error.is_lexical())
        .and_then(|source| get_line_at_position(source, position.0 as usize));

    let Some((line, line_text, line_pos)) = excerpt else {
        out.push_str(&format!("   {}\n", error));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text
        .get(..line_pos)
        .unwrap_or(line_text.as_str())
        .chars()
        .count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    let removed = string[..string.len() - trimmed.len()].chars().count();

    (String::from(trimmed), removed)
}
