#![allow(clippy::module_inception)]

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::tokens::{Token, TokenKind},
};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Name shown for input typed at the prompt.
pub const SHELL_NAME: &str = "shell";

/// Finds the line holding byte offset `position` in `content`.
///
/// Returns the 1-based line number, the line itself (terminator included) and
/// the character column of `position` within that line.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = line.get(..position - start)?.chars().count();
            return Some((index + 1, line.to_string(), line_pos));
        }

        start = end;
    }

    None
}

/// Describes a `BadToken` as an error for the shell to render.
///
/// A bad newline or a bad opening quote is what the lexer leaves behind for
/// an unterminated string; anything else is an unrecognised character.
pub fn bad_token_error(token: &Token) -> Option<Error> {
    if token.kind != TokenKind::BadToken {
        return None;
    }

    let error = match token.text.as_str() {
        "\n" | "\r" | "\"" => ErrorImpl::UnterminatedString,
        text => ErrorImpl::UnrecognisedToken {
            token: text.to_string(),
        },
    };

    Some(Error::new(error, token.position))
}

/// Renders `error` against the source it was raised for.
///
/// ```text
/// Error: NumberParseError (The number `99999999999` isn't a valid i32, ...)
/// -> shell
///   |
/// 1 | let x = 99999999999
///   | --------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position())
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}
