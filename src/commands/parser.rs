//! Line parser.

use crate::error::{CommandError, CommandResult};

/// Upper bound on tokens per line: the command plus three arguments.
pub const MAX_TOKENS: usize = 4;

/// A line split into its command token and argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lower-cased command token
    pub command: String,

    /// Up to three argument tokens; the last one keeps any inner whitespace
    pub args: Vec<String>,
}

/// Split a raw line into a command and its arguments.
///
/// The line is trimmed and split on whitespace at most `MAX_TOKENS - 1` times,
/// so `"add Bob 1111111111 2222222222 3333333333"` yields the arguments
/// `["Bob", "1111111111", "2222222222 3333333333"]`.
///
/// # Errors
///
/// Returns `CommandError::EmptyInput` when the line is blank.
pub fn parse_input(line: &str) -> CommandResult<ParsedInput> {
    let mut tokens = Vec::with_capacity(MAX_TOKENS);
    let mut rest = line.trim();

    while !rest.is_empty() {
        if tokens.len() == MAX_TOKENS - 1 {
            tokens.push(rest.to_string());
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                tokens.push(rest[..end].to_string());
                rest = rest[end..].trim_start();
            }
            None => {
                tokens.push(rest.to_string());
                break;
            }
        }
    }

    let mut tokens = tokens.into_iter();
    let command = tokens.next().ok_or(CommandError::EmptyInput)?.to_lowercase();

    Ok(ParsedInput {
        command,
        args: tokens.collect(),
    })
}
