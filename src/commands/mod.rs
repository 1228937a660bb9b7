//! Command-line input handling.
//!
//! Turns a raw line into a [`Command`] plus its argument tokens.

pub mod parser;

pub use parser::{parse_input, ParsedInput, MAX_TOKENS};

/// A recognized first token of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Remove,
    Exit,
}

impl Command {
    /// Map a lower-cased command token to a command, if it is one we know.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "hello" => Some(Self::Hello),
            "add" => Some(Self::Add),
            "change" => Some(Self::Change),
            "phone" => Some(Self::Phone),
            "all" => Some(Self::All),
            "remove" => Some(Self::Remove),
            "exit" | "close" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Canonical token for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::Remove => "remove",
            Self::Exit => "exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(Command::from_token("add"), Some(Command::Add));
        assert_eq!(Command::from_token("close"), Some(Command::Exit));
        assert_eq!(Command::from_token("exit"), Some(Command::Exit));
        assert_eq!(Command::from_token("delete"), None);
        // Tokens are lower-cased by the parser before lookup
        assert_eq!(Command::from_token("ADD"), None);
    }
}
