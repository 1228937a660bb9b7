//! Error types for the address book bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Reply for a lookup miss.
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

/// Reply for a missing or invalid name/phone argument.
pub const GIVE_NAME_AND_PHONE: &str = "Give me name and phone.";

/// Reply for a line with no recognizable command.
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Reply for a command given fewer arguments than it needs.
pub const INVALID_FORMAT: &str =
    "Invalid command format. Use: add [name] [phone], change [name] [new_phone], phone [name]";

/// Classified failures of a single command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The input line held no tokens
    #[error("Empty input")]
    EmptyInput,

    /// No record is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// A required argument was present but empty
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// Fewer argument tokens than the command needs
    #[error("{command} expects at least {expected} argument(s), got {got}")]
    TooFewArguments {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// A name or phone failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CommandError {
    /// The fixed text shown to the user for this failure.
    ///
    /// Every command funnels its failures through here, so the same kind of
    /// failure always reads the same regardless of which command raised it.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ContactNotFound(_) => CONTACT_NOT_FOUND,
            Self::MissingArgument(_) | Self::Validation(_) => GIVE_NAME_AND_PHONE,
            Self::TooFewArguments { .. } => INVALID_FORMAT,
            Self::EmptyInput => INVALID_COMMAND,
        }
    }

    /// Short label used for logging and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::ContactNotFound(_) => "not_found",
            Self::MissingArgument(_) => "missing_argument",
            Self::TooFewArguments { .. } => "too_few_arguments",
            Self::Validation(_) => "validation",
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
