//! Command executor.
//!
//! Checks argument arity, dispatches a parsed line to the contact service, and
//! turns every classified failure into its fixed user-facing reply.

use super::contact_service::{ContactService, ContactServiceImpl};
use crate::commands::{Command, ParsedInput};
use crate::error::{CommandError, CommandResult, INVALID_COMMAND};
use crate::metrics::{CommandTimer, SessionMetrics};
use tracing::{debug, warn};

/// Reply to `hello`.
pub const GREETING: &str = "How can I help you?";

/// Reply to `exit` and `close`.
pub const FAREWELL: &str = "Good bye!";

/// What the driving loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and read the next line.
    Reply(String),

    /// Print the reply and stop.
    Exit(String),
}

impl Outcome {
    /// The text to print.
    pub fn message(&self) -> &str {
        match self {
            Self::Reply(msg) | Self::Exit(msg) => msg,
        }
    }

    /// Whether the session ends after this outcome.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// Runs parsed lines against a [`ContactService`].
#[derive(Debug, Default)]
pub struct CommandExecutor<S = ContactServiceImpl> {
    service: S,
    metrics: SessionMetrics,
}

impl CommandExecutor<ContactServiceImpl> {
    /// Executor over an empty in-memory address book.
    pub fn new() -> Self {
        Self::with_service(ContactServiceImpl::new())
    }
}

impl<S: ContactService> CommandExecutor<S> {
    pub fn with_service(service: S) -> Self {
        Self {
            service,
            metrics: SessionMetrics::new(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Execute one parsed line.
    ///
    /// Unknown commands are rejected with "Invalid command." before any
    /// execution happens. Everything else goes through [`Self::dispatch`] and
    /// has its failures translated by `CommandError::user_message`.
    pub fn execute(&mut self, input: &ParsedInput) -> Outcome {
        let Some(command) = Command::from_token(&input.command) else {
            debug!(token = %input.command, "Unknown command");
            self.metrics.record_unknown();
            return Outcome::Reply(INVALID_COMMAND.to_string());
        };

        let timer = CommandTimer::start();
        let result = self.dispatch(command, &input.args);

        match result {
            Ok(outcome) => {
                debug!(command = command.as_str(), "Command completed");
                timer.complete(&mut self.metrics);
                outcome
            }
            Err(e) => {
                warn!(
                    command = command.as_str(),
                    kind = e.kind(),
                    error = %e,
                    "Command failed"
                );
                timer.complete_with_error(&mut self.metrics, e.kind());
                Outcome::Reply(e.user_message().to_string())
            }
        }
    }

    /// Run a recognized command, returning its outcome or classified failure.
    pub fn dispatch(&mut self, command: Command, args: &[String]) -> CommandResult<Outcome> {
        let reply = match command {
            Command::Hello => GREETING.to_string(),
            Command::Exit => return Ok(Outcome::Exit(FAREWELL.to_string())),
            Command::All => self.service.show_all()?,
            Command::Add => {
                require_args(command, args, 2)?;
                // The parser leaves several trailing phones in one token
                let phones: Vec<&str> = args[1..]
                    .iter()
                    .flat_map(|arg| arg.split_whitespace())
                    .collect();
                self.service.add_contact(&args[0], &phones)?
            }
            Command::Change => {
                require_args(command, args, 3)?;
                self.service.change_contact(&args[0], &args[1], &args[2])?
            }
            Command::Phone => {
                require_args(command, args, 1)?;
                self.service.show_phone(&args[0])?
            }
            Command::Remove => {
                require_args(command, args, 1)?;
                self.service.remove_contact(&args[0])?
            }
        };

        Ok(Outcome::Reply(reply))
    }
}

fn require_args(command: Command, args: &[String], expected: usize) -> CommandResult<()> {
    if args.len() < expected {
        return Err(CommandError::TooFewArguments {
            command: command.as_str(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}
