//! Interactive session driver.
//!
//! Reads one line at a time, runs it through the parser and executor, and
//! writes the reply. Generic over the reader and writer so sessions can be
//! driven from stdin/stdout or from in-memory buffers.

use crate::commands::parse_input;
use crate::config::Config;
use crate::services::{CommandExecutor, ContactServiceImpl, Outcome, FAREWELL};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// The address book bot: a prompt plus a command executor.
#[derive(Debug)]
pub struct Bot {
    prompt: String,
    executor: CommandExecutor<ContactServiceImpl>,
}

impl Bot {
    /// Create a bot with an empty address book.
    pub fn new(config: &Config) -> Self {
        Self {
            prompt: config.prompt.clone(),
            executor: CommandExecutor::new(),
        }
    }

    /// Access the executor, e.g. to inspect metrics after a session.
    pub fn executor(&self) -> &CommandExecutor<ContactServiceImpl> {
        &self.executor
    }

    /// Handle a single raw line.
    ///
    /// A blank line is answered with "Invalid command." like any other
    /// unrecognized input.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match parse_input(line) {
            Ok(parsed) => self.executor.execute(&parsed),
            Err(e) => {
                debug!(error = %e, "Nothing to execute");
                Outcome::Reply(e.user_message().to_string())
            }
        }
    }

    /// Run the read-eval-print loop until `exit`/`close` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on `input` or `output` are returned; command failures
    /// are always answered with a reply.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        info!("Session started");
        let mut line = String::new();

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input");
                writeln!(output, "{}", FAREWELL)?;
                break;
            }

            let outcome = self.handle_line(&line);
            writeln!(output, "{}", outcome.message())?;
            if outcome.is_exit() {
                break;
            }
        }

        info!(summary = %self.executor.metrics().summary(), "Session finished");
        Ok(())
    }
}
