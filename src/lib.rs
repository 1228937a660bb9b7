//! Address Book Bot - an interactive command-line contact book.
//!
//! Users type commands such as `add John 1234567890` or `phone John`; each line
//! is parsed, executed against an in-memory address book, and answered with a
//! single reply.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactName`, `PhoneNumber`)
//! - **models**: The `Record` tying a name to its phones
//! - **repositories**: The in-memory `AddressBook` store
//! - **commands**: Line parsing and the set of known commands
//! - **services**: Contact business logic and the command executor
//! - **bot**: The read-eval-print loop
//! - **error**: Classified command failures and their user-facing replies
//! - **config**: Configuration from environment variables
//! - **metrics**: Per-session counters

pub mod bot;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;

pub use bot::Bot;
pub use commands::{parse_input, Command, ParsedInput};
pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use metrics::{MetricsSummary, SessionMetrics};
pub use models::Record;
pub use repositories::AddressBook;
pub use services::{CommandExecutor, ContactService, ContactServiceImpl, Outcome};
