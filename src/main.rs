//! Address Book Bot - Main entry point
//!
//! Reads commands from stdin and answers on stdout. Logs go to stderr.

use addressbook_bot::{Bot, Config};
use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Interactive address book.
///
/// Commands once running:
///   hello
///   add <name> <phone> [<phone> ...]
///   change <name> <old_phone> <new_phone>
///   phone <name>
///   all
///   remove <name>
///   exit | close
#[derive(Parser, Debug)]
#[command(name = "addressbook-bot", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Prompt shown before each command (overrides BOT_PROMPT)
    #[arg(long, value_name = "TEXT")]
    prompt: Option<String>,
}

impl Cli {
    /// Log level picked by flags, if any were given.
    fn log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            _ => Some("debug"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration errors are reported before logging exists
    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if let Some(prompt) = cli.prompt.clone() {
        config.prompt = prompt;
    }
    if let Some(level) = cli.log_level() {
        config.log_level = level.to_string();
    }

    // Initialize logging (stderr only, stdout carries bot replies)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(log_level = %config.log_level, "Configuration loaded");

    let mut bot = Bot::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(e) = bot.run(stdin.lock(), &mut stdout) {
        error!("Session aborted: {}", e);
        return Err(e.into());
    }

    if config.show_summary {
        eprintln!("{}", bot.executor().metrics().summary());
    }

    Ok(())
}
