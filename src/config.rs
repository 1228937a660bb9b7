//! Configuration management for the address book bot.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here writes to stdout, which carries only bot replies.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Prompt shown before each line when none is configured.
pub const DEFAULT_PROMPT: &str = "Enter command: ";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the address book bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt written before reading each line (default: "Enter command: ")
    pub prompt: String,

    /// Log level (default: "error")
    pub log_level: String,

    /// Print the session metrics summary to stderr on exit (default: false)
    pub show_summary: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BOT_PROMPT`: Prompt text (default: "Enter command: ")
    /// - `LOG_LEVEL`: One of trace, debug, info, warn, error (default: "error")
    /// - `BOT_SHOW_SUMMARY`: `true`/`false`/`1`/`0` (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let prompt = env::var("BOT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        let log_level = env::var("LOG_LEVEL")
            .map(|level| level.to_lowercase())
            .unwrap_or_else(|_| "error".to_string());
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        let show_summary = Self::parse_env_bool("BOT_SHOW_SUMMARY", false)?;

        Ok(Config {
            prompt,
            log_level,
            show_summary,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
            show_summary: false,
        }
    }
}
