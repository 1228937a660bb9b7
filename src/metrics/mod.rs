//! Session metrics.
//!
//! Counts what happened during one interactive session so a summary can be
//! logged when the bot exits.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Counters for a single bot session.
#[derive(Debug, Clone, Default)]
pub struct SessionMetrics {
    /// Recognized commands executed
    commands_total: u64,

    /// Recognized commands that ended in a classified failure
    commands_failed: u64,

    /// Lines whose first token was not a known command
    unknown_commands: u64,

    /// Failures keyed by `CommandError::kind`
    failures_by_kind: BTreeMap<&'static str, u64>,

    /// Time spent executing commands, in microseconds
    duration_total_us: u64,
}

impl SessionMetrics {
    /// Create an empty metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command that completed with a reply.
    pub fn record_success(&mut self, duration: Duration) {
        self.commands_total += 1;
        self.add_duration(duration);
    }

    /// Record a command that failed with the given error kind.
    pub fn record_failure(&mut self, kind: &'static str, duration: Duration) {
        self.commands_total += 1;
        self.commands_failed += 1;
        self.add_duration(duration);
        *self.failures_by_kind.entry(kind).or_insert(0) += 1;
    }

    fn add_duration(&mut self, duration: Duration) {
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        self.duration_total_us = self.duration_total_us.saturating_add(micros);
    }

    /// Record a line with an unrecognized command token.
    pub fn record_unknown(&mut self) {
        self.unknown_commands += 1;
    }

    /// Get total recognized commands.
    pub fn commands_total(&self) -> u64 {
        self.commands_total
    }

    /// Get total failed commands.
    pub fn commands_failed(&self) -> u64 {
        self.commands_failed
    }

    /// Get total unrecognized commands.
    pub fn unknown_commands(&self) -> u64 {
        self.unknown_commands
    }

    /// Get the failure count for one error kind.
    pub fn failures_of(&self, kind: &str) -> u64 {
        self.failures_by_kind.get(kind).copied().unwrap_or(0)
    }

    /// Get a snapshot of all counters.
    pub fn summary(&self) -> MetricsSummary {
        let duration_avg_us = if self.commands_total == 0 {
            0.0
        } else {
            self.duration_total_us as f64 / self.commands_total as f64
        };

        MetricsSummary {
            commands_total: self.commands_total,
            commands_failed: self.commands_failed,
            unknown_commands: self.unknown_commands,
            failures_by_kind: self.failures_by_kind.clone(),
            duration_avg_us,
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub commands_total: u64,
    pub commands_failed: u64,
    pub unknown_commands: u64,
    pub failures_by_kind: BTreeMap<&'static str, u64>,
    pub duration_avg_us: f64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "commands={} failed={} unknown={} avg_us={:.1}",
            self.commands_total, self.commands_failed, self.unknown_commands, self.duration_avg_us
        )?;
        for (kind, count) in &self.failures_by_kind {
            write!(f, " {}={}", kind, count)?;
        }
        Ok(())
    }
}

/// Helper for timing one command.
pub struct CommandTimer {
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Record the elapsed time as a success.
    pub fn complete(self, metrics: &mut SessionMetrics) {
        metrics.record_success(self.start.elapsed());
    }

    /// Record the elapsed time as a failure of the given kind.
    pub fn complete_with_error(self, metrics: &mut SessionMetrics, kind: &'static str) {
        metrics.record_failure(kind, self.start.elapsed());
    }
}
