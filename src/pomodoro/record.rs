//! The persisted summary of a completed run.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::config::Configuration;

/// One completed run, as stored in the session log.
///
/// Serialized as a single JSON object per line; the field names are the
/// on-disk format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLogRecord {
    /// When the first interval started
    pub start_time: DateTime<Local>,
    /// When the last interval finished
    pub end_time: DateTime<Local>,
    /// Pomodoro length in minutes
    pub pomodoro_duration: u32,
    /// Short break length in minutes
    pub break_duration: u32,
    /// Long break length in minutes
    pub long_break_duration: u32,
    /// Number of pomodoros completed
    pub completed_count: u32,
}

impl SessionLogRecord {
    /// Build a record for a run of `config`.
    ///
    /// `end_time` is clamped so it never precedes `start_time`.
    #[must_use]
    pub fn new(
        config: &Configuration,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
        completed_count: u32,
    ) -> Self {
        Self {
            start_time,
            end_time: end_time.max(start_time),
            pomodoro_duration: config.pomodoro_minutes(),
            break_duration: config.break_minutes(),
            long_break_duration: config.long_break_minutes(),
            completed_count,
        }
    }

    /// Encode as one log line (no trailing newline).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode one log line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not a valid record.
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line.trim())
    }

    /// Wall-clock length of the run.
    #[must_use]
    pub fn elapsed(&self) -> chrono::Duration {
        self.end_time.signed_duration_since(self.start_time)
    }

    /// Minutes spent in pomodoro intervals.
    #[must_use]
    pub const fn focus_minutes(&self) -> u64 {
        self.completed_count as u64 * self.pomodoro_duration as u64
    }
}
