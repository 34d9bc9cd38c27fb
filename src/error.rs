//! Error types for tamatie.

use std::path::PathBuf;

use thiserror::Error;

/// A configuration value outside its accepted range.
///
/// Only the first violated field is ever reported, in the order
/// pomodoro, break, long break, sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Pomodoro duration not in `(1, 60]`.
    #[error("Invalid pomodoro duration: {0} (expected 2-60 minutes)")]
    Pomodoro(i64),

    /// Short break duration not in `(1, 60]`.
    #[error("Invalid break duration: {0} (expected 2-60 minutes)")]
    Break(i64),

    /// Long break duration not in `(1, 60]`.
    #[error("Invalid long break duration: {0} (expected 2-60 minutes)")]
    LongBreak(i64),

    /// Session count not in `(1, 23]`.
    #[error("Invalid pomodoro sessions: {0} (expected 2-23 sessions)")]
    Sessions(i64),
}

/// Failure to persist a completed run to the session log.
#[derive(Debug, Error)]
pub enum LogWriteError {
    /// The log directory could not be created.
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be opened for appending.
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record could not be encoded.
    #[error("failed to encode log record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The encoded record could not be written.
    #[error("failed to write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error type for tamatie.
#[derive(Debug, Error)]
pub enum TamatieError {
    /// A configuration value was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Settings or path resolution failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for TamatieError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_the_field() {
        assert!(ValidationError::Pomodoro(1)
            .to_string()
            .starts_with("Invalid pomodoro duration"));
        assert!(ValidationError::Break(0)
            .to_string()
            .starts_with("Invalid break duration"));
        assert!(ValidationError::LongBreak(61)
            .to_string()
            .starts_with("Invalid long break duration"));
        assert!(ValidationError::Sessions(24)
            .to_string()
            .starts_with("Invalid pomodoro sessions"));
    }

    #[test]
    fn test_validation_converts_to_top_level() {
        let err: TamatieError = ValidationError::Break(99).into();
        assert!(matches!(err, TamatieError::Validation(ValidationError::Break(99))));
        assert_eq!(err.to_string(), ValidationError::Break(99).to_string());
    }
}
