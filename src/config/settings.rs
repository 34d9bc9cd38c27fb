//! Settings for tamatie.
//!
//! Settings are loaded from `~/.tamatie/config.yaml`. Every field is
//! optional. Timer values here are fallbacks for omitted flags; nothing
//! supplies a duration by default, so an unconfigured run still fails
//! validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TamatieError;

/// Main settings structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Fallback run parameters.
    pub timer: TimerSettings,
    /// Session log settings.
    pub log: LogSettings,
    /// Terminal display settings.
    pub display: DisplaySettings,
}

/// Fallback run parameters, used when the matching flag is omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TimerSettings {
    /// Pomodoro duration in minutes.
    pub pomodoro: Option<i64>,
    /// Short break duration in minutes.
    pub short_break: Option<i64>,
    /// Long break duration in minutes.
    pub long_break: Option<i64>,
    /// Number of sessions.
    pub sessions: Option<i64>,
}

/// Session log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogSettings {
    /// Append completed runs to the session log.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Terminal display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Draw a live countdown while an interval runs.
    #[serde(default = "default_true")]
    pub countdown: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            countdown: default_true(),
        }
    }
}

impl Settings {
    /// Load settings from a specific path.
    ///
    /// If the settings file doesn't exist, returns defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TamatieError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TamatieError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            TamatieError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
