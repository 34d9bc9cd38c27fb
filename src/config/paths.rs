//! Path resolution for tamatie data files.
//!
//! All data is stored in `~/.tamatie/`:
//! - `config.yaml` - Optional settings file
//! - `pomodoro_log.json` - Session log, one JSON record per line
//!
//! Set `TAMATIE_HOME` to use a different directory. When `~/.tamatie/` does
//! not exist but `~/.gotamatie/pomodoro_log.json` does, the older directory
//! is used so earlier logs keep growing in place.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TamatieError;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "TAMATIE_HOME";

const DIR_NAME: &str = ".tamatie";
const LEGACY_DIR_NAME: &str = ".gotamatie";
const CONFIG_FILE: &str = "config.yaml";
const SESSION_LOG_FILE: &str = "pomodoro_log.json";

/// Paths to tamatie configuration and data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Root directory: `~/.tamatie/`
    pub root: PathBuf,
    /// Settings file: `~/.tamatie/config.yaml`
    pub config_file: PathBuf,
    /// Session log: `~/.tamatie/pomodoro_log.json`
    pub session_log: PathBuf,
}

impl Paths {
    /// Resolve paths from `TAMATIE_HOME` or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TamatieError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            TamatieError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::in_home(&home))
    }

    /// Paths under `home`, preferring an existing legacy log directory.
    #[must_use]
    pub fn in_home(home: &Path) -> Self {
        let root = home.join(DIR_NAME);
        let legacy = home.join(LEGACY_DIR_NAME);

        if !root.exists() && legacy.join(SESSION_LOG_FILE).is_file() {
            debug!(root = %legacy.display(), "using legacy data directory");
            return Self::with_root(legacy);
        }

        Self::with_root(root)
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join(CONFIG_FILE),
            session_log: root.join(SESSION_LOG_FILE),
            root,
        }
    }
}
