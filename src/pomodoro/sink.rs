//! Destinations for completed-run records.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::record::SessionLogRecord;
use crate::error::LogWriteError;

/// Receives the record of each completed run.
#[cfg_attr(test, mockall::automock)]
pub trait SessionSink {
    /// Persist one record.
    ///
    /// # Errors
    ///
    /// Returns a [`LogWriteError`] if the record could not be stored.
    fn append(&mut self, record: &SessionLogRecord) -> Result<(), LogWriteError>;
}

/// Append-only, newline-delimited JSON log file.
#[derive(Debug, Clone)]
pub struct JsonLinesLog {
    path: PathBuf,
}

impl JsonLinesLog {
    /// Log at a specific path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionSink for JsonLinesLog {
    fn append(&mut self, record: &SessionLogRecord) -> Result<(), LogWriteError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| LogWriteError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| LogWriteError::Open {
                path: self.path.clone(),
                source,
            })?;

        let mut line = record.to_json_line()?;
        line.push('\n');

        // One write call per record keeps lines whole under O_APPEND.
        file.write_all(line.as_bytes())
            .map_err(|source| LogWriteError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), "session record appended");
        Ok(())
    }
}

/// Keeps records in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<SessionLogRecord>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records appended so far, oldest first.
    #[must_use]
    pub fn records(&self) -> &[SessionLogRecord] {
        &self.records
    }
}

impl SessionSink for MemorySink {
    fn append(&mut self, record: &SessionLogRecord) -> Result<(), LogWriteError> {
        self.records.push(record.clone());
        Ok(())
    }
}
