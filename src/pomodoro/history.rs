//! Reading the session log back.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::warn;

use super::record::SessionLogRecord;
use crate::error::TamatieError;

/// Records read from a session log.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogHistory {
    /// Records in file order (oldest first)
    pub records: Vec<SessionLogRecord>,
    /// Lines that could not be parsed
    pub skipped_lines: usize,
}

impl LogHistory {
    /// Records newest first, at most `limit` of them.
    #[must_use]
    pub fn recent(&self, limit: Option<usize>) -> Vec<&SessionLogRecord> {
        let newest_first = self.records.iter().rev();
        match limit {
            Some(n) => newest_first.take(n).collect(),
            None => newest_first.collect(),
        }
    }

    /// Aggregate totals over every record.
    #[must_use]
    pub fn summary(&self) -> HistorySummary {
        HistorySummary::from_records(&self.records)
    }
}

/// Totals across logged runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    /// Number of logged runs
    pub runs: usize,
    /// Pomodoros completed across all runs
    pub pomodoros: u64,
    /// Minutes spent in pomodoro intervals
    pub focus_minutes: u64,
    /// Start of the earliest run
    pub first_run: Option<DateTime<Local>>,
    /// End of the latest run
    pub last_run: Option<DateTime<Local>>,
}

impl HistorySummary {
    #[must_use]
    pub fn from_records(records: &[SessionLogRecord]) -> Self {
        Self {
            runs: records.len(),
            pomodoros: records.iter().map(|r| u64::from(r.completed_count)).sum(),
            focus_minutes: records.iter().map(SessionLogRecord::focus_minutes).sum(),
            first_run: records.iter().map(|r| r.start_time).min(),
            last_run: records.iter().map(|r| r.end_time).max(),
        }
    }
}

/// Read every record from the log at `path`.
///
/// A missing file is an empty history. Blank lines are ignored and
/// malformed lines are counted in [`LogHistory::skipped_lines`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_log(path: &Path) -> Result<LogHistory, TamatieError> {
    if !path.exists() {
        return Ok(LogHistory::default());
    }

    let file = File::open(path)?;
    let mut history = LogHistory::default();

    // Split on raw bytes so a line that is not UTF-8 is skipped like any
    // other malformed line instead of ending the read.
    for (index, bytes) in BufReader::new(file).split(b'\n').enumerate() {
        let bytes = bytes?;
        let parsed = std::str::from_utf8(&bytes)
            .map_err(|e| e.to_string())
            .and_then(|line| {
                if line.trim().is_empty() {
                    Ok(None)
                } else {
                    SessionLogRecord::from_json_line(line)
                        .map(Some)
                        .map_err(|e| e.to_string())
                }
            });

        match parsed {
            Ok(Some(record)) => history.records.push(record),
            Ok(None) => {}
            Err(error) => {
                warn!(line = index + 1, %error, "skipping malformed log line");
                history.skipped_lines += 1;
            }
        }
    }

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pomodoro::config::Configuration;
    use crate::pomodoro::sink::{JsonLinesLog, SessionSink};
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn record(day: u32, pomodoro: i64, completed: u32) -> SessionLogRecord {
        let config = Configuration::new(pomodoro, 5, 15, 2).unwrap();
        let start = Local.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap();
        SessionLogRecord::new(&config, start, start + Duration::hours(4), completed)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let history = read_log(&temp_dir.path().join("absent.json")).unwrap();
        assert!(history.records.is_empty());
        assert_eq!(history.skipped_lines, 0);
    }

    #[test]
    fn test_reads_appended_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pomodoro_log.json");
        let mut log = JsonLinesLog::at(&path);
        log.append(&record(1, 25, 8)).unwrap();
        log.append(&record(2, 50, 12)).unwrap();

        let history = read_log(&path).unwrap();
        assert_eq!(history.records.len(), 2);
        assert_eq!(history.records[0], record(1, 25, 8));
        assert_eq!(history.records[1], record(2, 50, 12));
    }

    #[test]
    fn test_skips_malformed_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pomodoro_log.json");
        let good = record(1, 25, 8).to_json_line().unwrap();
        std::fs::write(&path, format!("{good}\nnot json\n\n{{\"start_time\":1}}\n")).unwrap();

        let history = read_log(&path).unwrap();
        assert_eq!(history.records.len(), 1);
        assert_eq!(history.skipped_lines, 2);
    }

    #[test]
    fn test_skips_line_that_is_not_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pomodoro_log.json");
        let good = record(1, 25, 8).to_json_line().unwrap();

        let mut contents = Vec::new();
        contents.extend_from_slice(good.as_bytes());
        contents.extend_from_slice(b"\n\xff\xfe garbage\n");
        contents.extend_from_slice(good.as_bytes());
        contents.extend_from_slice(b"\r\n");
        std::fs::write(&path, contents).unwrap();

        let history = read_log(&path).unwrap();
        assert_eq!(history.records.len(), 2);
        assert_eq!(history.skipped_lines, 1);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let history = LogHistory {
            records: vec![record(1, 25, 8), record(2, 25, 8), record(3, 25, 8)],
            skipped_lines: 0,
        };

        let recent = history.recent(Some(2));
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].start_time.format("%d").to_string(), "03");
        assert_eq!(recent[1].start_time.format("%d").to_string(), "02");
        assert_eq!(history.recent(None).len(), 3);
    }

    #[test]
    fn test_summary() {
        let history = LogHistory {
            records: vec![record(1, 25, 8), record(2, 50, 12)],
            skipped_lines: 0,
        };

        let summary = history.summary();
        assert_eq!(summary.runs, 2);
        assert_eq!(summary.pomodoros, 20);
        assert_eq!(summary.focus_minutes, 25 * 8 + 50 * 12);
        assert_eq!(summary.first_run, Some(record(1, 25, 8).start_time));
        assert_eq!(summary.last_run, Some(record(2, 50, 12).end_time));
    }

    #[test]
    fn test_empty_summary() {
        let summary = HistorySummary::from_records(&[]);
        assert_eq!(summary.runs, 0);
        assert_eq!(summary.first_run, None);
    }
}
