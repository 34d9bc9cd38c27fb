use std::time::Duration;

use serde::Serialize;
use serde_json::json;

use crate::error::TamatieError;
use crate::pomodoro::{Configuration, HistorySummary, Interval, SessionLogRecord};

/// Format the interval plan as JSON
///
/// # Errors
///
/// Returns `TamatieError::Parse` if JSON serialization fails.
pub fn format_plan_json(
    config: &Configuration,
    intervals: &[Interval],
    total: Duration,
) -> Result<String, TamatieError> {
    let output = json!({
        "configuration": config,
        "count": intervals.len(),
        "total_seconds": total.as_secs(),
        "intervals": intervals,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format logged runs as JSON
///
/// # Errors
///
/// Returns `TamatieError::Parse` if JSON serialization fails.
pub fn format_history_json(
    records: &[&SessionLogRecord],
    skipped: usize,
) -> Result<String, TamatieError> {
    let output = json!({
        "count": records.len(),
        "skipped_lines": skipped,
        "items": records,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format history totals as JSON
///
/// # Errors
///
/// Returns `TamatieError::Parse` if JSON serialization fails.
pub fn format_summary_json(summary: &HistorySummary) -> Result<String, TamatieError> {
    to_json(summary)
}

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns `TamatieError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TamatieError> {
    Ok(serde_json::to_string_pretty(value)?)
}
