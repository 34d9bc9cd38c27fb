//! Output formatting for tamatie.
//!
//! This module provides formatters for displaying plans and session history in various formats.

mod json;
mod pretty;

use std::time::Duration;

use crate::cli::args::OutputFormat;
use crate::error::TamatieError;
use crate::pomodoro::{Configuration, HistorySummary, Interval, SessionLogRecord};

pub use json::*;
pub use pretty::*;

/// Format an interval plan based on output format
///
/// # Errors
///
/// Returns `TamatieError::Parse` if JSON serialization fails.
pub fn format_plan(
    config: &Configuration,
    intervals: &[Interval],
    total: Duration,
    format: OutputFormat,
) -> Result<String, TamatieError> {
    match format {
        OutputFormat::Pretty => Ok(format_plan_pretty(config, intervals, total)),
        OutputFormat::Json => format_plan_json(config, intervals, total),
    }
}

/// Format the record of a finished run based on output format
///
/// # Errors
///
/// Returns `TamatieError::Parse` if JSON serialization fails.
pub fn format_record(record: &SessionLogRecord, format: OutputFormat) -> Result<String, TamatieError> {
    match format {
        OutputFormat::Pretty => Ok(format_record_pretty(record)),
        OutputFormat::Json => to_json(record),
    }
}

/// Format logged runs based on output format
///
/// # Errors
///
/// Returns `TamatieError::Parse` if JSON serialization fails.
pub fn format_history(
    records: &[&SessionLogRecord],
    skipped: usize,
    format: OutputFormat,
) -> Result<String, TamatieError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(records, skipped)),
        OutputFormat::Json => format_history_json(records, skipped),
    }
}

/// Format history totals based on output format
///
/// # Errors
///
/// Returns `TamatieError::Parse` if JSON serialization fails.
pub fn format_summary(summary: &HistorySummary, format: OutputFormat) -> Result<String, TamatieError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summary)),
        OutputFormat::Json => format_summary_json(summary),
    }
}
