//! History command implementation.

use crate::cli::args::{HistoryArgs, OutputFormat};
use crate::config::Paths;
use crate::error::TamatieError;
use crate::output::{format_history, format_summary};
use crate::pomodoro::read_log;

/// Show logged runs, or their totals with `--summary`.
///
/// # Errors
///
/// Returns an error if the log exists but cannot be read.
pub fn history(args: &HistoryArgs, format: OutputFormat) -> Result<String, TamatieError> {
    let paths = Paths::new()?;
    let log = read_log(&paths.session_log)?;

    if args.summary {
        return format_summary(&log.summary(), format);
    }

    format_history(&log.recent(args.limit), log.skipped_lines, format)
}
