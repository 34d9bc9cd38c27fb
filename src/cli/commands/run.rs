//! Timer run command implementation.

use std::io::{self, Write};

use colored::Colorize;
use tracing::debug;

use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::{Paths, Settings, TimerSettings};
use crate::error::TamatieError;
use crate::output::{format_plan, format_record};
use crate::pomodoro::{
    plan, total_duration, Configuration, JsonLinesLog, LogOutcome, ProgressStream, Scheduler,
    SessionSink, TerminalTimer, Timer,
};

/// Validate the run parameters, then run every session to completion.
///
/// A failure to write the session log is printed but does not fail the
/// command: the timer part of the run has already finished.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded or a parameter is out
/// of range. Nothing is timed or logged in that case.
pub fn run(args: &RunArgs, format: OutputFormat) -> Result<String, TamatieError> {
    let paths = Paths::new()?;
    let settings = match &args.config {
        Some(path) => Settings::load_from_path(path)?,
        None => Settings::load_from_path(&paths.config_file)?,
    };

    let config = resolve_configuration(args, &settings.timer)?;

    if args.dry_run {
        let intervals = plan(&config);
        return format_plan(&config, &intervals, total_duration(&intervals), format);
    }

    let countdown = settings.display.countdown && !args.no_countdown;
    let timer = TerminalTimer::new(countdown).with_stream(progress_stream(format));

    let mut log = session_log(args, &settings, &paths);
    debug!(log = ?log.as_ref().map(JsonLinesLog::path), countdown, "starting run");

    run_with(
        &config,
        timer,
        log.as_mut().map(|l| l as &mut dyn SessionSink),
        format,
        &mut io::stderr(),
    )
}

/// Run `config` on `timer` and hand the record to `sink`.
///
/// A sink failure is reported on `errors` and the run's record is still
/// returned.
///
/// # Errors
///
/// Returns an error if the record cannot be formatted.
pub fn run_with<T: Timer>(
    config: &Configuration,
    timer: T,
    sink: Option<&mut dyn SessionSink>,
    format: OutputFormat,
    errors: &mut dyn Write,
) -> Result<String, TamatieError> {
    let mut scheduler = Scheduler::new(timer);
    let summary = scheduler.run(config, sink);

    if let LogOutcome::Failed(e) = &summary.log {
        writeln!(errors, "{} {e}", "Error logging Pomodoro session:".red())?;
    }

    format_record(&summary.record, format)
}

/// The session log for this run, unless logging is turned off by flag or
/// setting.
#[must_use]
pub fn session_log(args: &RunArgs, settings: &Settings, paths: &Paths) -> Option<JsonLinesLog> {
    (settings.log.enabled && !args.no_log).then(|| JsonLinesLog::at(&paths.session_log))
}

/// Progress goes to stderr when stdout carries JSON.
#[must_use]
pub const fn progress_stream(format: OutputFormat) -> ProgressStream {
    match format {
        OutputFormat::Pretty => ProgressStream::Stdout,
        OutputFormat::Json => ProgressStream::Stderr,
    }
}

/// Combine flags with settings fallbacks and validate the result.
///
/// A value supplied by neither is 0, which fails validation.
///
/// # Errors
///
/// Returns the first out-of-range parameter.
pub fn resolve_configuration(
    args: &RunArgs,
    fallback: &TimerSettings,
) -> Result<Configuration, TamatieError> {
    let pick = |flag: Option<i64>, setting: Option<i64>| flag.or(setting).unwrap_or(0);

    let config = Configuration::new(
        pick(args.pomodoro, fallback.pomodoro),
        pick(args.short_break, fallback.short_break),
        pick(args.long_break, fallback.long_break),
        pick(args.sessions, fallback.sessions),
    )?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::pomodoro::{Interval, SessionLogRecord};
    use tempfile::TempDir;

    /// Finishes every interval immediately.
    struct InstantTimer;

    impl Timer for InstantTimer {
        fn run_interval(&mut self, _interval: &Interval) {}

        fn announce(&mut self, _message: &str) {}
    }

    fn classic() -> Configuration {
        Configuration::new(25, 5, 15, 2).unwrap()
    }

    fn args(p: Option<i64>, b: Option<i64>, l: Option<i64>, s: Option<i64>) -> RunArgs {
        RunArgs {
            pomodoro: p,
            short_break: b,
            long_break: l,
            sessions: s,
            ..RunArgs::default()
        }
    }

    #[test]
    fn test_flags_only() {
        let flags = args(Some(25), Some(5), Some(15), Some(2));
        let config = resolve_configuration(&flags, &TimerSettings::default()).unwrap();
        assert_eq!(config, Configuration::new(25, 5, 15, 2).unwrap());
    }

    #[test]
    fn test_missing_everything_fails_on_pomodoro() {
        let err = resolve_configuration(&RunArgs::default(), &TimerSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            TamatieError::Validation(ValidationError::Pomodoro(0))
        ));
    }

    #[test]
    fn test_settings_fill_omitted_flags() {
        let fallback = TimerSettings {
            pomodoro: Some(50),
            short_break: Some(10),
            long_break: Some(30),
            sessions: Some(3),
        };

        let config = resolve_configuration(&args(Some(25), None, None, None), &fallback).unwrap();
        assert_eq!(config.pomodoro_minutes(), 25);
        assert_eq!(config.break_minutes(), 10);
        assert_eq!(config.long_break_minutes(), 30);
        assert_eq!(config.sessions(), 3);
    }

    #[test]
    fn test_flag_overrides_invalid_setting() {
        let fallback = TimerSettings {
            sessions: Some(99),
            ..TimerSettings::default()
        };
        let config = resolve_configuration(&args(Some(25), Some(5), Some(15), Some(4)), &fallback)
            .unwrap();
        assert_eq!(config.sessions(), 4);
    }

    #[test]
    fn test_completed_run_appends_one_line() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let mut log = session_log(&RunArgs::default(), &Settings::default(), &paths).unwrap();
        let mut errors = Vec::new();

        let output = run_with(
            &classic(),
            InstantTimer,
            Some(&mut log),
            OutputFormat::Json,
            &mut errors,
        )
        .unwrap();

        let contents = std::fs::read_to_string(&paths.session_log).unwrap();
        assert_eq!(contents.lines().count(), 1);
        let record = SessionLogRecord::from_json_line(contents.lines().next().unwrap()).unwrap();
        assert_eq!(record.completed_count, 8);
        assert_eq!(record.pomodoro_duration, 25);

        let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(printed["completed_count"], 8);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_logging_disabled_leaves_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        let no_log = RunArgs {
            no_log: true,
            ..RunArgs::default()
        };
        assert!(session_log(&no_log, &Settings::default(), &paths).is_none());

        let mut settings = Settings::default();
        settings.log.enabled = false;
        let log = session_log(&RunArgs::default(), &settings, &paths);
        assert!(log.is_none());

        let mut errors = Vec::new();
        run_with(&classic(), InstantTimer, None, OutputFormat::Pretty, &mut errors).unwrap();

        assert!(!paths.session_log.exists());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_log_failure_is_reported_not_fatal() {
        colored::control::set_override(false);
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        // A directory where the log file should be.
        std::fs::create_dir(&paths.session_log).unwrap();

        let mut log = JsonLinesLog::at(&paths.session_log);
        let mut errors = Vec::new();
        let result = run_with(
            &classic(),
            InstantTimer,
            Some(&mut log),
            OutputFormat::Pretty,
            &mut errors,
        );

        assert!(result.is_ok());
        let errors = String::from_utf8(errors).unwrap();
        assert!(errors.starts_with("Error logging Pomodoro session: "));
        assert!(errors.contains("failed to open log file"));
    }

    #[test]
    fn test_json_output_moves_progress_to_stderr() {
        assert_eq!(progress_stream(OutputFormat::Pretty), ProgressStream::Stdout);
        assert_eq!(progress_stream(OutputFormat::Json), ProgressStream::Stderr);
    }
}
