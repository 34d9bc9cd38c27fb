//! The session scheduler.
//!
//! Drives a full run: for each session, four pomodoro/short-break pairs
//! followed by a long break. Intervals run strictly one after another.
//! When the last session ends a [`SessionLogRecord`] is built and handed
//! to the sink, if one was given.

use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};

use super::config::{Configuration, POMODOROS_PER_SESSION};
use super::interval::Interval;
use super::record::SessionLogRecord;
use super::sink::SessionSink;
use super::timer::Timer;
use crate::error::LogWriteError;

/// Message shown once a session's four pomodoro/break pairs are done.
pub const SESSION_COMPLETED: &str = "Pomodoro Session completed!";

/// Message shown before the run is logged.
pub const LOGGING_SESSION: &str = "Logging Pomodoro Session!";

/// Where the scheduler is in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerState {
    /// No run started yet
    Idle,
    /// A pomodoro interval is running
    RunningPomodoro,
    /// A short break is running
    RunningShortBreak,
    /// A long break is running
    RunningLongBreak,
    /// Every session has finished
    Completed,
}

/// What happened to the run's log record.
#[derive(Debug)]
pub enum LogOutcome {
    /// The sink accepted the record.
    Written,
    /// No sink was configured.
    Skipped,
    /// The sink failed; the run itself still counts as completed.
    Failed(LogWriteError),
}

impl LogOutcome {
    #[must_use]
    pub const fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Result of a finished run.
#[derive(Debug)]
pub struct RunSummary {
    pub record: SessionLogRecord,
    pub log: LogOutcome,
}

/// Sequential interval scheduler.
pub struct Scheduler<T: Timer> {
    timer: T,
    state: SchedulerState,
    completed_count: u32,
}

impl<T: Timer> Scheduler<T> {
    /// Create an idle scheduler.
    #[must_use]
    pub const fn new(timer: T) -> Self {
        Self {
            timer,
            state: SchedulerState::Idle,
            completed_count: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    /// Pomodoros completed in the current run.
    #[must_use]
    pub const fn completed_count(&self) -> u32 {
        self.completed_count
    }

    /// Borrow the timer.
    #[must_use]
    pub const fn timer(&self) -> &T {
        &self.timer
    }

    /// Consume the scheduler and return the timer.
    #[must_use]
    pub fn into_timer(self) -> T {
        self.timer
    }

    /// Run every session of `config` to completion.
    ///
    /// A sink failure is recorded in the returned summary; it does not
    /// change the fact that the run completed.
    pub fn run(
        &mut self,
        config: &Configuration,
        sink: Option<&mut dyn SessionSink>,
    ) -> RunSummary {
        let start_time = Local::now();
        self.completed_count = 0;

        info!(
            pomodoro = config.pomodoro_minutes(),
            short_break = config.break_minutes(),
            long_break = config.long_break_minutes(),
            sessions = config.sessions(),
            "run started"
        );

        let pomodoro = Interval::pomodoro(config);
        let short_break = Interval::short_break(config);
        let long_break = Interval::long_break(config);

        for _ in 0..config.sessions() {
            for _ in 0..POMODOROS_PER_SESSION {
                self.state = SchedulerState::RunningPomodoro;
                self.timer.run_interval(&pomodoro);
                self.completed_count += 1;

                self.state = SchedulerState::RunningShortBreak;
                self.timer.run_interval(&short_break);
            }

            self.timer.announce(SESSION_COMPLETED);

            self.state = SchedulerState::RunningLongBreak;
            self.timer.run_interval(&long_break);
        }

        self.state = SchedulerState::Completed;
        let end_time = Local::now();
        info!(completed = self.completed_count, "run completed");

        let record = SessionLogRecord::new(config, start_time, end_time, self.completed_count);

        let log = match sink {
            Some(sink) => {
                self.timer.announce(LOGGING_SESSION);
                match sink.append(&record) {
                    Ok(()) => LogOutcome::Written,
                    Err(e) => {
                        warn!(error = %e, "failed to log session");
                        LogOutcome::Failed(e)
                    }
                }
            }
            None => LogOutcome::Skipped,
        };

        RunSummary { record, log }
    }
}
