//! Pomodoro runs.
//!
//! - Validating the run configuration
//! - Planning and timing intervals
//! - Scheduling sessions of pomodoros and breaks
//! - Logging and reading back completed runs

pub mod config;
pub mod history;
pub mod interval;
pub mod record;
pub mod scheduler;
pub mod sink;
pub mod timer;

pub use config::{validate, Configuration};
pub use history::{read_log, HistorySummary, LogHistory};
pub use interval::{plan, total_duration, Interval, IntervalKind};
pub use record::SessionLogRecord;
pub use scheduler::{LogOutcome, RunSummary, Scheduler, SchedulerState};
pub use sink::{JsonLinesLog, MemorySink, SessionSink};
pub use timer::{format_countdown, ProgressStream, TerminalTimer, Timer};
