//! Intervals and the run plan.

use std::time::Duration;

use serde::Serialize;

use super::config::{Configuration, POMODOROS_PER_SESSION};

/// Kind of interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    /// Focused work
    Pomodoro,
    /// Rest after each pomodoro
    ShortBreak,
    /// Rest after every fourth pomodoro/short-break pair
    LongBreak,
}

impl IntervalKind {
    /// Message printed when an interval of this kind starts.
    #[must_use]
    pub const fn start_label(&self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro started!",
            Self::ShortBreak => "Break started!",
            Self::LongBreak => "Long Break started!",
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break type.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single timed interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub kind: IntervalKind,
    #[serde(serialize_with = "serialize_seconds", rename = "duration_seconds")]
    pub duration: Duration,
    pub label: &'static str,
}

impl Interval {
    /// Create an interval of `minutes` length.
    #[must_use]
    pub fn from_minutes(kind: IntervalKind, minutes: u32) -> Self {
        Self {
            kind,
            duration: Duration::from_secs(u64::from(minutes) * 60),
            label: kind.start_label(),
        }
    }

    #[must_use]
    pub fn pomodoro(config: &Configuration) -> Self {
        Self::from_minutes(IntervalKind::Pomodoro, config.pomodoro_minutes())
    }

    #[must_use]
    pub fn short_break(config: &Configuration) -> Self {
        Self::from_minutes(IntervalKind::ShortBreak, config.break_minutes())
    }

    #[must_use]
    pub fn long_break(config: &Configuration) -> Self {
        Self::from_minutes(IntervalKind::LongBreak, config.long_break_minutes())
    }
}

fn serialize_seconds<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_secs())
}

/// Every interval of a run, in execution order.
#[must_use]
pub fn plan(config: &Configuration) -> Vec<Interval> {
    let per_session = POMODOROS_PER_SESSION as usize * 2 + 1;
    let mut intervals = Vec::with_capacity(config.sessions() as usize * per_session);

    for _ in 0..config.sessions() {
        for _ in 0..POMODOROS_PER_SESSION {
            intervals.push(Interval::pomodoro(config));
            intervals.push(Interval::short_break(config));
        }
        intervals.push(Interval::long_break(config));
    }

    intervals
}

/// Total wall-clock time of a list of intervals.
#[must_use]
pub fn total_duration(intervals: &[Interval]) -> Duration {
    intervals.iter().map(|i| i.duration).sum()
}
