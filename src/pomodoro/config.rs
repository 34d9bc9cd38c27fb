//! Run configuration and input validation.

use serde::Serialize;

use crate::error::ValidationError;

/// Upper bound (inclusive) for every duration, in minutes.
pub const MAX_DURATION_MINUTES: i64 = 60;

/// Upper bound (inclusive) for the number of sessions.
pub const MAX_SESSIONS: i64 = 23;

/// Pomodoro/short-break pairs in one session.
pub const POMODOROS_PER_SESSION: u32 = 4;

/// Check the four run parameters against their accepted ranges.
///
/// Durations must satisfy `1 < value <= 60` and the session count
/// `1 < value <= 23`. Fields are checked in order (pomodoro, break,
/// long break, sessions) and the first failure is returned.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first field out of range.
pub const fn validate(
    pomodoro: i64,
    short_break: i64,
    long_break: i64,
    sessions: i64,
) -> Result<(), ValidationError> {
    if !duration_in_range(pomodoro) {
        return Err(ValidationError::Pomodoro(pomodoro));
    }
    if !duration_in_range(short_break) {
        return Err(ValidationError::Break(short_break));
    }
    if !duration_in_range(long_break) {
        return Err(ValidationError::LongBreak(long_break));
    }
    if !(sessions > 1 && sessions <= MAX_SESSIONS) {
        return Err(ValidationError::Sessions(sessions));
    }
    Ok(())
}

const fn duration_in_range(minutes: i64) -> bool {
    minutes > 1 && minutes <= MAX_DURATION_MINUTES
}

/// A validated run configuration.
///
/// The only constructor is [`Configuration::new`], so a value of this
/// type always satisfies [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pomodoro_minutes: u32,
    break_minutes: u32,
    long_break_minutes: u32,
    sessions: u32,
}

impl Configuration {
    /// Validate and build a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(
        pomodoro: i64,
        short_break: i64,
        long_break: i64,
        sessions: i64,
    ) -> Result<Self, ValidationError> {
        validate(pomodoro, short_break, long_break, sessions)?;

        // All four are now within 2..=60.
        Ok(Self {
            pomodoro_minutes: pomodoro as u32,
            break_minutes: short_break as u32,
            long_break_minutes: long_break as u32,
            sessions: sessions as u32,
        })
    }

    /// Pomodoro length in minutes.
    #[must_use]
    pub const fn pomodoro_minutes(&self) -> u32 {
        self.pomodoro_minutes
    }

    /// Short break length in minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Long break length in minutes.
    #[must_use]
    pub const fn long_break_minutes(&self) -> u32 {
        self.long_break_minutes
    }

    /// Number of sessions (sets) in the run.
    #[must_use]
    pub const fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Pomodoros a run with this configuration completes.
    #[must_use]
    pub const fn expected_pomodoros(&self) -> u32 {
        self.sessions * POMODOROS_PER_SESSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_range_is_exclusive_below_inclusive_above() {
        for d in 2..=60 {
            assert!(validate(d, 5, 15, 2).is_ok(), "pomodoro {d} should pass");
            assert!(validate(25, d, 15, 2).is_ok(), "break {d} should pass");
            assert!(validate(25, 5, d, 2).is_ok(), "long break {d} should pass");
        }

        for d in [-5, 0, 1, 61, 120] {
            assert_eq!(validate(d, 5, 15, 2), Err(ValidationError::Pomodoro(d)));
            assert_eq!(validate(25, d, 15, 2), Err(ValidationError::Break(d)));
            assert_eq!(validate(25, 5, d, 2), Err(ValidationError::LongBreak(d)));
        }
    }

    #[test]
    fn test_session_range() {
        for n in 2..=23 {
            assert!(validate(25, 5, 15, n).is_ok(), "sessions {n} should pass");
        }
        for n in [0, 1, 24, 100] {
            assert_eq!(validate(25, 5, 15, n), Err(ValidationError::Sessions(n)));
        }
    }

    #[test]
    fn test_first_violation_wins() {
        assert_eq!(validate(0, 0, 0, 0), Err(ValidationError::Pomodoro(0)));
        assert_eq!(validate(25, 0, 0, 0), Err(ValidationError::Break(0)));
        assert_eq!(validate(25, 5, 0, 0), Err(ValidationError::LongBreak(0)));
        assert_eq!(validate(25, 5, 15, 0), Err(ValidationError::Sessions(0)));
    }

    #[test]
    fn test_upper_boundary_accepted() {
        let config = Configuration::new(60, 60, 60, 23).unwrap();
        assert_eq!(config.pomodoro_minutes(), 60);
        assert_eq!(config.sessions(), 23);
        assert_eq!(config.expected_pomodoros(), 92);
    }

    #[test]
    fn test_pomodoro_of_one_rejected() {
        assert_eq!(
            Configuration::new(1, 5, 15, 2),
            Err(ValidationError::Pomodoro(1))
        );
    }

    #[test]
    fn test_configuration_accessors() {
        let config = Configuration::new(25, 5, 15, 2).unwrap();
        assert_eq!(config.pomodoro_minutes(), 25);
        assert_eq!(config.break_minutes(), 5);
        assert_eq!(config.long_break_minutes(), 15);
        assert_eq!(config.expected_pomodoros(), 8);
    }
}
