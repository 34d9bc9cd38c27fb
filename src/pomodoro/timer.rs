//! Blocking interval timer with an optional live countdown.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use colored::Colorize;
use tracing::debug;

use super::interval::Interval;

/// How often the countdown is redrawn.
pub const TICK: Duration = Duration::from_secs(1);

const BAR_WIDTH: usize = 20;
const SEPARATOR: &str = "----------------------";

/// Runs intervals to completion and relays progress messages.
pub trait Timer {
    /// Block until `interval` has elapsed.
    fn run_interval(&mut self, interval: &Interval);

    /// Show a progress message between intervals.
    fn announce(&mut self, message: &str);
}

/// Terminal stream that receives run progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProgressStream {
    #[default]
    Stdout,
    /// Keeps stdout free for machine-readable output.
    Stderr,
}

impl ProgressStream {
    fn writer(self) -> Box<dyn Write> {
        match self {
            Self::Stdout => Box::new(io::stdout()),
            Self::Stderr => Box::new(io::stderr()),
        }
    }
}

/// Timer that sleeps on the calling thread and writes to the terminal.
#[derive(Debug, Clone)]
pub struct TerminalTimer {
    countdown: bool,
    tick: Duration,
    stream: ProgressStream,
}

impl TerminalTimer {
    /// Create a terminal timer.
    #[must_use]
    pub const fn new(countdown: bool) -> Self {
        Self {
            countdown,
            tick: TICK,
            stream: ProgressStream::Stdout,
        }
    }

    /// Override the countdown redraw period.
    #[must_use]
    pub const fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Write progress to `stream` instead of stdout.
    #[must_use]
    pub const fn with_stream(mut self, stream: ProgressStream) -> Self {
        self.stream = stream;
        self
    }

    /// Stream that receives progress.
    #[must_use]
    pub const fn stream(&self) -> ProgressStream {
        self.stream
    }

    fn print_line(&self, line: &str) {
        let mut out = self.stream.writer();
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            debug!(error = %e, "progress write failed");
        }
    }
}

impl Default for TerminalTimer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Timer for TerminalTimer {
    fn run_interval(&mut self, interval: &Interval) {
        self.print_line(&interval.label.green().bold().to_string());
        debug!(
            kind = %interval.kind,
            seconds = interval.duration.as_secs(),
            "interval started"
        );

        let start = Instant::now();
        let total = interval.duration;

        if self.countdown {
            let tick = self.tick;
            let stream = self.stream;
            let (stop_tx, stop_rx) = mpsc::channel::<()>();

            // The indicator is joined when the scope ends, so it never
            // outlives this interval.
            thread::scope(|scope| {
                scope.spawn(move || draw_countdown(total, start, tick, stream, &stop_rx));
                wait_until(start, total);
                drop(stop_tx);
            });
        } else {
            wait_until(start, total);
        }

        self.print_line(&"Completed!".cyan().to_string());
        self.print_line(SEPARATOR);
        debug!(kind = %interval.kind, elapsed_ms = start.elapsed().as_millis(), "interval finished");
    }

    fn announce(&mut self, message: &str) {
        self.print_line(message);
    }
}

/// Sleep until `total` has elapsed since `start`.
fn wait_until(start: Instant, total: Duration) {
    loop {
        let remaining = total.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            break;
        }
        thread::sleep(remaining);
    }
}

/// Redraw the countdown once per tick until time is up or `stop` fires.
fn draw_countdown(
    total: Duration,
    start: Instant,
    tick: Duration,
    stream: ProgressStream,
    stop: &Receiver<()>,
) {
    let mut out = stream.writer();

    loop {
        let remaining = total.saturating_sub(start.elapsed());
        let line = format!(
            "\r  {} Countdown: {}  ",
            render_progress_bar(progress(total, remaining), BAR_WIDTH),
            format_countdown(remaining)
        );

        if let Err(e) = write!(out, "{line}").and_then(|()| out.flush()) {
            debug!(error = %e, "countdown write failed");
            return;
        }

        if remaining.is_zero() {
            break;
        }

        match stop.recv_timeout(tick) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Clear the countdown line before the completion message.
    let blank = " ".repeat(BAR_WIDTH + 32);
    if let Err(e) = write!(out, "\r{blank}\r").and_then(|()| out.flush()) {
        debug!(error = %e, "countdown clear failed");
    }
}

/// Fraction of `total` already elapsed (0.0 - 1.0).
#[must_use]
pub fn progress(total: Duration, remaining: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }
    1.0 - (remaining.as_secs_f64() / total.as_secs_f64())
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_countdown(d: Duration) -> String {
    let total_seconds = d.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0)) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
