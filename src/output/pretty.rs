use std::time::Duration;

use colored::Colorize;

use crate::pomodoro::{Configuration, HistorySummary, Interval, SessionLogRecord};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format the interval plan of a run.
pub fn format_plan_pretty(config: &Configuration, intervals: &[Interval], total: Duration) -> String {
    let mut output = format!(
        "{} ({} sessions, {} intervals)\n",
        "Pomodoro plan".bold(),
        config.sessions(),
        intervals.len()
    );
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for (index, interval) in intervals.iter().enumerate() {
        let name = if interval.kind.is_break() {
            interval.kind.display_name().cyan()
        } else {
            interval.kind.display_name().green()
        };
        output.push_str(&format!(
            "{:>3}. {:<12} {}\n",
            index + 1,
            name,
            format_duration(interval.duration).dimmed()
        ));
    }

    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{}: {}  ({} pomodoros)",
        "Total".bold(),
        format_duration(total),
        config.expected_pomodoros()
    ));

    output
}

/// Format the record of a run that just finished.
pub fn format_record_pretty(record: &SessionLogRecord) -> String {
    let elapsed = record.elapsed().to_std().unwrap_or_default();
    format!(
        "{} {} pomodoros completed in {}",
        "✅".green(),
        record.completed_count.to_string().bold(),
        format_duration(elapsed)
    )
}

/// Format logged runs as a table.
pub fn format_history_pretty(records: &[&SessionLogRecord], skipped: usize) -> String {
    if records.is_empty() {
        return "Pomodoro history (0 runs)\n  No runs logged yet".to_string();
    }

    let mut output = format!("Pomodoro history ({} runs)\n", records.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for record in records {
        output.push_str(&format!(
            "{}  {:>3} pomodoros  {}\n",
            record.start_time.format(DATE_FORMAT).to_string().yellow(),
            record.completed_count.to_string().bold(),
            format!(
                "{}/{}/{} min",
                record.pomodoro_duration, record.break_duration, record.long_break_duration
            )
            .dimmed()
        ));
    }

    if skipped > 0 {
        output.push_str(&format!("{} malformed line(s) skipped\n", skipped).red().to_string());
    }

    output
}

/// Format totals across logged runs.
pub fn format_summary_pretty(summary: &HistorySummary) -> String {
    let mut output = format!("{}\n", "Pomodoro summary".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!("Runs:       {}\n", summary.runs));
    output.push_str(&format!("Pomodoros:  {}\n", summary.pomodoros));
    output.push_str(&format!(
        "Focus time: {}\n",
        format_duration(Duration::from_secs(summary.focus_minutes * 60))
    ));

    if let (Some(first), Some(last)) = (summary.first_run, summary.last_run) {
        output.push_str(&format!(
            "Range:      {} → {}\n",
            first.format(DATE_FORMAT),
            last.format(DATE_FORMAT)
        ));
    }

    output
}

/// Format a duration as a human-readable string.
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.as_secs() / 60;

    if total_minutes < 1 {
        let seconds = d.as_secs();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}
