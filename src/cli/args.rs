use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "tamatie")]
#[command(about = "A Pomodoro timer for the command line")]
#[command(long_about = "tamatie - A Pomodoro timer for the command line

Alternates focus intervals with short breaks, four times per session,
followed by a long break. Completed runs are appended to
~/.tamatie/pomodoro_log.json. If only ~/.gotamatie/pomodoro_log.json
exists, that log is used instead. With --output json, progress goes to
stderr and stdout holds only the final record.

QUICK START:
  tamatie -d 25 -b 5 -l 15 -s 2       Two sessions of classic Pomodoro
  tamatie -d 25 -b 5 -l 15 -s 2 --dry-run
                                      Show the plan without starting
  tamatie history                     Show logged runs

LIMITS:
  Durations must be between 2 and 60 minutes, sessions between 2 and 23.")]
#[command(version, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Arguments for a timer run.
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Pomodoro duration in minutes (2-60)
    #[arg(short = 'd', long = "pomodoro", allow_negative_numbers = true)]
    pub pomodoro: Option<i64>,

    /// Short break duration in minutes (2-60)
    #[arg(short = 'b', long = "break", allow_negative_numbers = true)]
    pub short_break: Option<i64>,

    /// Long break duration in minutes (2-60)
    #[arg(short = 'l', long = "long-break", allow_negative_numbers = true)]
    pub long_break: Option<i64>,

    /// Number of Pomodoro sessions (2-23)
    ///
    /// Each session is four pomodoro/break pairs followed by a long break.
    #[arg(short = 's', long = "sessions", allow_negative_numbers = true)]
    pub sessions: Option<i64>,

    /// Settings file to read instead of ~/.tamatie/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not append this run to the session log
    #[arg(long)]
    pub no_log: bool,

    /// Do not draw the live countdown
    #[arg(long)]
    pub no_countdown: bool,

    /// Validate and print the interval plan without starting
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show logged runs
    ///
    /// Reads ~/.tamatie/pomodoro_log.json, newest first.
    ///
    /// # Examples
    ///
    ///   tamatie history               All logged runs
    ///   tamatie history --limit 5     The five most recent runs
    ///   tamatie history --summary     Totals across all runs
    History(HistoryArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   tamatie completions zsh > ~/.zsh/completions/_tamatie
    ///   tamatie completions fish | source
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the history command.
#[derive(Args, Debug, Default, Clone)]
pub struct HistoryArgs {
    /// Show at most this many runs
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Show totals instead of individual runs
    #[arg(long)]
    pub summary: bool,
}
