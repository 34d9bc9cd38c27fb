use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tamatie::cli::args::{Cli, Commands};
use tamatie::cli::commands;

/// Environment variable holding the diagnostics filter.
const LOG_ENV: &str = "TAMATIE_LOG";

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures.
            let failed = e.use_stderr();
            if let Err(print_err) = e.print() {
                eprintln!("{}: {}", "error".red().bold(), print_err);
            }
            return if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.output;

    let output = match cli.command {
        None => commands::run(&cli.run, format)?,
        Some(Commands::History(args)) => {
            commands::history(&args, format).context("failed to read session history")?
        }
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
