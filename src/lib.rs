//! tamatie - A Pomodoro timer for the command line
//!
//! This crate runs sessions of pomodoro and break intervals and appends a
//! record of each completed run to a newline-delimited JSON log.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pomodoro;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::{LogWriteError, TamatieError, ValidationError};
pub use pomodoro::{Configuration, Scheduler, SessionLogRecord};
