//! Command-line interface for tamatie.

pub mod args;
pub mod commands;
