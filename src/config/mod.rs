//! Configuration management for tamatie.
//!
//! This module handles path resolution and the optional settings file in `~/.tamatie/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{DisplaySettings, LogSettings, Settings, TimerSettings};
