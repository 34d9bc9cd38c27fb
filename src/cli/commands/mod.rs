//! Command implementations for tamatie.
//!
//! Each command returns the text to print once it is done; the timer run
//! also prints progress while it is going.

mod completions;
mod history;
mod run;

pub use completions::completions;
pub use history::history;
pub use run::{resolve_configuration, run};
