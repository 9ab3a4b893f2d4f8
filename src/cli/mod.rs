//! CLI argument parsing for the Got It TUI.

mod args;

pub use args::{parse_args, CliConfig};
