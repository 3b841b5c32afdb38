//! CLI module for wordlen
//!
//! Provides command-line interface for:
//! - stats: Whole-list statistics
//! - get: Words by exact length or inclusive range

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, SourceArgs};
pub use commands::{get, load_view, run, run_command, stats};
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_response};
