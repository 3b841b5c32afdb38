//! CLI argument definitions using clap
//!
//! Commands:
//! - wordlen stats --words <path> [--config <path>]
//! - wordlen get --words <path> [--length N | --min N --max N] [--config <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// wordlen - index a word list by length
#[derive(Parser, Debug)]
#[command(name = "wordlen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log per-query events
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Word list, one word per line
    #[arg(long)]
    pub words: PathBuf,

    /// Path to an index configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print statistics over the whole word list
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print words by length, with statistics scoped to the selection
    Get {
        #[command(flatten)]
        source: SourceArgs,

        /// Exact length
        #[arg(long, conflicts_with_all = ["min", "max"])]
        length: Option<usize>,

        /// Minimum length (inclusive)
        #[arg(long)]
        min: Option<usize>,

        /// Maximum length (inclusive)
        #[arg(long)]
        max: Option<usize>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
