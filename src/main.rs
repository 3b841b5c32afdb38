//! wordlen CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`. The error has already been
//! reported as JSON on stdout; stderr gets the plain message.

use wordlen::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
