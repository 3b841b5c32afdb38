//! CLI command implementations
//!
//! Each command loads the word list into a view, waits for readiness, and
//! returns the JSON payload to print.

use std::path::Path;

use serde_json::{json, Value};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::index::{IndexConfig, UNBOUNDED};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::view::{WordLengthView, WordSource};

use super::args::{Cli, Command, SourceArgs};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Parse arguments, run the command, print the result
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    if cli.verbose {
        Logger::set_min_severity(Severity::Trace);
    } else if cli.quiet {
        Logger::set_min_severity(Severity::Warn);
    }

    // Population is sequential; one thread is enough.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match runtime.block_on(run_command(cli.command)) {
        Ok(data) => write_response(data),
        Err(e) => {
            write_error(e.code(), &e.to_string())?;
            Err(e)
        }
    }
}

/// Run the appropriate command and return its payload
pub async fn run_command(cmd: Command) -> CliResult<Value> {
    match cmd {
        Command::Stats { source } => stats(&source).await,
        Command::Get {
            source,
            length,
            min,
            max,
        } => get(&source, length, min, max).await,
    }
}

/// Statistics over the whole list, plus the view's counters
pub async fn stats(source: &SourceArgs) -> CliResult<Value> {
    let view = load_view(source).await?;
    Ok(json!({
        "stats": view.stats(),
        "metrics": view.metrics(),
    }))
}

/// Words in the selected length range with scoped statistics.
///
/// `--length` selects one length. `--min`/`--max` select an inclusive range;
/// a missing bound is open. No selector returns everything.
pub async fn get(
    source: &SourceArgs,
    length: Option<usize>,
    min: Option<usize>,
    max: Option<usize>,
) -> CliResult<Value> {
    let view = load_view(source).await?;

    let result = match (length, min, max) {
        (Some(length), _, _) => view.get_by_length(length),
        (None, None, None) => view.get_all(),
        (None, min, max) => view.get_by_range(min.unwrap_or(1), max.unwrap_or(UNBOUNDED))?,
    };

    Ok(serde_json::to_value(result)?)
}

/// Build a view over a word file and wait until it is fully populated.
///
/// Lines are trimmed; blank lines are dropped.
pub async fn load_view(source: &SourceArgs) -> CliResult<WordLengthView> {
    let config = match &source.config {
        Some(path) => load_config(path)?,
        None => IndexConfig::default(),
    };

    let path = source.words.clone();
    let view = WordLengthView::with_config(
        WordSource::producer_with_transform(
            move |sink| async move {
                let mut lines = BufReader::new(File::open(&path).await?).lines();
                while let Some(line) = lines.next_line().await? {
                    sink.offer(line);
                }
                Ok::<_, std::io::Error>(())
            },
            |line: &str| {
                let word = line.trim();
                (!word.is_empty()).then(|| word.to_string())
            },
        ),
        config,
    );

    view.ready().await?;
    Ok(view)
}

fn load_config(path: &Path) -> CliResult<IndexConfig> {
    let config = IndexConfig::load(path).map_err(CliError::from)?;
    let path_str = path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", path_str.as_str())]);
    Ok(config)
}
