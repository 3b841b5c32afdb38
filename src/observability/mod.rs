//! Observability subsystem for wordlen
//!
//! - Structured logging (JSON lines on stderr)
//! - Per-view counters
//! - Lifecycle event tracing
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on indexing or queries
//! 3. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use wordlen::observability::{log_event_with_fields, Event, ObservationScope};
//!
//! log_event_with_fields(Event::ViewCreated, &[("mode", "words")]);
//!
//! let scope = ObservationScope::new("POPULATION");
//! // ... insert words ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::{ObservationScope, Timer};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_failure() {
        Severity::Warn
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
