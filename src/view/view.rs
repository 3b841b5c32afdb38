//! The word-length view
//!
//! Owns one length index, populates it from a `WordSource`, and answers
//! length queries with snapshot-scoped statistics.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use tokio::runtime::Handle;
use uuid::Uuid;

use super::errors::{AcquisitionError, AcquisitionResult, BoxError};
use super::readiness::{PopulationState, Readiness};
use super::source::{WordSink, WordSource};
use crate::index::{
    IndexConfig, IndexResult, LengthIndex, LengthQueryResult, LengthRange, LengthStats,
    LengthUnit,
};
use crate::observability::{
    log_event_with_fields, Event, Logger, MetricsRegistry, MetricsSnapshot, ObservationScope,
    Severity,
};

/// Words indexed by length.
///
/// # Readiness
///
/// The list mode is ready as soon as construction returns. The deferred and
/// producer modes populate on a tokio task when constructed inside a runtime,
/// otherwise when `ready()` is first awaited. Queries issued before `ready()`
/// resolves see a partial index.
#[derive(Debug)]
pub struct WordLengthView {
    id: Uuid,
    index: Arc<RwLock<LengthIndex>>,
    metrics: Arc<MetricsRegistry>,
    readiness: Readiness,
}

impl WordLengthView {
    /// Build a view with the default configuration
    pub fn new(source: WordSource) -> Self {
        Self::with_config(source, IndexConfig::default())
    }

    /// Build a view from an in-memory list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(WordSource::words(words))
    }

    /// Build a view from a future that resolves to a list
    pub fn from_future<F, E>(future: F) -> Self
    where
        F: Future<Output = Result<Vec<String>, E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        Self::new(WordSource::deferred(future))
    }

    /// Build a view from a push-style producer
    pub fn from_producer<P, Fut, E>(producer: P) -> Self
    where
        P: FnOnce(WordSink) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        Self::new(WordSource::producer(producer))
    }

    /// Build a view from a producer whose words pass through `transform`
    pub fn from_producer_with_transform<P, Fut, E, T>(producer: P, transform: T) -> Self
    where
        P: FnOnce(WordSink) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError> + 'static,
        T: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self::new(WordSource::producer_with_transform(producer, transform))
    }

    /// Build a view and start populating it
    pub fn with_config(source: WordSource, config: IndexConfig) -> Self {
        let id = Uuid::new_v4();
        let view_id = id.to_string();
        let index = Arc::new(RwLock::new(LengthIndex::with_config(config.clone())));
        let metrics = Arc::new(MetricsRegistry::new());
        let sink = WordSink::new(Arc::clone(&index), Arc::clone(&metrics));

        log_event_with_fields(
            Event::ViewCreated,
            &[
                ("view_id", view_id.as_str()),
                ("mode", source.mode()),
                ("length_unit", config.length_unit.as_str()),
            ],
        );

        let scope = ObservationScope::with_fields(
            "POPULATION",
            &[("view_id", view_id.as_str()), ("mode", source.mode())],
        );

        let readiness = match source {
            WordSource::Words(words) => {
                let stored = sink.offer_all(words);
                scope.complete_with_fields(&[("stored", stored.to_string().as_str())]);
                Readiness::resolved()
            }
            WordSource::Deferred(future) => {
                spawn_population(scope, Arc::clone(&metrics), async move {
                    let words = future.await.map_err(AcquisitionError::source_failed)?;
                    sink.offer_all(words);
                    Ok(())
                })
            }
            WordSource::Producer {
                producer,
                transform,
            } => {
                let sink = sink.with_transform(transform);
                // Offers made before the producer returns land immediately.
                match panic::catch_unwind(AssertUnwindSafe(|| producer(sink))) {
                    Ok(pending) => spawn_population(scope, Arc::clone(&metrics), async move {
                        pending.await.map_err(AcquisitionError::source_failed)
                    }),
                    Err(_) => {
                        let err = AcquisitionError::Aborted("producer panicked".to_string());
                        let stored = metrics.snapshot().words_inserted.to_string();
                        scope.fail_with_fields(
                            &err.to_string(),
                            &[("code", err.code()), ("stored", stored.as_str())],
                        );
                        Readiness::failed(err)
                    }
                }
            }
        };

        Self {
            id,
            index,
            metrics,
            readiness,
        }
    }

    /// Signal that resolves once population has finished.
    ///
    /// Every call returns an equivalent future; none restarts population.
    pub fn ready(&self) -> Readiness {
        self.readiness.clone()
    }

    /// Population state without waiting
    pub fn state(&self) -> PopulationState {
        self.readiness.try_resolve()
    }

    /// Returns true once population has finished successfully
    pub fn is_ready(&self) -> bool {
        self.state() == PopulationState::Ready
    }

    /// Every word, by length
    pub fn get_all(&self) -> LengthQueryResult {
        self.query(LengthRange::all())
    }

    /// Words of exactly `length`
    pub fn get_by_length(&self, length: usize) -> LengthQueryResult {
        self.query(LengthRange::exact(length))
    }

    /// Words with length in `[min, max]`.
    ///
    /// Returns `InvalidRange` when `min > max`.
    pub fn get_by_range(&self, min: usize, max: usize) -> IndexResult<LengthQueryResult> {
        let range = LengthRange::between(min, max).map_err(|e| {
            self.metrics.increment_queries_rejected();
            let view_id = self.id.to_string();
            let reason = e.to_string();
            log_event_with_fields(
                Event::QueryRejected,
                &[("view_id", view_id.as_str()), ("reason", reason.as_str())],
            );
            e
        })?;
        Ok(self.query(range))
    }

    /// Snapshot of the words in `range`, with statistics over that snapshot
    pub fn query(&self, range: LengthRange) -> LengthQueryResult {
        let result = LengthQueryResult::from(self.read_index().snapshot(range));
        self.metrics.increment_queries_executed();

        if Logger::enabled(Severity::Trace) {
            let view_id = self.id.to_string();
            let min = range.min().to_string();
            let max = if range.is_unbounded() {
                "unbounded".to_string()
            } else {
                range.max().to_string()
            };
            let words = result.stats.total_words.to_string();
            Logger::trace(
                Event::QueryExecuted.as_str(),
                &[
                    ("view_id", view_id.as_str()),
                    ("min", min.as_str()),
                    ("max", max.as_str()),
                    ("words", words.as_str()),
                ],
            );
        }

        result
    }

    /// Statistics over the entire index
    pub fn stats(&self) -> LengthStats {
        self.read_index().statistics()
    }

    /// Counters for this view
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Identifier carried on this view's log lines
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Unit used to measure words
    pub fn length_unit(&self) -> LengthUnit {
        self.read_index().length_unit()
    }

    fn read_index(&self) -> RwLockReadGuard<'_, LengthIndex> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Run population and report its outcome through the scope.
///
/// Inside a tokio runtime population runs on its own task. Outside one it
/// runs on whichever executor first awaits the view's readiness.
fn spawn_population<F>(
    scope: ObservationScope,
    metrics: Arc<MetricsRegistry>,
    population: F,
) -> Readiness
where
    F: Future<Output = AcquisitionResult<()>> + Send + 'static,
{
    let observed = async move {
        let outcome = population.await;
        let stored = metrics.snapshot().words_inserted.to_string();
        match &outcome {
            Ok(()) => scope.complete_with_fields(&[("stored", stored.as_str())]),
            Err(err) => scope.fail_with_fields(
                &err.to_string(),
                &[("code", err.code()), ("stored", stored.as_str())],
            ),
        }
        outcome
    };

    match Handle::try_current() {
        Ok(handle) => Readiness::from_task(handle.spawn(observed)),
        Err(_) => Readiness::from_unspawned(observed),
    }
}
