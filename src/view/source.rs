//! Word sources and the sink that feeds the index
//!
//! A view is built from exactly one `WordSource`. All three modes insert
//! through a `WordSink`, which is the only write path into a view's index.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use futures_util::future::{BoxFuture, FutureExt, TryFutureExt};

use super::errors::BoxError;
use crate::index::LengthIndex;
use crate::observability::MetricsRegistry;

/// Maps an offered word to the word to store, or `None` to drop it.
pub type Transform = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Boxed producer: called once with a sink, resolves when it stops offering.
pub type Producer = Box<dyn FnOnce(WordSink) -> BoxFuture<'static, Result<(), BoxError>> + Send>;

/// Where a view's words come from
pub enum WordSource {
    /// A list available now; indexed during construction
    Words(Vec<String>),

    /// A list that arrives later
    Deferred(BoxFuture<'static, Result<Vec<String>, BoxError>>),

    /// A push-style producer with an optional per-word transform
    Producer {
        producer: Producer,
        transform: Option<Transform>,
    },
}

impl WordSource {
    /// An in-memory list
    pub fn words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordSource::Words(words.into_iter().map(Into::into).collect())
    }

    /// A future resolving to a list
    pub fn deferred<F, E>(future: F) -> Self
    where
        F: Future<Output = Result<Vec<String>, E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        WordSource::Deferred(future.map_err(Into::<BoxError>::into).boxed())
    }

    /// A producer that offers words through the sink it is given.
    ///
    /// The producer is invoked exactly once, during view construction. Words
    /// it offers before returning are indexed immediately; the returned
    /// future must resolve only after the last offer. A panic, before or
    /// after it returns, fails readiness with `Aborted`.
    pub fn producer<P, Fut, E>(producer: P) -> Self
    where
        P: FnOnce(WordSink) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        WordSource::Producer {
            producer: boxed_producer(producer),
            transform: None,
        }
    }

    /// A producer whose offered words pass through `transform` first.
    ///
    /// Only words the transform maps to a non-empty string are indexed.
    pub fn producer_with_transform<P, Fut, E, T>(producer: P, transform: T) -> Self
    where
        P: FnOnce(WordSink) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError> + 'static,
        T: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        WordSource::Producer {
            producer: boxed_producer(producer),
            transform: Some(Arc::new(transform)),
        }
    }

    /// Name of the acquisition mode, for logging
    pub fn mode(&self) -> &'static str {
        match self {
            WordSource::Words(_) => "words",
            WordSource::Deferred(_) => "deferred",
            WordSource::Producer { .. } => "producer",
        }
    }
}

fn boxed_producer<P, Fut, E>(producer: P) -> Producer
where
    P: FnOnce(WordSink) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: Into<BoxError> + 'static,
{
    Box::new(move |sink: WordSink| producer(sink).map_err(Into::<BoxError>::into).boxed())
}

impl fmt::Debug for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::Words(words) => f.debug_tuple("Words").field(&words.len()).finish(),
            WordSource::Deferred(_) => f.write_str("Deferred"),
            WordSource::Producer { transform, .. } => f
                .debug_struct("Producer")
                .field("transform", &transform.is_some())
                .finish(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for WordSource {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordSource::words(iter)
    }
}

/// Callback handle given to producers.
///
/// Cheap to clone; every clone writes into the same index.
#[derive(Clone)]
pub struct WordSink {
    index: Arc<RwLock<LengthIndex>>,
    metrics: Arc<MetricsRegistry>,
    transform: Option<Transform>,
}

impl WordSink {
    pub(crate) fn new(index: Arc<RwLock<LengthIndex>>, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            index,
            metrics,
            transform: None,
        }
    }

    pub(crate) fn with_transform(mut self, transform: Option<Transform>) -> Self {
        self.transform = transform;
        self
    }

    /// Offer one word for indexing.
    ///
    /// Returns true if the word was stored. A word is not stored when the
    /// transform drops it or when it is empty.
    pub fn offer(&self, word: impl Into<String>) -> bool {
        let word = word.into();
        let word = match &self.transform {
            Some(transform) => match transform(&word) {
                Some(mapped) if !mapped.is_empty() => mapped,
                _ => {
                    self.metrics.increment_words_dropped();
                    return false;
                }
            },
            None => word,
        };

        let stored = self
            .index
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(word);

        if stored {
            self.metrics.increment_words_inserted();
        } else {
            self.metrics.increment_words_rejected();
        }
        stored
    }

    /// Offer every word from an iterator, returning how many were stored
    pub fn offer_all<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words.into_iter().map(|w| self.offer(w)).filter(|stored| *stored).count()
    }
}

impl fmt::Debug for WordSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordSink")
            .field("transform", &self.transform.is_some())
            .finish()
    }
}
