//! Readiness signal shared by every acquisition mode

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::future::{BoxFuture, FutureExt, Shared};
use tokio::task::JoinHandle;

use super::errors::{AcquisitionError, AcquisitionResult};

/// Population state as observed without awaiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationState {
    /// Population still running; queries see partial data
    Pending,
    /// Population finished
    Ready,
    /// Acquisition failed; the index keeps whatever was inserted
    Failed,
}

/// A cloneable future that resolves once population has finished.
///
/// Every clone resolves to the same outcome, and awaiting it never restarts
/// population.
#[derive(Clone)]
pub struct Readiness {
    inner: Shared<BoxFuture<'static, AcquisitionResult<()>>>,
}

impl Readiness {
    /// An already-resolved signal
    pub(crate) fn resolved() -> Self {
        Self::from_future(futures_util::future::ready(Ok(())))
    }

    /// An already-failed signal
    pub(crate) fn failed(error: AcquisitionError) -> Self {
        Self::from_future(futures_util::future::ready(Err(error)))
    }

    /// Wrap the population task's handle.
    ///
    /// A panicking or cancelled task surfaces as `Aborted`.
    pub(crate) fn from_task(handle: JoinHandle<AcquisitionResult<()>>) -> Self {
        Self::from_future(handle.map(|joined| match joined {
            Ok(outcome) => outcome,
            Err(e) if e.is_panic() => Err(AcquisitionError::Aborted(
                "population task panicked".to_string(),
            )),
            Err(e) => Err(AcquisitionError::Aborted(e.to_string())),
        }))
    }

    /// Wrap a population that no task drives.
    ///
    /// It runs on whichever executor awaits the signal; a panic surfaces as
    /// `Aborted`.
    pub(crate) fn from_unspawned<F>(population: F) -> Self
    where
        F: Future<Output = AcquisitionResult<()>> + Send + 'static,
    {
        Self::from_future(AssertUnwindSafe(population).catch_unwind().map(
            |caught| match caught {
                Ok(outcome) => outcome,
                Err(_) => Err(AcquisitionError::Aborted(
                    "population panicked".to_string(),
                )),
            },
        ))
    }

    fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = AcquisitionResult<()>> + Send + 'static,
    {
        Self {
            inner: future.boxed().shared(),
        }
    }

    /// Current state without waiting.
    ///
    /// Reports `Pending` until the signal has been polled to completion at
    /// least once by some holder; `WordLengthView::state` drives that poll.
    pub fn state(&self) -> PopulationState {
        match self.inner.peek() {
            None => PopulationState::Pending,
            Some(Ok(())) => PopulationState::Ready,
            Some(Err(_)) => PopulationState::Failed,
        }
    }

    /// Poll once without a waker, returning the outcome if available.
    pub(crate) fn try_resolve(&self) -> PopulationState {
        if self.inner.peek().is_none() {
            let waker = futures_util::task::noop_waker();
            let mut cx = Context::from_waker(&waker);
            let mut probe = self.inner.clone();
            let _ = Pin::new(&mut probe).poll(&mut cx);
        }
        self.state()
    }
}

impl Future for Readiness {
    type Output = AcquisitionResult<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx)
    }
}

impl std::fmt::Debug for Readiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Readiness")
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolved_is_ready() {
        let readiness = Readiness::resolved();
        assert_eq!(readiness.try_resolve(), PopulationState::Ready);
        assert!(readiness.await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_outcome() {
        let handle = tokio::spawn(async { Err(AcquisitionError::source_failed("boom")) });
        let readiness = Readiness::from_task(handle);
        let other = readiness.clone();

        let first = readiness.await.unwrap_err();
        let second = other.await.unwrap_err();
        assert_eq!(first.to_string(), second.to_string());
    }

    #[tokio::test]
    async fn test_panicking_task_is_aborted() {
        let handle = tokio::spawn(async {
            if true {
                panic!("producer bug");
            }
            Ok(())
        });
        let err = Readiness::from_task(handle).await.unwrap_err();
        assert!(matches!(err, AcquisitionError::Aborted(_)));
    }

    #[test]
    fn test_unspawned_runs_when_awaited() {
        let readiness = Readiness::from_unspawned(async { Ok(()) });
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        runtime.block_on(readiness.clone()).unwrap();
        assert_eq!(readiness.state(), PopulationState::Ready);
    }

    #[test]
    fn test_unspawned_panic_is_aborted() {
        let readiness = Readiness::from_unspawned(async {
            if true {
                panic!("producer bug");
            }
            Ok(())
        });
        assert_eq!(readiness.try_resolve(), PopulationState::Failed);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let err = runtime.block_on(readiness).unwrap_err();
        assert!(matches!(err, AcquisitionError::Aborted(_)));
    }

    #[tokio::test]
    async fn test_pending_until_task_runs() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let _ = rx.await;
            Ok(())
        });
        let readiness = Readiness::from_task(handle);
        assert_eq!(readiness.try_resolve(), PopulationState::Pending);

        tx.send(()).unwrap();
        readiness.clone().await.unwrap();
        assert_eq!(readiness.state(), PopulationState::Ready);
    }
}
