//! Bounded fan-out of independent units of work.
//!
//! A batch is either a function applied to a list of arguments or a list of
//! pre-bound futures. Units run on the tokio runtime, at most `workers` at a
//! time, and results are drained in completion order. The first failing
//! unit observed ends collection; the rest are detached and keep running.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::error::SyncError;

/// A pre-bound unit of work.
pub type Unit<T> = BoxFuture<'static, Result<T, SyncError>>;

#[must_use = "a batch does nothing until `run` is awaited"]
pub struct Concurrently<T> {
    workers: usize,
    timeout: Option<Duration>,
    mapped: Option<Vec<Unit<T>>>,
    partials: Option<Vec<Unit<T>>>,
}

impl<T: Send + 'static> Concurrently<T> {
    /// Batch with at most `workers` units in flight (at least one).
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            timeout: None,
            mapped: None,
            partials: None,
        }
    }

    /// Fail any unit that runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// One unit per argument, each running `f(arg)`.
    pub fn with_fn<A, F, Fut>(mut self, f: F, args: impl IntoIterator<Item = A>) -> Self
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, SyncError>> + Send + 'static,
    {
        self.mapped = Some(args.into_iter().map(|arg| f(arg).boxed()).collect());
        self
    }

    pub fn with_partials(mut self, partials: impl IntoIterator<Item = Unit<T>>) -> Self {
        self.partials = Some(partials.into_iter().collect());
        self
    }

    /// Run every unit and collect results in completion order.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::InvalidBatch`] before scheduling anything when
    /// both or neither input shapes were supplied, otherwise the first
    /// unit failure observed.
    pub async fn run(self) -> Result<Vec<T>, SyncError> {
        let units = match (self.mapped, self.partials) {
            (Some(units), None) | (None, Some(units)) => units,
            (Some(_), Some(_)) => {
                return Err(SyncError::InvalidBatch(
                    "supply either a function with arguments or partials, not both",
                ));
            }
            (None, None) => {
                return Err(SyncError::InvalidBatch(
                    "supply a function with arguments or partials",
                ));
            }
        };
        if units.is_empty() {
            return Ok(Vec::new());
        }

        let total = units.len();
        tracing::debug!(units = total, workers = self.workers, "running batch");

        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut set = JoinSet::new();
        for unit in units {
            let permits = Arc::clone(&semaphore);
            let timeout = self.timeout;
            set.spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|_| SyncError::PoolClosed)?;
                match timeout {
                    Some(limit) => tokio::time::timeout(limit, unit)
                        .await
                        .map_err(|_| SyncError::UnitTimedOut(limit))?,
                    None => unit.await,
                }
            });
        }

        let mut results = Vec::with_capacity(total);
        while let Some(joined) = set.join_next().await {
            let outcome = joined.map_err(SyncError::from).and_then(|r| r);
            match outcome {
                Ok(value) => results.push(value),
                Err(error) => {
                    tracing::warn!(
                        %error,
                        completed = results.len(),
                        remaining = set.len(),
                        "unit failed; abandoning batch"
                    );
                    set.detach_all();
                    return Err(error);
                }
            }
        }
        Ok(results)
    }
}
