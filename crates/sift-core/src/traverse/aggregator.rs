//! ErrorAggregator — a shared rendezvous for the outcomes of parallel work.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::sink::{ErrorSink, Field, TracingSink};
use crate::config::AggregatorConfig;
use crate::errors::{CombinedError, ConfigError, TraverseError};
use crate::unique;

/// Everything guarded by the aggregator lock. The error set and the success
/// counter are only ever updated together under one guard.
struct State<E> {
    errors: unique::Errors<E>,
    ok: usize,
}

/// Classify a finished run from its success count and recorded errors.
fn classify<E>(successes: usize, errors: Option<CombinedError<E>>) -> Result<(), TraverseError<E>>
where
    E: Error + 'static,
{
    tracing::debug!(
        target: crate::traverse::TARGET,
        successes = successes,
        distinct_errors = errors.as_ref().map_or(0, CombinedError::len),
        "aggregated outcome"
    );
    match errors {
        None => Ok(()),
        Some(errors) => Err(TraverseError::classify(errors, successes)),
    }
}

/// Thread-safe collector of unique errors and success counts.
///
/// Share it by reference (scoped threads) or `Arc` with any number of
/// workers, each calling [`report`](Self::report) once per unit of work.
/// Each distinct error (by `Display` text) is passed to the sink exactly
/// once. When every worker is done, the single owner calls
/// [`finish`](Self::finish) to classify the run:
///
/// | errors recorded | successes | result                        |
/// |-----------------|-----------|-------------------------------|
/// | none            | any       | `Ok(())`                      |
/// | some            | 0         | `Err(TraverseError::Failed)`  |
/// | some            | > 0       | `Err(TraverseError::Partial)` |
///
/// `finish` consumes the aggregator and `err` needs `&mut self`, so neither
/// can overlap with a `report` call.
pub struct ErrorAggregator<E> {
    state: Mutex<State<E>>,
    sink: Arc<dyn ErrorSink>,
}

impl<E> ErrorAggregator<E>
where
    E: Error + Send + 'static,
{
    pub fn new(sink: Arc<dyn ErrorSink>) -> Self {
        Self {
            state: Mutex::new(State {
                errors: unique::Errors::new(),
                ok: 0,
            }),
            sink,
        }
    }

    /// An aggregator that logs distinct errors via `tracing` at ERROR.
    pub fn with_tracing() -> Self {
        Self::new(Arc::new(TracingSink::default()))
    }

    /// An aggregator that logs distinct errors via `tracing` at the
    /// configured level.
    pub fn from_config(config: &AggregatorConfig) -> Result<Self, ConfigError> {
        let level = config.effective_level()?;
        Ok(Self::new(Arc::new(TracingSink::new(level))))
    }

    fn lock(&self) -> MutexGuard<'_, State<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Report the outcome of one unit of work.
    ///
    /// `None` counts as a success. `Some(err)` is recorded if no error with
    /// the same message was recorded before, in which case it is logged
    /// with `message` and `fields` and `true` is returned. Duplicates and
    /// successes return `false` and log nothing.
    pub fn report(&self, err: Option<E>, message: &str, fields: &[Field<'_>]) -> bool {
        let mut state = self.lock();
        if err.is_none() {
            state.ok += 1;
        }
        if !state.errors.add(err) {
            return false;
        }
        // Runs under the lock after all state updates, so a panicking sink
        // cannot leave the state half-updated.
        if let Some(recorded) = state.errors.as_slice().last() {
            self.sink.on_error(recorded, message, fields);
        }
        true
    }

    /// Report a successful unit of work.
    pub fn success(&self) {
        self.report(None, "", &[]);
    }

    /// Report a failed unit of work. Returns true if the error was new.
    pub fn failure(&self, err: E, message: &str, fields: &[Field<'_>]) -> bool {
        self.report(Some(err), message, fields)
    }

    /// Report `result` and pass through its value on success.
    pub fn record<T>(
        &self,
        result: Result<T, E>,
        message: &str,
        fields: &[Field<'_>],
    ) -> Option<T> {
        match result {
            Ok(value) => {
                self.success();
                Some(value)
            }
            Err(err) => {
                self.failure(err, message, fields);
                None
            }
        }
    }

    /// Number of successful reports so far.
    pub fn success_count(&self) -> usize {
        self.lock().ok
    }

    /// Number of distinct errors recorded so far.
    pub fn error_count(&self) -> usize {
        self.lock().errors.len()
    }

    /// Classify the run. Requires ownership, so every reporter is done.
    pub fn finish(self) -> Result<(), TraverseError<E>> {
        let state = self
            .state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        classify(state.ok, state.errors.into_err())
    }

    /// Classify the run without consuming the aggregator.
    pub fn err(&mut self) -> Result<(), TraverseError<E>>
    where
        E: Clone,
    {
        let state = self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        classify(state.ok, state.errors.err())
    }
}

impl<E> Default for ErrorAggregator<E>
where
    E: Error + Send + 'static,
{
    fn default() -> Self {
        Self::with_tracing()
    }
}

impl<E> fmt::Debug for ErrorAggregator<E>
where
    E: Error + Send + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("ErrorAggregator")
            .field("successes", &state.ok)
            .field("errors", &state.errors)
            .finish_non_exhaustive()
    }
}
