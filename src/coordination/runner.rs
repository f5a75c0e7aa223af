// SPDX-License-Identifier: MPL-2.0
//! Single-operation runner with observable pending/error state.
//!
//! A feature view owns one [`AsyncRunner`] and routes every network call
//! through [`AsyncRunner::execute`]. The runner never lets a failure escape:
//! it turns it into an error message on the shared [`OperationState`] and a
//! `None` result.
//!
//! # Overlapping invocations
//!
//! The runner tracks one logical operation. Two invocations started before
//! the first settles write the same fields and the last write wins. Callers
//! that need per-invocation outcomes use [`AsyncRunner::execute_isolated`],
//! which hands back the outcome of that call alone.

use crate::api::{ApiError, UNKNOWN_ERROR};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Extracts the user-facing message from a failure.
pub trait FailureMessage {
    fn failure_message(&self) -> String;
}

impl FailureMessage for ApiError {
    fn failure_message(&self) -> String {
        self.message()
    }
}

impl FailureMessage for String {
    fn failure_message(&self) -> String {
        if self.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            self.clone()
        }
    }
}

impl FailureMessage for &'static str {
    fn failure_message(&self) -> String {
        (*self).to_string().failure_message()
    }
}

/// Observable state of the operation tracked by a runner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationState {
    /// True strictly between invocation start and settlement.
    pub pending: bool,
    /// Message of the most recent failure; cleared when a new invocation starts.
    pub error: Option<String>,
    /// Same-tick mirror of `error`, reset at every invocation start.
    pub last_error: Option<String>,
}

/// Runs one network operation at a time and records its outcome.
///
/// Cloning yields another handle on the same state.
#[derive(Debug, Clone, Default)]
pub struct AsyncRunner {
    state: Arc<Mutex<OperationState>>,
}

impl AsyncRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state, for rendering.
    #[must_use]
    pub fn state(&self) -> OperationState {
        lock(&self.state).clone()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        lock(&self.state).pending
    }

    /// Error shown by the view.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        lock(&self.state).error.clone()
    }

    /// Message of the most recently settled invocation if it failed.
    ///
    /// This is the value a call site reads right after awaiting
    /// [`execute`](Self::execute) to decide between "failed" and "succeeded
    /// without a result".
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        lock(&self.state).last_error.clone()
    }

    /// Clears both error fields, e.g. when the user dismisses the error block.
    pub fn clear_error(&self) {
        let mut state = lock(&self.state);
        state.error = None;
        state.last_error = None;
    }

    /// Starts `operation` and returns a future resolving to its result.
    ///
    /// The start is recorded synchronously: once this returns, `pending` is
    /// true and both error fields are cleared. The returned future resolves to
    /// `Some(value)` on success and `None` on failure, with the failure
    /// message stored in `error` and `last_error`. `pending` is cleared when
    /// the future completes or is dropped.
    pub fn execute<F, Fut, T, E>(&self, operation: F) -> impl Future<Output = Option<T>> + Send + 'static
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: FailureMessage + Send + 'static,
    {
        let outcome = self.execute_isolated(operation);
        async move { outcome.await.ok() }
    }

    /// Like [`execute`](Self::execute) but also returns this invocation's own
    /// outcome, independent of what overlapping invocations write.
    pub fn execute_isolated<F, Fut, T, E>(
        &self,
        operation: F,
    ) -> impl Future<Output = Result<T, String>> + Send + 'static
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: FailureMessage + Send + 'static,
    {
        self.begin();
        let settlement = Settlement::new(Arc::downgrade(&self.state));
        let future = operation();

        async move {
            let outcome = future.await.map_err(|err| err.failure_message());
            settlement.settle(outcome.as_ref().err().cloned());
            outcome
        }
    }

    fn begin(&self) {
        let mut state = lock(&self.state);
        state.pending = true;
        state.error = None;
        state.last_error = None;
        tracing::debug!("operation started");
    }
}

/// Clears `pending` exactly once per invocation, even if the future is
/// dropped before it completes.
struct Settlement {
    state: Weak<Mutex<OperationState>>,
    settled: bool,
}

impl Settlement {
    fn new(state: Weak<Mutex<OperationState>>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self, failure: Option<String>) {
        self.settled = true;

        let Some(state) = self.state.upgrade() else {
            tracing::debug!("operation settled after its runner was dropped");
            return;
        };
        let mut state = lock(&state);
        state.pending = false;
        if let Some(message) = failure {
            tracing::warn!(error = %message, "operation failed");
            state.error = Some(message.clone());
            state.last_error = Some(message);
        } else {
            tracing::debug!("operation succeeded");
        }
    }
}

impl Drop for Settlement {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Some(state) = self.state.upgrade() {
            lock(&state).pending = false;
            tracing::debug!("operation dropped before settlement");
        }
    }
}

fn lock(state: &Mutex<OperationState>) -> MutexGuard<'_, OperationState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::sync::oneshot;

    fn detail(value: serde_json::Value) -> ApiError {
        ApiError::status(422, json!({ "detail": value }))
    }

    #[tokio::test]
    async fn success_returns_value_and_clears_pending() {
        let runner = AsyncRunner::new();
        let observer = runner.clone();

        let future = runner.execute(move || async move {
            assert!(observer.is_pending(), "pending while the operation runs");
            Ok::<_, ApiError>(42)
        });
        assert!(runner.is_pending());

        assert_eq!(future.await, Some(42));
        assert_eq!(runner.state(), OperationState::default());
    }

    #[tokio::test]
    async fn string_detail_sets_both_error_fields() {
        let runner = AsyncRunner::new();

        let result = runner
            .execute(|| async { Err::<(), _>(detail(json!("X"))) })
            .await;

        assert_eq!(result, None);
        assert!(!runner.is_pending());
        assert_eq!(runner.error().as_deref(), Some("X"));
        assert_eq!(runner.last_error().as_deref(), Some("X"));
    }

    #[tokio::test]
    async fn structured_detail_is_stringified() {
        let runner = AsyncRunner::new();

        runner
            .execute(|| async { Err::<(), _>(detail(json!({ "field": "email", "msg": "invalid" }))) })
            .await;

        let message = runner.last_error().expect("failure recorded");
        assert!(message.contains("email"));
        assert!(message.contains("invalid"));
        assert_ne!(message, "[object Object]");
    }

    #[tokio::test]
    async fn generic_failure_without_text_uses_fallback() {
        let runner = AsyncRunner::new();

        runner
            .execute(|| async { Err::<(), _>(String::new()) })
            .await;

        assert_eq!(runner.last_error().as_deref(), Some(UNKNOWN_ERROR));
    }

    #[tokio::test]
    async fn new_invocation_resets_errors_before_settling() {
        let runner = AsyncRunner::new();
        runner
            .execute(|| async { Err::<(), _>("first failure") })
            .await;
        assert!(runner.last_error().is_some());

        let (release, gate) = oneshot::channel::<()>();
        let second = runner.execute(move || async move {
            let _ = gate.await;
            Ok::<_, ApiError>("done")
        });

        let during = runner.state();
        assert!(during.pending);
        assert_eq!(during.error, None);
        assert_eq!(during.last_error, None);

        let _ = release.send(());
        assert_eq!(second.await, Some("done"));
        assert_eq!(runner.last_error(), None);
    }

    #[tokio::test]
    async fn success_after_failure_leaves_no_error() {
        let runner = AsyncRunner::new();
        runner.execute(|| async { Err::<(), _>("boom") }).await;
        runner.execute(|| async { Ok::<_, ApiError>(()) }).await;

        assert_eq!(runner.error(), None);
        assert_eq!(runner.last_error(), None);
    }

    #[tokio::test]
    async fn dropped_operation_does_not_leave_pending_stuck() {
        let runner = AsyncRunner::new();
        let future = runner.execute(|| std::future::pending::<Result<(), ApiError>>());
        assert!(runner.is_pending());

        drop(future);
        assert!(!runner.is_pending());
    }

    #[tokio::test]
    async fn settlement_after_runner_dropped_still_returns_value() {
        let runner = AsyncRunner::new();
        let future = runner.execute(|| async { Ok::<_, ApiError>(7) });
        drop(runner);

        assert_eq!(future.await, Some(7));
    }

    #[tokio::test]
    async fn isolated_outcome_survives_overlapping_writes() {
        let runner = AsyncRunner::new();
        let (release_first, gate) = oneshot::channel::<()>();

        let first = runner.execute_isolated(move || async move {
            let _ = gate.await;
            Err::<(), _>("first failed")
        });
        let second = runner.execute_isolated(|| async { Ok::<_, ApiError>(()) });

        assert_eq!(second.await, Ok(()));
        // The second settlement already cleared pending even though the first
        // invocation is still in flight: last write wins.
        assert!(!runner.is_pending());

        let _ = release_first.send(());
        assert_eq!(first.await, Err("first failed".to_string()));
        assert_eq!(runner.last_error().as_deref(), Some("first failed"));
    }

    #[tokio::test]
    async fn clear_error_resets_both_fields() {
        let runner = AsyncRunner::new();
        runner.execute(|| async { Err::<(), _>("boom") }).await;

        runner.clear_error();
        assert_eq!(runner.state(), OperationState::default());
    }
}
