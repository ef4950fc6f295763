//! One-shot completion protocol for remote operations.
//!
//! # Design
//! - Every remote operation hands back an [`OperationHandle`] immediately and runs out-of-band.
//! - A handle resolves exactly once: [`Completer::complete`] consumes the completer, and a
//!   completer dropped without completing resolves the handle as a failure.
//! - There is a single failure kind, [`RemoteFailure`], carrying an opaque message.
//! - No cancellation: dropping a handle only discards the result.

use futures::FutureExt;
use futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;

/// Message used when an operation ends without reporting a result.
pub const ABANDONED_MESSAGE: &str = "operation ended without a result";

/// Opaque failure reported by a remote operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteFailure {
    message: String,
}

impl RemoteFailure {
    /// Build a failure from a human-readable message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Failure reported when the producing side disappeared.
    #[must_use]
    pub fn abandoned() -> Self {
        Self::new(ABANDONED_MESSAGE)
    }

    /// Message supplied by the operation (may be empty).
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Tagged result of a remote operation.
pub type Outcome<T> = Result<T, RemoteFailure>;

/// Create a linked completer/handle pair for an operation about to start.
#[must_use]
pub fn pending<T>() -> (Completer<T>, OperationHandle<T>) {
    let (sender, receiver) = oneshot::channel();
    (Completer { sender }, OperationHandle { receiver })
}

/// Producer side of an operation; resolves its handle exactly once.
#[derive(Debug)]
pub struct Completer<T> {
    sender: oneshot::Sender<Outcome<T>>,
}

impl<T> Completer<T> {
    /// Deliver the operation result. Consumes the completer.
    pub fn complete(self, outcome: Outcome<T>) {
        if self.sender.send(outcome).is_err() {
            tracing::debug!("operation result discarded; handle was dropped");
        }
    }

    /// Deliver a successful payload.
    pub fn succeed(self, payload: T) {
        self.complete(Ok(payload));
    }

    /// Deliver a failure message.
    pub fn fail(self, message: impl Into<String>) {
        self.complete(Err(RemoteFailure::new(message)));
    }
}

/// Consumer side of an operation; a future yielding the tagged result.
#[derive(Debug)]
#[must_use = "an operation handle does nothing unless awaited"]
pub struct OperationHandle<T> {
    receiver: oneshot::Receiver<Outcome<T>>,
}

impl<T> Future for OperationHandle<T> {
    type Output = Outcome<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.receiver.poll_unpin(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(oneshot::Canceled)) => Poll::Ready(Err(RemoteFailure::abandoned())),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn handle_resolves_with_success_payload() {
        let (completer, handle) = pending::<u32>();
        completer.succeed(7);
        assert_eq!(block_on(handle), Ok(7));
    }

    #[test]
    fn handle_resolves_with_failure_message() {
        let (completer, handle) = pending::<u32>();
        completer.fail("disk full");
        let failure = block_on(handle).expect_err("failure");
        assert_eq!(failure.message(), "disk full");
        assert_eq!(failure.to_string(), "disk full");
    }

    #[test]
    fn dropped_completer_still_resolves_once() {
        let (completer, handle) = pending::<u32>();
        drop(completer);
        assert_eq!(block_on(handle), Err(RemoteFailure::abandoned()));
    }

    #[test]
    fn handle_stays_pending_until_completed() {
        let (completer, mut handle) = pending::<&str>();
        assert!((&mut handle).now_or_never().is_none());
        completer.succeed("done");
        assert_eq!(block_on(handle), Ok("done"));
    }

    #[test]
    fn completing_after_handle_drop_is_harmless() {
        let (completer, handle) = pending::<u32>();
        drop(handle);
        completer.succeed(1);
    }
}
