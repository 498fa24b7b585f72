//! # Per-subscription notification channel.
//!
//! A subscription connects a running producer to its consumer through a
//! bounded [`tokio::sync::mpsc`] channel carrying [`Notification`]s. This
//! module wraps the two ends:
//!
//! - [`Emitter`] — producer end, used inside [`Source::run`](crate::Source::run).
//!   Gates the terminal invariant: after an `Error` or `Complete` has been
//!   pushed, further pushes are ignored.
//! - [`Feed`] — consumer end, used by operators to read their upstream.
//!   Dropping a `Feed` cancels the upstream subscription (cancellation flows
//!   consumer → operator → producer).
//!
//! ## Rules
//! - **Backpressure, not loss**: `Emitter` pushes await channel capacity;
//!   notifications are never dropped while the consumer is alive.
//! - **Exactly one terminal**: at most one `Error`/`Complete` crosses the
//!   channel per subscription.
//! - **Detached consumer**: once the `Feed` is dropped, every push returns
//!   `false` and a cooperative producer stops promptly.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::DEFAULT_CHANNEL_CAPACITY;
use crate::error::StreamError;
use crate::notify::Notification;
use crate::sources::SourceRef;

/// Producer end of a subscription's notification channel.
///
/// Handed to [`Source::run`](crate::Source::run); the source pushes zero or
/// more values followed by exactly one terminal notification. Pushes after a
/// terminal are ignored and report `false`.
pub struct Emitter<T> {
    tx: mpsc::Sender<Notification<T>>,
    done: bool,
}

impl<T: Send + 'static> Emitter<T> {
    pub(crate) fn new(tx: mpsc::Sender<Notification<T>>) -> Self {
        Self { tx, done: false }
    }

    /// Pushes a value notification.
    ///
    /// Returns `false` if the consumer is gone or a terminal was already
    /// pushed; producers should stop promptly on `false`.
    pub async fn value(&mut self, value: T) -> bool {
        self.push(Notification::Value(value)).await
    }

    /// Pushes a terminal error notification.
    pub async fn error(&mut self, error: StreamError) -> bool {
        self.push(Notification::Error(error)).await
    }

    /// Pushes the terminal completion notification.
    pub async fn complete(&mut self) -> bool {
        self.push(Notification::Complete).await
    }

    /// Pushes an already-tagged notification unchanged.
    ///
    /// Useful when forwarding another stream's output verbatim.
    pub async fn forward(&mut self, notification: Notification<T>) -> bool {
        self.push(notification).await
    }

    /// Returns `true` once a terminal notification has been pushed
    /// (or the consumer detached).
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.done
    }

    async fn push(&mut self, notification: Notification<T>) -> bool {
        if self.done {
            return false;
        }
        let terminal = notification.is_terminal();
        match self.tx.send(notification).await {
            Ok(()) => {
                if terminal {
                    self.done = true;
                }
                true
            }
            Err(_detached) => {
                self.done = true;
                false
            }
        }
    }
}

/// Consumer end of an upstream subscription.
///
/// Operators read their upstream through a `Feed`. After a terminal
/// notification has been received, or when the producer vanished without one
/// (cancellation), [`Feed::recv`] yields `None`.
pub(crate) struct Feed<T> {
    rx: mpsc::Receiver<Notification<T>>,
    token: CancellationToken,
    done: bool,
}

impl<T> Feed<T> {
    /// Receives the next notification from upstream.
    ///
    /// - `Some(n)` — next notification in source order; `n.is_terminal()`
    ///   marks the last one.
    /// - `None` — the upstream stopped silently (cancelled) or a terminal
    ///   was already consumed.
    pub(crate) async fn recv(&mut self) -> Option<Notification<T>> {
        if self.done {
            return None;
        }
        let notification = self.rx.recv().await?;
        if notification.is_terminal() {
            self.done = true;
        }
        Some(notification)
    }
}

impl<T> Drop for Feed<T> {
    fn drop(&mut self) {
        // Consumer went away: propagate cancellation upstream.
        self.token.cancel();
    }
}

/// Opens a subscription to `source` with the baseline channel capacity.
pub(crate) fn open<T: Send + 'static>(
    source: SourceRef<T>,
    parent: &CancellationToken,
) -> Feed<T> {
    open_with(source, parent, DEFAULT_CHANNEL_CAPACITY)
}

/// Opens a subscription to `source`, spawning its producer task.
///
/// The producer receives a child token of `parent`: cancelling the parent
/// (or dropping the returned `Feed`) stops the producer cooperatively.
pub(crate) fn open_with<T: Send + 'static>(
    source: SourceRef<T>,
    parent: &CancellationToken,
    capacity: usize,
) -> Feed<T> {
    let token = parent.child_token();
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let run_token = token.clone();
    tokio::spawn(async move {
        source.run(Emitter::new(tx), run_token).await;
    });
    Feed {
        rx,
        token,
        done: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emitter_ignores_pushes_after_complete() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut emitter = Emitter::new(tx);

        assert!(emitter.complete().await);
        assert!(emitter.is_terminated());
        assert!(!emitter.value(1).await);
        assert!(!emitter.error(StreamError::fail("late")).await);
        drop(emitter);

        assert!(matches!(rx.recv().await, Some(Notification::Complete)));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn emitter_ignores_pushes_after_error() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut emitter = Emitter::new(tx);

        assert!(emitter.value(1).await);
        assert!(emitter.error(StreamError::fail("boom")).await);
        assert!(!emitter.complete().await);
        drop(emitter);

        assert!(matches!(rx.recv().await, Some(Notification::Value(1))));
        assert!(matches!(rx.recv().await, Some(Notification::Error(_))));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn emitter_reports_detached_consumer() {
        let (tx, rx) = mpsc::channel(8);
        let mut emitter = Emitter::new(tx);
        drop(rx);

        assert!(!emitter.value(1).await);
        assert!(emitter.is_terminated());
    }
}
