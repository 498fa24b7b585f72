//! # Subscription handle.
//!
//! [`Subscription`] is the opaque cancellation handle returned by
//! [`SourceExt::subscribe`](crate::SourceExt::subscribe). It owns the
//! subscription's root [`CancellationToken`]; every operator in the chain
//! derives a child token from it, so one `cancel()` tears down the whole
//! chain: pending scheduler delays are dropped and the active upstream
//! subscription is cancelled.
//!
//! ## Rules
//! - `cancel()` is **idempotent** — repeated calls are no-ops.
//! - Cancellation is **silent** — the observer receives no terminal
//!   notification for it.
//! - Dropping the handle does *not* cancel the subscription; the stream keeps
//!   running detached until terminal.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancellation handle for one active subscription.
pub struct Subscription {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Subscription {
    pub(crate) fn new(token: CancellationToken, handle: JoinHandle<()>) -> Self {
        Self { token, handle }
    }

    /// Stops the subscription: no further notifications reach the observer,
    /// pending delays are cancelled, and cancellation propagates upstream.
    ///
    /// Idempotent; calling after the stream already terminated is a no-op.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once [`cancel`](Subscription::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Waits until the delivery loop has fully stopped (terminal delivered or
    /// cancellation observed). Useful in tests and orderly shutdown paths.
    pub async fn join(self) {
        let _ = self.handle.await;
    }
}
