//! # Cold stream abstraction.
//!
//! This module defines the [`Source`] trait — the minimal push-based stream
//! contract every operator builds on — and the delivery loop that drives one
//! subscription from a source into an [`Observer`].
//!
//! A source is **cold**: every subscription re-invokes [`Source::run`],
//! producing an independent execution with its own state. That property is
//! what lets [retry](crate::SourceExt::retry_with_delay) and
//! [repeat](crate::SourceExt::repeat_while) re-subscribe safely; making the
//! re-execution idempotent is the source author's responsibility.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//! use streamvisor::{Emitter, Source};
//!
//! struct Countdown;
//!
//! #[async_trait]
//! impl Source<u32> for Countdown {
//!     fn name(&self) -> &str { "countdown" }
//!
//!     async fn run(&self, mut out: Emitter<u32>, ctx: CancellationToken) {
//!         for n in (0..3).rev() {
//!             if ctx.is_cancelled() || !out.value(n).await {
//!                 return;
//!             }
//!         }
//!         out.complete().await;
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::notify::{open_with, Emitter, ObserverRef};

/// Shared handle to a source (`Arc<dyn Source>`).
///
/// Cheap to clone; cloning shares the producing logic, not a subscription.
pub type SourceRef<T> = Arc<dyn Source<T>>;

/// # Cold, cancelable push-based stream.
///
/// One call to [`run`](Source::run) is one subscription: the implementation
/// pushes zero or more values into `out`, then exactly one terminal
/// notification, honoring `ctx` for cooperative cancellation.
///
/// ## Rules
/// - Stop promptly when `ctx` is cancelled or a push returns `false`;
///   **do not** push a terminal on cancellation (disposal is silent).
/// - Never push after a terminal ([`Emitter`] ignores it anyway).
/// - Keep all mutable subscription state inside `run` — the source itself is
///   shared across concurrent subscriptions.
#[async_trait]
pub trait Source<T: Send + 'static>: Send + Sync + 'static {
    /// Returns a stable, human-readable source name.
    fn name(&self) -> &str {
        "source"
    }

    /// Drives one subscription until a terminal notification or cancellation.
    async fn run(&self, out: Emitter<T>, ctx: CancellationToken);
}

/// Delivery loop for one consumer-facing subscription.
///
/// Opens a feed on `source` and forwards notifications to `observer` until
/// the terminal notification, upstream silence, or cancellation. Cancellation
/// wins over queued notifications: once `token` is cancelled nothing further
/// reaches the observer.
pub(crate) async fn deliver<T: Send + 'static>(
    source: SourceRef<T>,
    observer: ObserverRef<T>,
    token: CancellationToken,
    capacity: usize,
) {
    let mut feed = open_with(source, &token, capacity);
    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            next = feed.recv() => match next {
                Some(notification) => {
                    let terminal = notification.is_terminal();
                    observer.on_notification(notification).await;
                    if terminal {
                        break;
                    }
                }
                None => break,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::Collector;
    use crate::ops::SourceExt;
    use crate::sources::SourceFn;

    #[tokio::test]
    async fn cancelled_subscription_stops_delivery_silently() {
        // Producer that emits forever until cancelled.
        let source: SourceRef<u64> = SourceFn::arc("ticker", |mut out: Emitter<u64>, ctx: CancellationToken| async move {
            let mut n = 0u64;
            loop {
                if ctx.is_cancelled() || !out.value(n).await {
                    return;
                }
                n += 1;
                tokio::task::yield_now().await;
            }
        });

        let collector = Collector::arc();
        let sub = source.subscribe(collector.clone());

        // Let a few values through, then dispose.
        while collector.values().len() < 3 {
            tokio::task::yield_now().await;
        }
        sub.cancel();
        sub.join().await;

        // Disposal is silent: no terminal notification was synthesized.
        assert!(!collector.is_completed());
        assert!(collector.error().is_none());
    }
}
