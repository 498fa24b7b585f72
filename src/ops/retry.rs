//! # Delayed, bounded retry with typed-error discrimination.
//!
//! [`RetryWithDelay`] re-subscribes a failing cold source according to a
//! [`RetryPolicy`], waiting a fixed delay between attempts on an injected
//! [`Scheduler`](crate::Scheduler).
//!
//! ## Attempt flow
//! ```text
//! subscribe source (attempt 1)
//!   ├─ Value / Complete ────► forward unchanged
//!   └─ Error
//!        ├─ not matched ────► forward (fail-fast, callback not invoked)
//!        └─ matched ────────► invoke on_error callback, then:
//!             ├─ max_attempts == 1 ─► forward error (never retry)
//!             ├─ max_attempts <= 0 ─► delay, re-subscribe, forever
//!             └─ attempt < max ─────► delay, re-subscribe
//!                attempt == max ────► forward error
//! ```
//!
//! ## Rules
//! - Attempts run **sequentially**; one subscription at a time.
//! - The attempt counter lives inside one `run` invocation — concurrent
//!   subscribers to the same composition never share it.
//! - Cancellation during the delay drops the pending delay; cancellation
//!   during an attempt propagates to that attempt's upstream subscription.
//! - Each re-subscription re-runs the source from scratch; tolerating
//!   repeated execution is the source's responsibility.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::select;
use tokio_util::sync::CancellationToken;

use crate::error::{ErrorKind, StreamError};
use crate::notify::{open, Emitter, Notification};
use crate::scheduler::SchedulerRef;
use crate::sources::{Source, SourceRef};

/// Retry policy for a [`RetryWithDelay`] composition.
///
/// Constructed once per composition and reused across all attempts of one
/// subscription. The attempt counter is **not** part of the policy; a fresh
/// one is created per subscription.
#[derive(Clone)]
pub struct RetryPolicy {
    /// Maximum number of subscriptions to the source, counting the first.
    ///
    /// - `1` → never retry (the error is forwarded on first failure)
    /// - `<= 0` → retry forever; only cancellation stops it
    /// - `n > 1` → up to `n` subscriptions total
    pub max_attempts: i32,
    /// Fixed delay between a failed attempt and the next subscription.
    pub delay: Duration,
    matcher: Option<Arc<dyn Fn(&StreamError) -> bool + Send + Sync>>,
    on_error: Option<Arc<dyn Fn(&StreamError) + Send + Sync>>,
}

impl RetryPolicy {
    /// Creates a policy matching **every** error (no matcher), without an
    /// error callback.
    pub fn new(max_attempts: i32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
            matcher: None,
            on_error: None,
        }
    }

    /// Restricts the policy to errors matching `matcher`.
    ///
    /// Non-matching errors are forwarded immediately and never retried.
    pub fn with_matcher(
        mut self,
        matcher: impl Fn(&StreamError) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.matcher = Some(Arc::new(matcher));
        self
    }

    /// Restricts the policy to errors of the given [`ErrorKind`].
    pub fn with_kind(self, kind: ErrorKind) -> Self {
        self.with_matcher(move |e| e.kind() == kind)
    }

    /// Attaches a callback invoked synchronously for every **matched** error,
    /// before the retry decision.
    pub fn with_on_error(
        mut self,
        on_error: impl Fn(&StreamError) + Send + Sync + 'static,
    ) -> Self {
        self.on_error = Some(Arc::new(on_error));
        self
    }

    /// Returns `true` if `error` is subject to this policy.
    pub(crate) fn matches(&self, error: &StreamError) -> bool {
        match &self.matcher {
            Some(matcher) => matcher(error),
            None => true,
        }
    }

    /// Invokes the error callback, if any.
    pub(crate) fn notify(&self, error: &StreamError) {
        if let Some(on_error) = &self.on_error {
            on_error(error);
        }
    }

    /// Decides whether another attempt may follow `attempt` (1-based, the
    /// subscription that just failed).
    pub(crate) fn should_retry(&self, attempt: u64) -> bool {
        if self.max_attempts == 1 {
            return false;
        }
        if self.max_attempts <= 0 {
            // Unbounded: the counter is never consulted.
            return true;
        }
        attempt < self.max_attempts as u64
    }
}

impl Default for RetryPolicy {
    /// Returns a policy with:
    /// - `max_attempts = 3`;
    /// - `delay = 100ms`;
    /// - no matcher (every error is retried);
    /// - no error callback.
    fn default() -> Self {
        Self::new(3, Duration::from_millis(100))
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("delay", &self.delay)
            .field("matcher", &self.matcher.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// Operator that retries a failing source with a per-attempt delay.
///
/// Built via [`SourceExt::retry_with_delay`](crate::SourceExt::retry_with_delay).
pub struct RetryWithDelay<T> {
    inner: SourceRef<T>,
    policy: RetryPolicy,
    scheduler: SchedulerRef,
}

impl<T> RetryWithDelay<T> {
    /// Creates the operator around `inner`.
    pub fn new(inner: SourceRef<T>, policy: RetryPolicy, scheduler: SchedulerRef) -> Self {
        Self {
            inner,
            policy,
            scheduler,
        }
    }
}

#[async_trait]
impl<T: Send + 'static> Source<T> for RetryWithDelay<T> {
    fn name(&self) -> &str {
        "retry_with_delay"
    }

    async fn run(&self, mut out: Emitter<T>, ctx: CancellationToken) {
        // Explicit loop with a per-subscription counter instead of recursive
        // re-wrapping: unbounded retry must not accumulate state.
        let mut attempt: u64 = 1;
        loop {
            let mut feed = open(self.inner.clone(), &ctx);
            let error = loop {
                match feed.recv().await {
                    Some(Notification::Value(value)) => {
                        if !out.value(value).await {
                            return;
                        }
                    }
                    Some(Notification::Complete) => {
                        out.complete().await;
                        return;
                    }
                    Some(Notification::Error(error)) => break error,
                    // Upstream stopped without a terminal: cancelled.
                    None => return,
                }
            };

            if !self.policy.matches(&error) {
                out.error(error).await;
                return;
            }
            self.policy.notify(&error);
            if !self.policy.should_retry(attempt) {
                out.error(error).await;
                return;
            }
            attempt += 1;

            select! {
                _ = self.scheduler.delay(self.policy.delay) => {}
                _ = ctx.cancelled() => return,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::Collector;
    use crate::ops::SourceExt;
    use crate::scheduler::{RecordingScheduler, TokioScheduler};
    use crate::sources::SourceFn;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time;

    /// Source that fails `failures` times with a retryable error, then emits
    /// `value` and completes. Counts subscriptions.
    fn flaky(
        failures: usize,
        value: u32,
        subscriptions: Arc<AtomicUsize>,
    ) -> SourceRef<u32> {
        SourceFn::arc("flaky", move |mut out: Emitter<u32>, _ctx| {
            let subscriptions = subscriptions.clone();
            async move {
                let n = subscriptions.fetch_add(1, Ordering::SeqCst) + 1;
                if n <= failures {
                    out.error(StreamError::fail("boom")).await;
                } else if out.value(value).await {
                    out.complete().await;
                }
            }
        })
    }

    #[tokio::test]
    async fn single_attempt_forwards_error_without_scheduling() {
        let subscriptions = Arc::new(AtomicUsize::new(0));
        let source = flaky(usize::MAX, 0, subscriptions.clone());

        let callbacks = Arc::new(AtomicUsize::new(0));
        let counted = callbacks.clone();
        let policy = RetryPolicy::new(1, Duration::from_millis(100))
            .with_on_error(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
            });

        let scheduler = RecordingScheduler::arc();
        let collector = Collector::arc();
        source
            .retry_with_delay(policy, scheduler.clone())
            .subscribe(collector.clone())
            .join()
            .await;

        assert!(matches!(collector.error(), Some(StreamError::Fail { .. })));
        assert_eq!(callbacks.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.count(), 0);
        assert_eq!(subscriptions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn bounded_retry_recovers_after_transient_failures() {
        let subscriptions = Arc::new(AtomicUsize::new(0));
        let source = flaky(2, 7, subscriptions.clone());

        let callbacks = Arc::new(AtomicUsize::new(0));
        let counted = callbacks.clone();
        let policy = RetryPolicy::new(3, Duration::from_millis(100))
            .with_on_error(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
            });

        let scheduler = RecordingScheduler::arc();
        let collector = Collector::arc();
        source
            .retry_with_delay(policy, scheduler.clone())
            .subscribe(collector.clone())
            .join()
            .await;

        assert_eq!(collector.values(), vec![7]);
        assert!(collector.is_completed());
        assert_eq!(callbacks.load(Ordering::SeqCst), 2);
        assert_eq!(
            scheduler.recorded(),
            vec![Duration::from_millis(100), Duration::from_millis(100)]
        );
        assert_eq!(subscriptions.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn bounded_retry_forwards_error_once_attempts_are_exhausted() {
        let subscriptions = Arc::new(AtomicUsize::new(0));
        let source = flaky(usize::MAX, 0, subscriptions.clone());

        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        let scheduler = RecordingScheduler::arc();
        let collector = Collector::arc();
        source
            .retry_with_delay(policy, scheduler.clone())
            .subscribe(collector.clone())
            .join()
            .await;

        assert!(collector.error().is_some());
        assert!(!collector.is_completed());
        assert_eq!(subscriptions.load(Ordering::SeqCst), 3);
        assert_eq!(scheduler.count(), 2);
    }

    #[tokio::test]
    async fn unmatched_error_is_forwarded_without_retry_or_callback() {
        let subscriptions = Arc::new(AtomicUsize::new(0));
        let counted = subscriptions.clone();
        let source: SourceRef<u32> =
            SourceFn::arc("fatal", move |mut out: Emitter<u32>, _ctx| {
                let counted = counted.clone();
                async move {
                    counted.fetch_add(1, Ordering::SeqCst);
                    out.error(StreamError::fatal("corrupt state")).await;
                }
            });

        let callbacks = Arc::new(AtomicUsize::new(0));
        let counted = callbacks.clone();
        // Unbounded policy, but it only matches retryable failures.
        let policy = RetryPolicy::new(0, Duration::from_millis(10))
            .with_kind(ErrorKind::Fail)
            .with_on_error(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
            });

        let scheduler = RecordingScheduler::arc();
        let collector = Collector::arc();
        source
            .retry_with_delay(policy, scheduler.clone())
            .subscribe(collector.clone())
            .join()
            .await;

        assert!(matches!(collector.error(), Some(StreamError::Fatal { .. })));
        assert_eq!(callbacks.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.count(), 0);
        assert_eq!(subscriptions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unbounded_retry_stops_after_cancel() {
        let subscriptions = Arc::new(AtomicUsize::new(0));
        let source = flaky(usize::MAX, 0, subscriptions.clone());

        let policy = RetryPolicy::new(0, Duration::from_millis(50));
        let retried = source.retry_with_delay(policy, TokioScheduler::arc());
        let collector = Collector::arc();
        let sub = retried.subscribe(collector.clone());

        // Let several attempts happen on the paused clock.
        time::sleep(Duration::from_millis(175)).await;
        sub.cancel();
        sub.join().await;

        // Give the operator task a beat to observe cancellation.
        time::sleep(Duration::from_millis(10)).await;
        let after_cancel = subscriptions.load(Ordering::SeqCst);
        assert!(after_cancel >= 2, "expected repeated attempts, saw {after_cancel}");

        // The pending delayed re-subscription must not fire after disposal.
        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(subscriptions.load(Ordering::SeqCst), after_cancel);
        assert!(!collector.is_terminated());
    }

    #[tokio::test]
    async fn values_already_delivered_are_not_rolled_back() {
        // The source emits one value before each failure; retry re-runs it
        // from scratch, so early values are delivered again.
        let subscriptions = Arc::new(AtomicUsize::new(0));
        let counted = subscriptions.clone();
        let source: SourceRef<u32> =
            SourceFn::arc("chatty", move |mut out: Emitter<u32>, _ctx| {
                let counted = counted.clone();
                async move {
                    let n = counted.fetch_add(1, Ordering::SeqCst) + 1;
                    if !out.value(n as u32).await {
                        return;
                    }
                    if n < 2 {
                        out.error(StreamError::fail("flaky")).await;
                    } else {
                        out.complete().await;
                    }
                }
            });

        let collector = Collector::arc();
        source
            .retry_with_delay(
                RetryPolicy::new(2, Duration::from_millis(1)),
                RecordingScheduler::arc(),
            )
            .subscribe(collector.clone())
            .join()
            .await;

        assert_eq!(collector.values(), vec![1, 2]);
        assert!(collector.is_completed());
    }
}
