//! # Fluent composition over `SourceRef`.
//!
//! [`SourceExt`] hangs the operators and the subscribe entry points off any
//! shared source handle. Every operator returns another
//! [`SourceRef`](crate::SourceRef), so compositions chain:
//!
//! ```rust
//! use std::time::Duration;
//! use streamvisor::{from_iter, RetryPolicy, SourceExt, TokioScheduler};
//!
//! let composed = from_iter([3, 1, 2])
//!     .retry_with_delay(RetryPolicy::new(3, Duration::from_millis(100)), TokioScheduler::arc())
//!     .fallback_if_empty(|| from_iter([0]))
//!     .sort_by_key(|v: &i32| *v);
//! ```

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::notify::ObserverRef;
use crate::ops::{FallbackOnEmpty, RepeatWhile, RetryPolicy, RetryWithDelay, SortDirection, SortOnComplete};
use crate::scheduler::SchedulerRef;
use crate::sources::{deliver, SourceRef, Subscription};

/// Operator and subscription methods on a shared source handle.
///
/// Every method is a stateless factory: the returned source owns no
/// per-subscription state, and each subscription to it runs independently.
pub trait SourceExt<T: Send + 'static> {
    /// Starts one subscription, delivering notifications to `observer` until
    /// the terminal notification or [`Subscription::cancel`].
    ///
    /// Must be called within a tokio runtime.
    fn subscribe(&self, observer: ObserverRef<T>) -> Subscription;

    /// Like [`subscribe`](SourceExt::subscribe), with explicit plumbing
    /// configuration.
    fn subscribe_with(&self, observer: ObserverRef<T>, config: &Config) -> Subscription;

    /// Retries this source on matching errors, waiting `policy.delay` on
    /// `scheduler` between attempts. See
    /// [`RetryWithDelay`](crate::RetryWithDelay).
    fn retry_with_delay(&self, policy: RetryPolicy, scheduler: SchedulerRef) -> SourceRef<T>;

    /// Repeats this source while `predicate` returns true, checking before
    /// every iteration. See [`RepeatWhile`](crate::RepeatWhile).
    fn repeat_while<P>(&self, predicate: P) -> SourceRef<T>
    where
        P: Fn() -> bool + Send + Sync + 'static;

    /// Runs this source once unconditionally, then repeats while `predicate`
    /// returns true.
    fn do_while<P>(&self, predicate: P) -> SourceRef<T>
    where
        P: Fn() -> bool + Send + Sync + 'static;

    /// Substitutes the stream built by `fallback` when this source completes
    /// without a value. See [`FallbackOnEmpty`](crate::FallbackOnEmpty).
    fn fallback_if_empty<F>(&self, fallback: F) -> SourceRef<T>
    where
        F: Fn() -> SourceRef<T> + Send + Sync + 'static;

    /// Buffers this source and emits it sorted by `key`, ascending, on
    /// completion. Equal keys keep arrival order. See
    /// [`SortOnComplete`](crate::SortOnComplete).
    fn sort_by_key<K, F>(&self, key: F) -> SourceRef<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static;

    /// Like [`sort_by_key`](SourceExt::sort_by_key), descending.
    fn sort_by_key_desc<K, F>(&self, key: F) -> SourceRef<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static;
}

impl<T: Send + 'static> SourceExt<T> for SourceRef<T> {
    fn subscribe(&self, observer: ObserverRef<T>) -> Subscription {
        self.subscribe_with(observer, &Config::default())
    }

    fn subscribe_with(&self, observer: ObserverRef<T>, config: &Config) -> Subscription {
        let token = CancellationToken::new();
        let handle = tokio::spawn(deliver(
            self.clone(),
            observer,
            token.clone(),
            config.channel_capacity_clamped(),
        ));
        Subscription::new(token, handle)
    }

    fn retry_with_delay(&self, policy: RetryPolicy, scheduler: SchedulerRef) -> SourceRef<T> {
        Arc::new(RetryWithDelay::new(self.clone(), policy, scheduler))
    }

    fn repeat_while<P>(&self, predicate: P) -> SourceRef<T>
    where
        P: Fn() -> bool + Send + Sync + 'static,
    {
        Arc::new(RepeatWhile::new(self.clone(), predicate))
    }

    fn do_while<P>(&self, predicate: P) -> SourceRef<T>
    where
        P: Fn() -> bool + Send + Sync + 'static,
    {
        Arc::new(RepeatWhile::do_while(self.clone(), predicate))
    }

    fn fallback_if_empty<F>(&self, fallback: F) -> SourceRef<T>
    where
        F: Fn() -> SourceRef<T> + Send + Sync + 'static,
    {
        Arc::new(FallbackOnEmpty::new(self.clone(), fallback))
    }

    fn sort_by_key<K, F>(&self, key: F) -> SourceRef<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Arc::new(SortOnComplete::new(self.clone(), key, SortDirection::Ascending))
    }

    fn sort_by_key_desc<K, F>(&self, key: F) -> SourceRef<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Arc::new(SortOnComplete::new(self.clone(), key, SortDirection::Descending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::Collector;
    use crate::scheduler::RecordingScheduler;
    use crate::sources::from_iter;
    use std::time::Duration;

    #[tokio::test]
    async fn operators_chain_into_one_composition() {
        let composed = from_iter([(2, "b"), (1, "a"), (2, "a2")])
            .retry_with_delay(
                RetryPolicy::new(2, Duration::from_millis(1)),
                RecordingScheduler::arc(),
            )
            .fallback_if_empty(|| from_iter([(0, "none")]))
            .sort_by_key(|pair: &(i32, &str)| pair.0);

        let collector = Collector::arc();
        composed.subscribe(collector.clone()).join().await;

        assert_eq!(collector.values(), vec![(1, "a"), (2, "b"), (2, "a2")]);
        assert!(collector.is_completed());
    }

    #[tokio::test]
    async fn concurrent_subscriptions_do_not_share_state() {
        let composed = from_iter([3, 1, 2]).sort_by_key(|v: &i32| *v);

        let first = Collector::arc();
        let second = Collector::arc();
        let sub_a = composed.subscribe(first.clone());
        let sub_b = composed.subscribe(second.clone());
        sub_a.join().await;
        sub_b.join().await;

        assert_eq!(first.values(), vec![1, 2, 3]);
        assert_eq!(second.values(), vec![1, 2, 3]);
    }
}
