//! # Fallback substitution for empty streams.
//!
//! [`FallbackOnEmpty`] forwards its source unchanged unless the source
//! completes without a single value; in that case the composed stream is the
//! output of a fallback source, created lazily by a factory that is invoked
//! at most once.
//!
//! ## Decision flow
//! ```text
//! source ─ Value ────► forward; source now "non-empty": everything else
//!                      (values + terminal) is forwarded unchanged
//! source ─ Error ────► forward immediately — an error is never "empty"
//! source ─ Complete, zero values so far
//!        └──► discard Complete, invoke factory once, forward the fallback
//!             stream's notifications verbatim
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::notify::{open, Emitter, Notification};
use crate::sources::{Source, SourceRef};

/// Operator substituting a fallback stream when the source is empty.
///
/// Built via [`SourceExt::fallback_if_empty`](crate::SourceExt::fallback_if_empty).
pub struct FallbackOnEmpty<T> {
    inner: SourceRef<T>,
    fallback: Arc<dyn Fn() -> SourceRef<T> + Send + Sync>,
}

impl<T> FallbackOnEmpty<T> {
    /// Creates the operator around `inner`. `fallback` is invoked at most
    /// once per subscription, and only if the source turns out empty.
    pub fn new(
        inner: SourceRef<T>,
        fallback: impl Fn() -> SourceRef<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner,
            fallback: Arc::new(fallback),
        }
    }
}

#[async_trait]
impl<T: Send + 'static> Source<T> for FallbackOnEmpty<T> {
    fn name(&self) -> &str {
        "fallback_on_empty"
    }

    async fn run(&self, mut out: Emitter<T>, ctx: CancellationToken) {
        let mut seen_value = false;
        let mut feed = open(self.inner.clone(), &ctx);
        loop {
            match feed.recv().await {
                Some(Notification::Value(value)) => {
                    seen_value = true;
                    if !out.value(value).await {
                        return;
                    }
                }
                Some(Notification::Error(error)) => {
                    out.error(error).await;
                    return;
                }
                Some(Notification::Complete) => {
                    if seen_value {
                        out.complete().await;
                        return;
                    }
                    break;
                }
                None => return,
            }
        }

        // Source was empty: discard its Complete and switch over.
        drop(feed);
        let mut fallback = open((self.fallback)(), &ctx);
        while let Some(notification) = fallback.recv().await {
            let terminal = notification.is_terminal();
            if !out.forward(notification).await || terminal {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StreamError;
    use crate::observers::Collector;
    use crate::ops::SourceExt;
    use crate::sources::{empty, from_iter, SourceFn};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn empty_source_switches_to_fallback() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let counted = invocations.clone();

        let collector = Collector::arc();
        empty::<&str>()
            .fallback_if_empty(move || {
                counted.fetch_add(1, Ordering::SeqCst);
                from_iter(["fallback"])
            })
            .subscribe(collector.clone())
            .join()
            .await;

        assert_eq!(collector.values(), vec!["fallback"]);
        assert!(collector.is_completed());
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_empty_source_never_invokes_the_factory() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let counted = invocations.clone();

        let collector = Collector::arc();
        from_iter(["y"])
            .fallback_if_empty(move || {
                counted.fetch_add(1, Ordering::SeqCst);
                from_iter(["fallback"])
            })
            .subscribe(collector.clone())
            .join()
            .await;

        assert_eq!(collector.values(), vec!["y"]);
        assert!(collector.is_completed());
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn error_is_never_treated_as_empty() {
        let source: SourceRef<u32> =
            SourceFn::arc("failing", |mut out: Emitter<u32>, _ctx| async move {
                out.error(StreamError::fail("no data")).await;
            });

        let invocations = Arc::new(AtomicUsize::new(0));
        let counted = invocations.clone();

        let collector = Collector::arc();
        source
            .fallback_if_empty(move || {
                counted.fetch_add(1, Ordering::SeqCst);
                from_iter([1])
            })
            .subscribe(collector.clone())
            .join()
            .await;

        assert!(collector.error().is_some());
        assert!(collector.values().is_empty());
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fallback_error_is_forwarded_verbatim() {
        let failing_fallback: SourceRef<u32> =
            SourceFn::arc("failing-fallback", |mut out: Emitter<u32>, _ctx| async move {
                out.error(StreamError::fatal("fallback down")).await;
            });

        let collector = Collector::arc();
        empty::<u32>()
            .fallback_if_empty(move || failing_fallback.clone())
            .subscribe(collector.clone())
            .join()
            .await;

        assert!(matches!(collector.error(), Some(StreamError::Fatal { .. })));
        assert!(!collector.is_completed());
    }
}
