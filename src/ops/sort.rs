//! # Buffered stable sort on completion.
//!
//! [`SortOnComplete`] buffers every value of a finite source and, once the
//! source completes, emits the buffer stably sorted by an extracted key —
//! values whose keys compare equal retain their arrival order.
//!
//! ## Rules
//! - Nothing is emitted until the source completes; the whole stream is held
//!   in memory. Unsuitable for unbounded sources — a deliberate design
//!   boundary, not an oversight.
//! - An upstream `Error` is forwarded immediately and the buffer is dropped:
//!   already-buffered values are **never** delivered after an error.
//! - The buffer belongs to one subscription; concurrent subscribers never
//!   share it.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::notify::{open, Emitter, Notification};
use crate::sources::{Source, SourceRef};

/// Output ordering of a [`SortOnComplete`] composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

/// Operator emitting a completed source's values sorted by key.
///
/// Built via [`SourceExt::sort_by_key`](crate::SourceExt::sort_by_key) or
/// [`SourceExt::sort_by_key_desc`](crate::SourceExt::sort_by_key_desc).
pub struct SortOnComplete<T, K> {
    inner: SourceRef<T>,
    key: Arc<dyn Fn(&T) -> K + Send + Sync>,
    direction: SortDirection,
}

impl<T, K> SortOnComplete<T, K> {
    /// Creates the operator around `inner`.
    pub fn new(
        inner: SourceRef<T>,
        key: impl Fn(&T) -> K + Send + Sync + 'static,
        direction: SortDirection,
    ) -> Self {
        Self {
            inner,
            key: Arc::new(key),
            direction,
        }
    }
}

#[async_trait]
impl<T, K> Source<T> for SortOnComplete<T, K>
where
    T: Send + 'static,
    K: Ord + 'static,
{
    fn name(&self) -> &str {
        "sort_on_complete"
    }

    async fn run(&self, mut out: Emitter<T>, ctx: CancellationToken) {
        let mut buffer: Vec<T> = Vec::new();
        let mut feed = open(self.inner.clone(), &ctx);
        loop {
            match feed.recv().await {
                Some(Notification::Value(value)) => buffer.push(value),
                Some(Notification::Error(error)) => {
                    // Buffered values are dropped with the buffer.
                    out.error(error).await;
                    return;
                }
                Some(Notification::Complete) => break,
                None => return,
            }
        }

        let key = &self.key;
        match self.direction {
            // Vec::sort_by is stable: equal keys keep arrival order,
            // in both directions.
            SortDirection::Ascending => buffer.sort_by(|a, b| key(a).cmp(&key(b))),
            SortDirection::Descending => buffer.sort_by(|a, b| key(b).cmp(&key(a))),
        }

        for value in buffer {
            if !out.value(value).await {
                return;
            }
        }
        out.complete().await;
    }
}
