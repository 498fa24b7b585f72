//! # Fixed-sequence sources.
//!
//! [`IterSource`] replays a vector of values and completes. Being cold, every
//! subscription gets the full sequence again — which makes it the canonical
//! building block for demos and operator tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::notify::Emitter;
use crate::sources::{Source, SourceRef};

/// Source that emits a fixed sequence of values, then completes.
#[derive(Debug, Clone)]
pub struct IterSource<T> {
    items: Vec<T>,
}

impl<T> IterSource<T> {
    /// Creates a source over the given items.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

#[async_trait]
impl<T> Source<T> for IterSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        "iter"
    }

    async fn run(&self, mut out: Emitter<T>, ctx: CancellationToken) {
        for item in self.items.iter().cloned() {
            if ctx.is_cancelled() || !out.value(item).await {
                return;
            }
        }
        out.complete().await;
    }
}

/// Shorthand for an [`IterSource`] as a [`SourceRef`].
///
/// # Example
/// ```rust
/// use streamvisor::from_iter;
///
/// let src = from_iter([1, 2, 3]);
/// assert_eq!(src.name(), "iter");
/// ```
pub fn from_iter<T>(items: impl IntoIterator<Item = T>) -> SourceRef<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(IterSource::new(items))
}

/// Source that completes immediately without emitting a value.
pub fn empty<T>() -> SourceRef<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(IterSource::new(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::Collector;
    use crate::ops::SourceExt;

    #[tokio::test]
    async fn replays_values_then_completes() {
        let src = from_iter(["a", "b"]);
        let collector = Collector::arc();
        src.subscribe(collector.clone()).join().await;

        assert_eq!(collector.values(), vec!["a", "b"]);
        assert!(collector.is_completed());
    }

    #[tokio::test]
    async fn empty_completes_without_values() {
        let src = empty::<u32>();
        let collector = Collector::arc();
        src.subscribe(collector.clone()).join().await;

        assert!(collector.values().is_empty());
        assert!(collector.is_completed());
    }
}
