//! # Predicate-driven stream repetition (While / DoWhile).
//!
//! [`RepeatWhile`] re-subscribes a cold source for as long as a zero-argument
//! predicate holds, concatenating the iterations into one stream.
//!
//! ## Iteration flow
//! ```text
//! While:   [check] ─true─► run source to completion ─► [check] ─► ...
//!             └─false─► Complete
//! DoWhile: run source to completion ─► [check] ─► ... (first pass unchecked)
//! ```
//!
//! ## Rules
//! - Iterations run **sequentially**, never concurrently; the next one is
//!   decided lazily after the previous completes (infinite repetition never
//!   pre-materializes an iteration list).
//! - Per-iteration `Complete` notifications are swallowed; one `Complete` is
//!   emitted when the predicate first returns false.
//! - Any iteration `Error` terminates the composed stream immediately — no
//!   implicit retry (compose [`retry_with_delay`](crate::SourceExt::retry_with_delay)
//!   separately for that).

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::notify::{open, Emitter, Notification};
use crate::sources::{Source, SourceRef};

/// Operator repeating a source while a predicate holds.
///
/// Built via [`SourceExt::repeat_while`](crate::SourceExt::repeat_while) or
/// [`SourceExt::do_while`](crate::SourceExt::do_while).
pub struct RepeatWhile<T> {
    inner: SourceRef<T>,
    predicate: Arc<dyn Fn() -> bool + Send + Sync>,
    check_before_first: bool,
}

impl<T> RepeatWhile<T> {
    /// While semantics: the predicate is checked before **every** iteration,
    /// including the first.
    pub fn new(
        inner: SourceRef<T>,
        predicate: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner,
            predicate: Arc::new(predicate),
            check_before_first: true,
        }
    }

    /// DoWhile semantics: the first iteration runs unconditionally, then the
    /// predicate is checked before each subsequent iteration.
    pub fn do_while(
        inner: SourceRef<T>,
        predicate: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner,
            predicate: Arc::new(predicate),
            check_before_first: false,
        }
    }
}

#[async_trait]
impl<T: Send + 'static> Source<T> for RepeatWhile<T> {
    fn name(&self) -> &str {
        "repeat_while"
    }

    async fn run(&self, mut out: Emitter<T>, ctx: CancellationToken) {
        let mut first = true;
        loop {
            let unconditional = first && !self.check_before_first;
            first = false;
            if !unconditional && !(self.predicate)() {
                out.complete().await;
                return;
            }

            let mut feed = open(self.inner.clone(), &ctx);
            loop {
                match feed.recv().await {
                    Some(Notification::Value(value)) => {
                        if !out.value(value).await {
                            return;
                        }
                    }
                    // Iteration finished; swallow its Complete and re-check.
                    Some(Notification::Complete) => break,
                    Some(Notification::Error(error)) => {
                        out.error(error).await;
                        return;
                    }
                    None => return,
                }
            }
        }
    }
}
