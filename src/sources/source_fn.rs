//! # Closure-backed source (`SourceFn`)
//!
//! [`SourceFn`] wraps a closure `F: Fn(Emitter<T>, CancellationToken) -> Fut`,
//! producing a fresh future per subscription. This keeps the source cold
//! without shared mutable state.
//!
//! ## Concurrency semantics
//! - Every subscription invokes the closure again, creating a **new** future
//!   owning its own state.
//! - No hidden mutation between re-subscriptions; shared state must be an
//!   explicit `Arc<...>` captured by the closure.
//!
//! ## Example
//! ```rust
//! use streamvisor::{Emitter, SourceFn, SourceRef};
//! use tokio_util::sync::CancellationToken;
//!
//! let src: SourceRef<u32> = SourceFn::arc("pair", |mut out: Emitter<u32>, _ctx: CancellationToken| async move {
//!     if !out.value(1).await {
//!         return;
//!     }
//!     if !out.value(2).await {
//!         return;
//!     }
//!     out.complete().await;
//! });
//!
//! assert_eq!(src.name(), "pair");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::notify::Emitter;
use crate::sources::Source;

/// Function-backed source implementation.
///
/// Wraps a closure that *creates* a new producing future per subscription.
#[derive(Debug)]
pub struct SourceFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SourceFn<F> {
    /// Creates a new function-backed source.
    ///
    /// Prefer [`SourceFn::arc`] when you immediately need a
    /// [`SourceRef`](crate::SourceRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the source and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<T, F, Fut> Source<T> for SourceFn<F>
where
    T: Send + 'static,
    F: Fn(Emitter<T>, CancellationToken) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = ()> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, out: Emitter<T>, ctx: CancellationToken) {
        (self.f)(out, ctx).await
    }
}
