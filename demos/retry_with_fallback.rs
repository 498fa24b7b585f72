//! # Example: retry_with_fallback
//!
//! Demonstrates how [`RetryWithDelay`] retries a flaky source according to a
//! [`RetryPolicy`], and how [`FallbackOnEmpty`] substitutes an alternate
//! stream when the source completes without a value.
//!
//! The source fails twice before succeeding, showing the fixed delay applied
//! between re-subscriptions and the error callback firing per attempt.
//!
//! ## Flow
//! ```text
//! RetryWithDelay::run()
//!   ├─► subscribe source (attempt 1) → Error("boom #1")
//!   ├─► on_error callback, delay(100ms)
//!   ├─► subscribe source (attempt 2) → Error("boom #2")
//!   ├─► on_error callback, delay(100ms)
//!   ├─► subscribe source (attempt 3) → Value(42), Complete
//!   └─► forward to observer
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example retry_with_fallback --features logging
//! ```

use std::{
    sync::atomic::{AtomicU64, Ordering},
    sync::Arc,
    time::Duration,
};
use streamvisor::{
    from_iter, Emitter, LogObserver, RetryPolicy, SourceExt, SourceFn, SourceRef, StreamError,
    TokioScheduler,
};

static ATTEMPTS: AtomicU64 = AtomicU64::new(0);

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // 1. A cold source that fails 2 times before producing a value
    let flaky: SourceRef<u64> = SourceFn::arc("flaky", |mut out: Emitter<u64>, _ctx| async move {
        let attempt = ATTEMPTS.fetch_add(1, Ordering::Relaxed) + 1;
        println!("[flaky] attempt {attempt}");

        if attempt <= 2 {
            out.error(StreamError::fail(format!("boom #{attempt}"))).await;
        } else if out.value(42).await {
            out.complete().await;
        }
    });

    // 2. Retry matched errors up to 5 times, 100ms apart
    let policy = RetryPolicy::new(5, Duration::from_millis(100))
        .with_on_error(|e| println!("[retry] matched error: {}", e.as_message()));

    let composed = flaky
        .retry_with_delay(policy, TokioScheduler::arc())
        .fallback_if_empty(|| from_iter([0]));

    // 3. Subscribe with the built-in logging observer and wait for terminal
    composed.subscribe(Arc::new(LogObserver::new("flaky"))).join().await;

    println!("[main] done.");
}
