//! # streamvisor
//!
//! **Streamvisor** is a small library of composable operators over
//! asynchronous push-based event streams.
//!
//! It provides a cold stream primitive plus operators for delayed/bounded
//! retry with typed-error discrimination, conditional repetition,
//! fallback-on-empty substitution, and buffered stable sorting. The crate is
//! designed as a building block for higher layers (UIs, persistence) that
//! consume composed streams through the plain stream contract.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌──────────────┐     ┌───────────────────────────────┐    ┌──────────────┐
//!  │ Source<T>    │     │ Operators (each is a Source)  │    │ Observer<T>  │
//!  │ (cold: run() │────►│  RetryWithDelay ◄─ Scheduler  │───►│ on_notifica- │
//!  │  per sub)    │     │  RepeatWhile                  │    │ tion(...)    │
//!  └──────────────┘     │  FallbackOnEmpty              │    └──────────────┘
//!                       │  SortOnComplete               │
//!                       └───────────────────────────────┘
//!
//!  notifications flow upward:  producer ─► operator ─► consumer
//!  cancellation flows downward: Subscription::cancel()
//!      └─► delivery loop ─► operator feeds ─► producer tokens
//! ```
//!
//! ### Subscription lifecycle
//! ```text
//! source.subscribe(observer) ──► Subscription
//!
//! delivery loop {
//!   ├─► open feed (spawn Source::run with a child CancellationToken)
//!   ├─► recv notification
//!   │      ├─ Value    ─► observer.on_notification, continue
//!   │      └─ terminal ─► observer.on_notification, exit
//!   └─ exit conditions:
//!        - terminal notification delivered (Error or Complete)
//!        - Subscription::cancel() — silent, nothing else is delivered
//!        - producer stopped without a terminal (cancelled upstream)
//! }
//! ```
//!
//! ## Features
//! | Area            | Description                                              | Key types / traits                       |
//! |-----------------|----------------------------------------------------------|------------------------------------------|
//! | **Streams**     | Cold push-based sources, easy to compose and subscribe.  | [`Source`], [`SourceFn`], [`SourceRef`]  |
//! | **Operators**   | Retry, repeat, fallback, sort — chainable compositions.  | [`SourceExt`], [`RetryPolicy`]           |
//! | **Scheduling**  | Injectable delay scheduling, virtual-time friendly.      | [`Scheduler`], [`TokioScheduler`]        |
//! | **Observers**   | Terminate a composition into your own sink.              | [`Observer`], [`Collector`]              |
//! | **Errors**      | Typed errors for retry discrimination.                   | [`StreamError`], [`ErrorKind`]           |
//! | **Configuration** | Channel sizing for subscription plumbing.              | [`Config`]                               |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogObserver`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use streamvisor::{
//!     from_iter, Collector, RetryPolicy, SourceExt, TokioScheduler,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // Retry transient failures, fall back when empty, sort on completion.
//!     let composed = from_iter([(2, "b"), (1, "a"), (2, "a2")])
//!         .retry_with_delay(
//!             RetryPolicy::new(3, Duration::from_millis(100)),
//!             TokioScheduler::arc(),
//!         )
//!         .fallback_if_empty(|| from_iter([(0, "none")]))
//!         .sort_by_key(|pair: &(i32, &str)| pair.0);
//!
//!     let collector = Collector::arc();
//!     composed.subscribe(collector.clone()).join().await;
//!
//!     assert_eq!(collector.values(), vec![(1, "a"), (2, "b"), (2, "a2")]);
//!     assert!(collector.is_completed());
//! }
//! ```

mod config;
mod error;
mod notify;
mod observers;
mod ops;
mod scheduler;
mod sources;

// ---- Public re-exports ----

pub use config::Config;
pub use error::{ErrorKind, StreamError};
pub use notify::{Emitter, Notification, Observer, ObserverRef};
pub use observers::Collector;
pub use ops::{
    FallbackOnEmpty, RepeatWhile, RetryPolicy, RetryWithDelay, SortDirection, SortOnComplete,
    SourceExt,
};
pub use scheduler::{RecordingScheduler, Scheduler, SchedulerRef, TokioScheduler};
pub use sources::{empty, from_iter, IterSource, Source, SourceFn, SourceRef, Subscription};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
