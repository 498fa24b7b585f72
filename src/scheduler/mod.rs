//! Delay scheduling for timed operators.
//!
//! This module groups the knobs that control **when** a timed operator
//! resumes: the [`Scheduler`] contract plus the built-in implementations.
//!
//! ## Contents
//! - [`Scheduler`] injectable "invoke me again after a delay" contract
//! - [`TokioScheduler`] real time via `tokio::time`
//! - [`RecordingScheduler`] records requested delays for deterministic tests
//!
//! ## Quick wiring
//! ```text
//! RetryPolicy { delay, .. }
//!      └─► ops::retry::RetryWithDelay uses:
//!           - scheduler.delay(policy.delay) between attempts
//!           - select! { delay, ctx.cancelled() } so disposal drops the
//!             pending delay
//! ```
//!
//! There is **no process-wide default scheduler**: every timed operator takes
//! its scheduler explicitly, which is what makes virtual-time testing
//! deterministic.

mod recording;
mod scheduler;
mod tokio;

pub use recording::RecordingScheduler;
pub use scheduler::{Scheduler, SchedulerRef};
pub use self::tokio::TokioScheduler;
