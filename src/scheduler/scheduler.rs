//! # Scheduler contract.
//!
//! A [`Scheduler`] is the injectable service timed operators use to wait
//! between attempts. The async rendition of "schedule a callback after a
//! delay, cancellable": the pending delay is a future, and dropping it (the
//! losing arm of a `select!`) cancels the timer — cancelling after the delay
//! already elapsed is naturally a no-op.
//!
//! Operators never reach for a global clock; the scheduler is passed in at
//! composition time and may be shared by several operators, each scheduling
//! independently.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Shared handle to a scheduler.
pub type SchedulerRef = Arc<dyn Scheduler>;

/// Contract for delay scheduling.
#[async_trait]
pub trait Scheduler: Send + Sync + 'static {
    /// Resolves after `delay` has elapsed according to this scheduler.
    ///
    /// Dropping the returned future cancels the pending delay.
    async fn delay(&self, delay: Duration);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
