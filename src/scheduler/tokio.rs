//! # Real-time scheduler backed by `tokio::time`.
//!
//! [`TokioScheduler`] delegates to [`tokio::time::sleep`]. Under a paused
//! runtime clock (`#[tokio::test(start_paused = true)]`) it participates in
//! tokio's virtual time, so even "real time" compositions stay deterministic
//! in tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time;

use crate::scheduler::{Scheduler, SchedulerRef};

/// Scheduler that waits on the tokio runtime clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl TokioScheduler {
    /// Returns the scheduler as a shared handle.
    pub fn arc() -> SchedulerRef {
        Arc::new(TokioScheduler)
    }
}

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, delay: Duration) {
        time::sleep(delay).await;
    }

    fn name(&self) -> &'static str {
        "tokio"
    }
}
