//! # Delay-recording scheduler for deterministic tests.
//!
//! [`RecordingScheduler`] records every requested delay. On its own it
//! resolves immediately (pure virtual time); wrapping an inner scheduler via
//! [`RecordingScheduler::wrap`] records and then delegates, which lets a test
//! observe scheduling while keeping real (or paused-clock) timing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::scheduler::{Scheduler, SchedulerRef};

/// Scheduler that records requested delays.
#[derive(Default)]
pub struct RecordingScheduler {
    delays: Mutex<Vec<Duration>>,
    inner: Option<SchedulerRef>,
}

impl RecordingScheduler {
    /// Creates a recording scheduler that resolves every delay immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recording scheduler that delegates to `inner` after
    /// recording.
    pub fn wrap(inner: SchedulerRef) -> Self {
        Self {
            delays: Mutex::new(Vec::new()),
            inner: Some(inner),
        }
    }

    /// Returns an immediate recording scheduler as a shared handle.
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Returns the delays requested so far, in request order.
    pub fn recorded(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }

    /// Returns how many delays have been requested so far.
    pub fn count(&self) -> usize {
        self.delays.lock().unwrap().len()
    }
}

#[async_trait]
impl Scheduler for RecordingScheduler {
    async fn delay(&self, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
        if let Some(inner) = &self.inner {
            inner.delay(delay).await;
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_delays_in_order() {
        let scheduler = RecordingScheduler::new();
        scheduler.delay(Duration::from_millis(10)).await;
        scheduler.delay(Duration::from_millis(20)).await;

        assert_eq!(scheduler.count(), 2);
        assert_eq!(
            scheduler.recorded(),
            vec![Duration::from_millis(10), Duration::from_millis(20)]
        );
    }
}
