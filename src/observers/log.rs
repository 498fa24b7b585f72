//! # Simple logging observer for debugging and demos.
//!
//! [`LogObserver`] prints notifications to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [value] stream=ticker
//! [error] stream=ticker err="execution failed: connection refused"
//! [complete] stream=ticker
//! ```

use std::fmt::Debug;

use async_trait::async_trait;

use crate::notify::{Notification, Observer};

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Prints human-readable notification
/// descriptions to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom
/// [`Observer`](crate::Observer) for structured logging or metrics
/// collection.
pub struct LogObserver {
    stream: &'static str,
}

impl LogObserver {
    /// Creates a log observer tagging output with a stream name.
    pub fn new(stream: &'static str) -> Self {
        Self { stream }
    }
}

#[async_trait]
impl<T: Debug + Send + 'static> Observer<T> for LogObserver {
    async fn on_notification(&self, notification: Notification<T>) {
        let stream = self.stream;
        match &notification {
            Notification::Value(v) => {
                println!("[value] stream={stream} value={v:?}");
            }
            Notification::Error(e) => {
                println!("[error] stream={stream} err={:?}", e.as_message());
            }
            Notification::Complete => {
                println!("[complete] stream={stream}");
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
