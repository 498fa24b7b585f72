//! # Core observer trait.
//!
//! `Observer` is the extension point a composed stream terminates into. Each
//! subscription is driven by a dedicated delivery loop that feeds the
//! observer one [`Notification`] at a time, in source order.
//!
//! ## Contract
//! - The observer receives zero or more `Value` notifications followed by at
//!   most one terminal notification (`Error` or `Complete`).
//! - After the subscription is cancelled, no further notifications are
//!   delivered; cancellation itself is silent (no terminal is synthesized).
//! - Implementations may be slow (I/O, batching) — they backpressure the
//!   producer through the bounded notification channel, they do not lose
//!   events.
//!
//! ## Example (skeleton)
//! ```rust
//! use async_trait::async_trait;
//! use streamvisor::{Notification, Observer};
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Observer<String> for Audit {
//!     async fn on_notification(&self, n: Notification<String>) {
//!         // write audit record...
//!         let _ = n.as_label();
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::notify::Notification;

/// Shared handle to an observer.
pub type ObserverRef<T> = Arc<dyn Observer<T>>;

/// Contract for notification consumers.
///
/// Called from the subscription's delivery loop. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Observer<T>: Send + Sync + 'static {
    /// Handles a single notification.
    async fn on_notification(&self, notification: Notification<T>);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
