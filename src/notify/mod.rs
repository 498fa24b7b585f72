//! Notification model and channel plumbing.
//!
//! This module groups the event **data model** of a stream and the bounded
//! channel used to hand notifications from a running producer to its
//! consumer.
//!
//! ## Contents
//! - [`Notification`] — tagged representation of one stream event
//! - [`Observer`] — push sink an operator chain terminates into
//! - [`Emitter`] / `Feed` — producer/consumer ends of a per-subscription
//!   notification channel
//!
//! ## Quick reference
//! - **Producers**: `Source::run` implementations push through [`Emitter`].
//! - **Consumers**: operators read their upstream through a `Feed`;
//!   the subscription driver forwards to an [`Observer`].

mod notification;
mod observer;
mod pipe;

pub use notification::Notification;
pub use observer::{Observer, ObserverRef};
pub use pipe::Emitter;

pub(crate) use pipe::{open, open_with};
