//! # Stream events as an explicit tagged union.
//!
//! [`Notification`] is the single representation of "something happened on a
//! stream": a value, an error, or completion. Operators transform streams by
//! matching directly over the variants — there is no separate
//! materialize/dematerialize combinator pair.
//!
//! ## Terminal invariant
//! Within one subscription's lifetime, at most one terminal notification
//! ([`Error`](Notification::Error) or [`Complete`](Notification::Complete))
//! is delivered, and it is always the last. The invariant is enforced by
//! [`Emitter`](crate::Emitter), which ignores pushes after a terminal.
//!
//! ## Example
//! ```rust
//! use streamvisor::{Notification, StreamError};
//!
//! let n: Notification<u32> = Notification::Value(7);
//! assert!(!n.is_terminal());
//!
//! let t: Notification<u32> = Notification::Error(StreamError::fail("boom"));
//! assert!(t.is_terminal());
//! assert_eq!(t.as_label(), "error");
//! ```

use crate::error::StreamError;

/// One event delivered over a stream.
#[derive(Clone, Debug)]
pub enum Notification<T> {
    /// A produced value.
    Value(T),
    /// Terminal: the stream failed.
    Error(StreamError),
    /// Terminal: the stream finished without failure.
    Complete,
}

impl<T> Notification<T> {
    /// Returns `true` for [`Notification::Error`] and
    /// [`Notification::Complete`].
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Notification::Error(_) | Notification::Complete)
    }

    /// Returns `true` for [`Notification::Value`].
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Notification::Value(_))
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            Notification::Value(_) => "value",
            Notification::Error(_) => "error",
            Notification::Complete => "complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_classification() {
        assert!(!Notification::Value(1).is_terminal());
        assert!(Notification::<u32>::Complete.is_terminal());
        assert!(Notification::<u32>::Error(StreamError::fail("x")).is_terminal());
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(Notification::Value(1).as_label(), "value");
        assert_eq!(Notification::<u32>::Complete.as_label(), "complete");
        assert_eq!(
            Notification::<u32>::Error(StreamError::fail("x")).as_label(),
            "error"
        );
    }
}
