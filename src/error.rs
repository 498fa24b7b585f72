//! Error types carried by stream notifications.
//!
//! This module defines [`StreamError`], the error payload of a terminal
//! [`Notification::Error`](crate::Notification::Error), and [`ErrorKind`],
//! its coarse classification used for typed-error discrimination in
//! [`RetryPolicy`](crate::RetryPolicy).
//!
//! Cancellation is deliberately **not** an error here: disposing a
//! [`Subscription`](crate::Subscription) is silent and never produces a
//! terminal notification.

use std::time::Duration;
use thiserror::Error;

/// # Errors carried by a stream's terminal `Error` notification.
///
/// Some errors are retryable (`Fail`, `Timeout`), others are considered
/// fatal. Retry behavior is decided by the [`RetryPolicy`](crate::RetryPolicy)
/// matcher, not by the error itself; [`StreamError::is_retryable`] is only the
/// conventional default discrimination.
#[non_exhaustive]
#[derive(Error, Debug, Clone)]
pub enum StreamError {
    /// Producing the stream failed, but a fresh subscription may succeed.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// The producer exceeded a deadline.
    #[error("timed out after {timeout:?}")]
    Timeout {
        /// The deadline that was exceeded.
        timeout: Duration,
    },

    /// Non-recoverable fatal error (should not be retried).
    #[error("fatal error (no retry): {error}")]
    Fatal {
        /// The underlying error message.
        error: String,
    },
}

/// Coarse classification of a [`StreamError`], used for kind matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Retryable execution failure.
    Fail,
    /// Retryable deadline overrun.
    Timeout,
    /// Non-recoverable failure.
    Fatal,
}

impl StreamError {
    /// Creates a retryable failure from a message.
    pub fn fail(error: impl Into<String>) -> Self {
        StreamError::Fail { error: error.into() }
    }

    /// Creates a fatal (non-retryable) failure from a message.
    pub fn fatal(error: impl Into<String>) -> Self {
        StreamError::Fatal { error: error.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(timeout: Duration) -> Self {
        StreamError::Timeout { timeout }
    }

    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StreamError::Fail { .. } => ErrorKind::Fail,
            StreamError::Timeout { .. } => ErrorKind::Timeout,
            StreamError::Fatal { .. } => ErrorKind::Fatal,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use streamvisor::StreamError;
    ///
    /// let err = StreamError::fail("boom");
    /// assert_eq!(err.as_label(), "stream_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StreamError::Fail { .. } => "stream_failed",
            StreamError::Timeout { .. } => "stream_timeout",
            StreamError::Fatal { .. } => "stream_fatal",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            StreamError::Fail { error } => format!("error: {error}"),
            StreamError::Timeout { timeout } => format!("timeout: {timeout:?}"),
            StreamError::Fatal { error } => format!("fatal: {error}"),
        }
    }

    /// Indicates whether the error type is conventionally safe to retry.
    ///
    /// Returns `true` for [`StreamError::Fail`] and [`StreamError::Timeout`],
    /// `false` otherwise.
    ///
    /// # Example
    /// ```
    /// use streamvisor::StreamError;
    ///
    /// assert!(StreamError::fail("boom").is_retryable());
    /// assert!(!StreamError::fatal("nope").is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, StreamError::Fail { .. } | StreamError::Timeout { .. })
    }
}
