//! # Subscription plumbing configuration.
//!
//! Provides [`Config`] — settings for the per-subscription notification
//! channel that connects a running [`Source`](crate::Source) to its
//! downstream observer.
//!
//! ## Sentinel values
//! - `channel_capacity = 0` → clamped to 1 (a bounded channel needs at least
//!   one slot)

/// Baseline capacity of a per-subscription notification channel.
pub(crate) const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Configuration for subscription plumbing.
///
/// Used by [`subscribe_with`](crate::SourceExt::subscribe_with). Operators
/// chained *inside* a composition use the baseline capacity; the configured
/// value applies to the outermost consumer-facing channel.
///
/// ## Field semantics
/// - `channel_capacity`: bounded capacity of the notification channel between
///   producer and consumer. Producers await when the consumer lags
///   (backpressure); notifications are never dropped.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Capacity of the notification channel (min 1; clamped).
    pub channel_capacity: usize,
}

impl Config {
    /// Returns the channel capacity clamped to a minimum of 1.
    #[inline]
    pub fn channel_capacity_clamped(&self) -> usize {
        self.channel_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `channel_capacity = 64` (good baseline for operator chains)
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
