//! # Built-in observers.
//!
//! Ready-made [`Observer`](crate::Observer) implementations:
//! - [`Collector`] - records notifications for assertions (tests, probes)
//! - `LogObserver` - stdout logging (feature `logging`, demo/reference only)
//!
//! Production consumers implement their own [`Observer`](crate::Observer);
//! these exist for tests, demos, and as reference implementations.

mod collect;
#[cfg(feature = "logging")]
mod log;

pub use collect::Collector;
#[cfg(feature = "logging")]
pub use log::LogObserver;
