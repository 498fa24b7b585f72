//! # Stream sources and subscription handles.
//!
//! This module provides the core stream-side types:
//! - [`Source`] - trait for implementing cold push-based streams
//! - [`SourceFn`] - closure-backed source implementation
//! - [`SourceRef`] - shared reference to a source (`Arc<dyn Source>`)
//! - [`IterSource`] - source replaying a fixed sequence of values
//! - [`Subscription`] - cancellation handle for one active subscription

mod iter;
mod source;
mod source_fn;
mod subscription;

pub use iter::{empty, from_iter, IterSource};
pub use source::{Source, SourceRef};
pub use source_fn::SourceFn;
pub use subscription::Subscription;

pub(crate) use source::deliver;
