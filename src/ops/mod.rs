//! Stream operators.
//!
//! Each operator wraps a [`SourceRef`](crate::SourceRef) and is itself a
//! [`Source`](crate::Source), so operators compose freely through
//! [`SourceExt`].
//!
//! ## Contents
//! - [`RetryWithDelay`] / [`RetryPolicy`] delayed, bounded retry with
//!   typed-error discrimination
//! - [`RepeatWhile`] predicate-driven repetition (While / DoWhile)
//! - [`FallbackOnEmpty`] substitute an alternate stream for an empty source
//! - [`SortOnComplete`] / [`SortDirection`] buffered stable sort on completion
//!
//! ## Data / control flow
//! ```text
//! notifications:  producer ──► operator ──► consumer      (upward)
//! cancellation:   consumer ──► operator ──► producer      (downward)
//! ```

mod ext;
mod fallback;
mod repeat;
mod retry;
mod sort;

pub use ext::SourceExt;
pub use fallback::FallbackOnEmpty;
pub use repeat::RepeatWhile;
pub use retry::{RetryPolicy, RetryWithDelay};
pub use sort::{SortDirection, SortOnComplete};
