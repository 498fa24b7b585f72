//! # Example: repeat_and_sort
//!
//! Demonstrates [`RepeatWhile`] concatenating iterations of a cold source
//! while a predicate holds, and [`SortOnComplete`] emitting the buffered
//! stream stably sorted once it completes.
//!
//! ## Flow
//! ```text
//! RepeatWhile::run()
//!   ├─► predicate() → true  → iterate source (pages 0..)
//!   ├─► predicate() → true  → iterate source
//!   ├─► predicate() → false → Complete
//! SortOnComplete::run()
//!   ├─► buffer every value
//!   └─► on Complete: stable sort by key, emit, Complete
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example repeat_and_sort
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use streamvisor::{Collector, Emitter, SourceExt, SourceFn, SourceRef};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // One "page" of out-of-order records per subscription.
    let pages = Arc::new(AtomicUsize::new(0));
    let paged = pages.clone();
    let page: SourceRef<(usize, &'static str)> =
        SourceFn::arc("page", move |mut out: Emitter<(usize, &'static str)>, _ctx| {
            let paged = paged.clone();
            async move {
                let n = paged.fetch_add(1, Ordering::Relaxed);
                println!("[page] loading page {n}");
                for record in [(3, "gamma"), (1, "alpha"), (2, "beta")] {
                    if !out.value((record.0 + n * 10, record.1)).await {
                        return;
                    }
                }
                out.complete().await;
            }
        });

    // Fetch two pages, then emit everything ordered by record id.
    let fetched = pages.clone();
    let composed = page
        .repeat_while(move || fetched.load(Ordering::Relaxed) < 2)
        .sort_by_key(|record: &(usize, &str)| record.0);

    let collector = Collector::arc();
    composed.subscribe(collector.clone()).join().await;

    for (id, name) in collector.values() {
        println!("[record] id={id} name={name}");
    }
    println!("[main] done.");
}
