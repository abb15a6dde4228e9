//! Iteration module containing progress-wrapped collection operations.
//!
//! This module provides higher-order functions that run an ordinary
//! collection operation (map, filter, reduce, enumerate, zip) while a
//! progress bar tracks the iteration. The wrappers never change the result
//! semantics of the operation they decorate; they only observe it.
//!
//! Every eager wrapper materializes its input before iterating, because the
//! element count must be known up front to size the bar. For large or
//! unbounded inputs where that memory cost is unwanted, use the lazy
//! adapters in [`wrap`] instead, which trade the total display for
//! constant memory.
//!
//! # Overview
//!
//! The iter module is organized into three main components:
//!
//! - [`ops`] - Eager map/filter/enumerate/zip wrappers
//! - [`fold`] - Eager left-fold (reduce) wrappers
//! - [`wrap`] - Lazy iterator adapters, including an unbounded mode
//!
//! # Examples
//!
//! ## Mapping with Progress
//!
//! ```rust
//! use stride::iter::progress_map;
//! use stride::progress::ProgressBarOpts;
//!
//! let squares = progress_map(|x| x * x, 1..=5, "Squaring", &ProgressBarOpts::hidden());
//! assert_eq!(squares, vec![1, 4, 9, 16, 25]);
//! ```
//!
//! ## Reducing with Progress
//!
//! ```rust
//! use stride::iter::progress_reduce;
//! use stride::progress::ProgressBarOpts;
//!
//! let sum = progress_reduce(|a, b| a + b, 1..=5, Some(0), "Summing", &ProgressBarOpts::hidden())?;
//! assert_eq!(sum, 15);
//! # Ok::<(), stride::Error>(())
//! ```

pub mod fold;
pub mod ops;
pub mod wrap;

pub use fold::{progress_reduce, try_progress_reduce};
pub use ops::{
    progress_enumerate, progress_filter, progress_map, progress_zip, progress_zip3,
    try_progress_filter, try_progress_map,
};
pub use wrap::{wrap_iter, wrap_iter_unbounded};

use crate::progress::ProgressBarOpts;
use indicatif::ProgressBar;

/// Build the bar every eager wrapper drives.
pub(crate) fn new_bar(len: u64, desc: &str, opts: &ProgressBarOpts) -> ProgressBar {
    let bar = opts.clone().to_progress_bar(len);
    bar.set_prefix(desc.to_string());
    bar
}

/// Finish a wrapper bar, clearing it if the options ask for that.
pub(crate) fn finish_bar(bar: &ProgressBar, opts: &ProgressBarOpts) {
    if opts.clear {
        bar.finish_and_clear();
    } else {
        bar.finish();
    }
}
