//! Lazy iterator adapters with progress tracking.
//!
//! Unlike the eager wrappers, these adapters never materialize their input.
//! [`wrap_iter`] works with sized iterators and shows a full bar;
//! [`wrap_iter_unbounded`] accepts any iterator and shows a totalless
//! position-and-rate display, for inputs whose length is unknown or too
//! large to collect.

use crate::progress::ProgressBarOpts;
use indicatif::ProgressBarIter;

/// Wrap a sized iterator with a progress bar.
///
/// The bar length comes from the iterator itself, so no materialization
/// happens; elements stream through as the caller consumes them. The bar
/// finishes when the iterator is exhausted.
///
/// # Example
///
/// ```rust
/// use stride::iter::wrap_iter;
/// use stride::progress::ProgressBarOpts;
///
/// let total: i32 = wrap_iter(1..101, "Summing", &ProgressBarOpts::hidden()).sum();
/// assert_eq!(total, 5050);
/// ```
pub fn wrap_iter<I>(iter: I, desc: &str, opts: &ProgressBarOpts) -> ProgressBarIter<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    let it = iter.into_iter();
    let bar = opts.clone().to_progress_bar(it.len() as u64);
    bar.set_prefix(desc.to_string());
    bar.wrap_iter(it)
}

/// Wrap any iterator with a totalless progress display.
///
/// The display tracks position and rate only; no total or ETA is shown.
/// This is the memory-friendly alternative when counting the input up
/// front would mean materializing it.
///
/// # Example
///
/// ```rust
/// use stride::iter::wrap_iter_unbounded;
/// use stride::progress::ProgressBarOpts;
///
/// let seen: Vec<u32> = wrap_iter_unbounded(
///     (0..).take_while(|n| n * n < 50),
///     "Scanning",
///     &ProgressBarOpts::hidden(),
/// )
/// .collect();
/// assert_eq!(seen.len(), 8);
/// ```
pub fn wrap_iter_unbounded<I>(
    iter: I,
    desc: &str,
    opts: &ProgressBarOpts,
) -> ProgressBarIter<I::IntoIter>
where
    I: IntoIterator,
{
    let bar = opts.clone().to_spinner();
    bar.set_prefix(desc.to_string());
    bar.wrap_iter(iter.into_iter())
}
