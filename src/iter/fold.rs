//! Left-fold (reduce) with progress tracking.

use super::{finish_bar, new_bar};
use crate::error::Error;
use crate::progress::ProgressBarOpts;

/// Fold an input into a single value with progress tracking.
///
/// The fold runs left to right. Without an initializer the first element
/// seeds the accumulator and is not passed to `func`; an empty input with
/// no initializer fails with [`Error::EmptySequence`].
///
/// # Arguments
///
/// * `func` - Binary function combining accumulator and element
/// * `iter` - Input to fold
/// * `initializer` - Optional seed for the accumulator
/// * `desc` - Description for the progress bar
/// * `opts` - Style options for the progress bar
///
/// # Example
///
/// ```rust
/// use stride::iter::progress_reduce;
/// use stride::progress::ProgressBarOpts;
///
/// let total = progress_reduce(|a, b| a + b, [1, 2, 3, 4, 5], Some(0), "Summing", &ProgressBarOpts::hidden())?;
/// assert_eq!(total, 15);
/// # Ok::<(), stride::Error>(())
/// ```
pub fn progress_reduce<I, T, F>(
    mut func: F,
    iter: I,
    initializer: Option<T>,
    desc: &str,
    opts: &ProgressBarOpts,
) -> crate::Result<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    let items: Vec<T> = iter.into_iter().collect();
    let mut remaining = items.into_iter();

    let mut acc = match initializer {
        Some(init) => init,
        None => remaining.next().ok_or(Error::EmptySequence)?,
    };

    let bar = new_bar(remaining.len() as u64, desc, opts);
    for item in remaining {
        acc = func(acc, item);
        bar.inc(1);
    }

    finish_bar(&bar, opts);
    Ok(acc)
}

/// Fold an input with a fallible combining function.
///
/// Mirrors [`progress_reduce`], except that `func` may fail; its error
/// aborts the fold, abandons the bar in place, and is returned unchanged.
/// An empty input with no initializer yields `Ok(None)` rather than an
/// error, since the caller's error type is opaque here.
pub fn try_progress_reduce<I, T, E, F>(
    mut func: F,
    iter: I,
    initializer: Option<T>,
    desc: &str,
    opts: &ProgressBarOpts,
) -> Result<Option<T>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> Result<T, E>,
{
    let items: Vec<T> = iter.into_iter().collect();
    let mut remaining = items.into_iter();

    let mut acc = match initializer {
        Some(init) => init,
        None => match remaining.next() {
            Some(first) => first,
            None => return Ok(None),
        },
    };

    let bar = new_bar(remaining.len() as u64, desc, opts);
    for item in remaining {
        acc = match func(acc, item) {
            Ok(value) => value,
            Err(e) => {
                bar.abandon();
                return Err(e);
            }
        };
        bar.inc(1);
    }

    finish_bar(&bar, opts);
    Ok(Some(acc))
}
