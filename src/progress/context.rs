//! Scoped progress tracking for multi-step work.
//!
//! This module provides the [`ProgressContext`] struct, a scoped wrapper
//! around a single progress bar for workloads that advance step by step
//! rather than over an iterable. The underlying bar is created on
//! construction and released exactly once, either through an explicit
//! [`finish`](ProgressContext::finish) or when the context is dropped,
//! including drops caused by unwinding.
//!
//! # Examples
//!
//! ## Tracking a Multi-Step Task
//!
//! ```rust
//! use stride::progress::{ProgressBarOpts, ProgressContext};
//!
//! let mut ctx = ProgressContext::new(100, "Processing", &ProgressBarOpts::hidden());
//! for _ in 0..100 {
//!     ctx.update(1);
//! }
//! ctx.finish();
//! ```
//!
//! ## Reporting Metrics While Working
//!
//! ```rust
//! use stride::progress::{ProgressBarOpts, ProgressContext};
//!
//! let mut ctx = ProgressContext::new(10, "Training", &ProgressBarOpts::with_metrics_style());
//! for epoch in 0..10 {
//!     ctx.set_postfix([("epoch", epoch)]);
//!     ctx.update(1);
//! }
//! ```

use crate::format::{metrics_line, MetricValue};
use crate::progress::ProgressBarOpts;
use indexmap::IndexMap;
use indicatif::ProgressBar;

/// Scoped owner of a single progress bar.
///
/// Each context owns exactly one bar. All mutating operations become no-ops
/// after the context has been released, so a context can be finished early
/// and still dropped safely.
#[derive(Debug)]
pub struct ProgressContext {
    /// The underlying progress bar.
    bar: ProgressBar,
    /// Total number of steps, fixed at creation.
    total: u64,
    /// Postfix metrics, rendered into the bar message on every change.
    postfix: IndexMap<String, MetricValue>,
    /// Clear the bar from the terminal on release.
    clear: bool,
    /// Set once the bar has been released.
    released: bool,
}

impl ProgressContext {
    /// Create a new context and its underlying progress bar.
    ///
    /// # Arguments
    ///
    /// * `total` - Total number of steps
    /// * `desc` - Description shown in front of the bar
    /// * `opts` - Style options for the bar
    pub fn new(total: u64, desc: &str, opts: &ProgressBarOpts) -> Self {
        let bar = opts.clone().to_progress_bar(total);
        bar.set_prefix(desc.to_string());
        Self {
            bar,
            total,
            postfix: IndexMap::new(),
            clear: opts.clear,
            released: false,
        }
    }

    /// Advance the bar by `n` steps.
    ///
    /// No-op after the context has been released.
    pub fn update(&self, n: u64) {
        if self.released {
            return;
        }
        self.bar.inc(n);
    }

    /// Replace the description, visible on the next render.
    ///
    /// No-op after the context has been released.
    pub fn set_description(&self, desc: &str) {
        if self.released {
            return;
        }
        self.bar.set_prefix(desc.to_string());
    }

    /// Merge entries into the postfix metrics and re-render them.
    ///
    /// Existing keys are overwritten, new keys append in insertion order.
    /// The rendered `key=value` line lands in the `{msg}` template slot, so
    /// the bar style must include one for the postfix to be visible (see
    /// [`ProgressBarOpts::with_metrics_style`]). No-op after release.
    pub fn set_postfix<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<MetricValue>,
    {
        if self.released {
            return;
        }
        for (key, value) in entries {
            self.postfix.insert(key.into(), value.into());
        }
        self.bar.set_message(metrics_line(&self.postfix));
    }

    /// Release the underlying bar.
    ///
    /// The bar is finished (or cleared, per the options the context was
    /// created with) exactly once; calling `finish` again is a no-op.
    /// Dropping the context calls this automatically.
    pub fn finish(&mut self) {
        if self.released {
            return;
        }
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
        self.released = true;
    }

    /// Get the current position of the bar.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Get the total number of steps.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Return `true` once the underlying bar has been released.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Get a reference to the underlying progress bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl Drop for ProgressContext {
    fn drop(&mut self) {
        self.finish();
    }
}
