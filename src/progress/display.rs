//! Multi-bar display coordination for concurrent workers.
//!
//! This module provides the [`ProgressGroup`] struct for workloads that run
//! several progress bars at once, typically one per worker thread. The group
//! hands out bars attached to a shared `MultiProgress`, each pinned to a
//! display slot, and finishes them according to the configured options.
//! Serializing draws to the shared output stream is handled entirely by the
//! rendering engine; the group holds no locks of its own.
//!
//! # Examples
//!
//! ## One Bar per Worker Thread
//!
//! ```rust
//! use std::thread;
//! use stride::progress::{ProgressBarOpts, ProgressGroup};
//!
//! let group = ProgressGroup::new(ProgressBarOpts::hidden());
//! let handles: Vec<_> = (0..4)
//!     .map(|slot| {
//!         let bar = group.worker_bar(slot, 100, &format!("worker {}", slot));
//!         thread::spawn(move || {
//!             for _ in 0..100 {
//!                 bar.inc(1);
//!             }
//!             bar.finish();
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! ```

use crate::progress::ProgressBarOpts;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};
use std::sync::Arc;

/// Coordinates multiple progress bars over one output stream.
#[derive(Debug, Clone)]
pub struct ProgressGroup {
    /// The multi-progress instance for coordinating multiple progress bars.
    multi: Arc<MultiProgress>,
    /// Style options applied to every bar handed out by the group.
    opts: ProgressBarOpts,
}

impl ProgressGroup {
    /// Create a new progress group.
    ///
    /// When the options are disabled, the whole group draws to a hidden
    /// target and every bar it hands out is invisible.
    pub fn new(opts: ProgressBarOpts) -> Self {
        let multi = match opts.is_enabled() {
            true => Arc::new(MultiProgress::new()),
            false => Arc::new(MultiProgress::with_draw_target(ProgressDrawTarget::hidden())),
        };
        Self { multi, opts }
    }

    /// Get the multi-progress instance for attaching extra bars.
    pub fn multi(&self) -> Arc<MultiProgress> {
        self.multi.clone()
    }

    /// Add a bar below the existing ones.
    pub fn add(&self, len: u64, desc: &str) -> ProgressBar {
        let bar = self.multi.add(self.opts.clone().to_progress_bar(len));
        bar.set_prefix(desc.to_string());
        bar
    }

    /// Add a bar pinned to a display slot.
    ///
    /// Slots keep worker bars in a stable order regardless of which worker
    /// starts first.
    ///
    /// # Arguments
    /// * `slot` - Display position, counted from the top
    /// * `len` - Total for the new bar
    /// * `desc` - Description shown in front of the bar
    pub fn worker_bar(&self, slot: usize, len: u64, desc: &str) -> ProgressBar {
        let bar = self
            .multi
            .insert(slot, self.opts.clone().to_progress_bar(len));
        bar.set_prefix(desc.to_string());
        bar
    }

    /// Finish a bar handed out by this group, clearing it if configured.
    pub fn finish_worker(&self, bar: ProgressBar) {
        if self.opts.clear {
            bar.finish_and_clear();
        } else {
            bar.finish();
        }
    }
}
