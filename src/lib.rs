//! Stride is a crate aiming at providing a simple way to add live progress
//! reporting to ordinary operations.
//!
//! # Quick Start
//!
//! ```rust
//! use stride::iter::progress_map;
//! use stride::progress::ProgressBarOpts;
//!
//! let lengths = progress_map(
//!     |word: &str| word.len(),
//!     ["stride", "progress", "bars"],
//!     "Measuring",
//!     &ProgressBarOpts::with_detailed_style(),
//! );
//! assert_eq!(lengths, vec![6, 8, 4]);
//! ```
//!
//! All rendering, terminal control and throughput estimation is delegated
//! to the [`indicatif`] engine; this crate only decides what to track and
//! how the bars are configured and released.
//!
//! # Module Organization
//!
//! The stride crate is organized into several modules:
//!
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`format`] - Pure display-string helpers for bytes, durations and metrics
//! - [`fs`] - File and directory copies with byte-level progress
//! - [`iter`] - Progress-wrapped collection operations
//! - [`progress`] - Bar configuration, scoped contexts, and multi-bar display

pub mod error;
pub mod format;
pub mod fs;
pub mod iter;
pub mod progress;

pub use error::{Error, Result};
pub use format::{format_bytes, format_duration, format_percentage, metrics_line, MetricValue};
pub use fs::{progress_copy, progress_copy_tree, DEFAULT_CHUNK_SIZE};
pub use iter::{
    progress_enumerate, progress_filter, progress_map, progress_reduce, progress_zip,
    progress_zip3, try_progress_filter, try_progress_map, try_progress_reduce, wrap_iter,
    wrap_iter_unbounded,
};
pub use progress::{ColoredBar, ProgressBarOpts, ProgressContext, ProgressGroup, TemplateOptions};
