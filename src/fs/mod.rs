//! Filesystem module containing progress-tracked copy operations.
//!
//! This module provides helpers that stream files between paths while a
//! progress bar reports bytes or files transferred. Handles are scoped, so
//! both ends close on every exit path; a write failure aborts the copy and
//! leaves the destination partial, exactly as the underlying I/O reported
//! it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use stride::fs::{progress_copy, progress_copy_tree, DEFAULT_CHUNK_SIZE};
//!
//! progress_copy("input.csv", "output.csv", DEFAULT_CHUNK_SIZE)?;
//! progress_copy_tree("assets", "dist/assets")?;
//! # Ok::<(), stride::Error>(())
//! ```

pub mod copy;

pub use copy::{progress_copy, progress_copy_tree, DEFAULT_CHUNK_SIZE};
