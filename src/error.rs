//! Error handling for the Stride library.
//!
//! This module provides centralized error handling for the progress helpers.
//! All errors implement the standard Error trait and provide context about
//! the failure. Errors produced by caller-supplied closures are not wrapped;
//! the fallible wrappers pass them through unchanged.

use std::io;
use thiserror::Error;

/// Errors that can happen when using Stride.
///
/// This enum covers the failures the helpers themselves can produce. It does
/// not include errors raised by user closures, which the `try_*` wrappers
/// propagate as-is.
#[derive(Error, Debug)]
pub enum Error {
    /// A source path did not exist.
    ///
    /// Returned by the copy helpers before any file handle is opened, so a
    /// failed copy never creates a destination file.
    #[error("Source not found: {0}")]
    NotFound(String),

    /// A fold over an empty sequence with no initializer.
    ///
    /// [`progress_reduce`](crate::iter::progress_reduce) seeds its
    /// accumulator from the first element when no initializer is given;
    /// with zero elements there is nothing to seed from.
    #[error("Cannot reduce an empty sequence without an initializer")]
    EmptySequence,

    /// I/O Error.
    ///
    /// This variant wraps standard I/O errors that can occur during file
    /// operations, such as reading the source or writing the destination
    /// during a copy.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a Stride error.
pub type Result<T> = std::result::Result<T, Error>;
