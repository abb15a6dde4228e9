//! Formatting module containing display-string helpers.
//!
//! This module provides pure functions for turning numeric values into
//! human-readable strings, plus the metric rendering used for progress bar
//! postfixes. Nothing here touches the terminal; the results are plain
//! strings consumed by progress bars, log events, or summaries.
//!
//! # Overview
//!
//! The format module is organized into two main components:
//!
//! - [`human`] - Byte, percentage, and duration formatting
//! - [`metrics`] - Metric values and the `key=value` postfix line
//!
//! # Examples
//!
//! ```rust
//! use stride::format::{format_bytes, format_duration, format_percentage};
//!
//! assert_eq!(format_bytes(1024.0), "1.00 KB");
//! assert_eq!(format_percentage(50.0, 100.0), "50.00%");
//! assert_eq!(format_duration(3665.0), "1h 1m 5s");
//! ```

pub mod human;
pub mod metrics;

pub use human::{format_bytes, format_duration, format_percentage};
pub use metrics::{metrics_line, MetricValue};
