//! Progress module containing progress bar functionality.
//!
//! This module provides the configuration, lifecycle and coordination
//! helpers around the `indicatif` progress bars used by the rest of the
//! crate. Rendering, terminal control and rate estimation stay entirely
//! inside the engine; this module only decides what a bar looks like and
//! when it is created and released.
//!
//! # Overview
//!
//! The progress module is organized into five components:
//!
//! - `style` - Progress bar styling options and templates
//! - `template` - Template assembly from display flags
//! - `context` - Scoped progress tracking for multi-step work
//! - `display` - Multi-bar coordination for concurrent workers
//! - `colored` - A bar whose color follows the completion fraction
//!
//! # Examples
//!
//! ## Custom Progress Bar Styling
//!
//! ```rust
//! use stride::progress::ProgressBarOpts;
//!
//! let opts = ProgressBarOpts::new(
//!     Some("{prefix}: [{bar:40.cyan/blue}] {pos}/{len} {msg}".to_string()),
//!     Some("█▉▊▋▌▍▎▏  ".to_string()),
//!     true,
//!     false,
//! );
//! ```
//!
//! ## Scoped Progress
//!
//! ```rust
//! use stride::progress::{ProgressBarOpts, ProgressContext};
//!
//! let mut ctx = ProgressContext::new(3, "Steps", &ProgressBarOpts::hidden());
//! ctx.update(1);
//! ctx.set_description("Step two");
//! ctx.update(2);
//! ctx.finish();
//! ```

pub(crate) mod colored;
pub(crate) mod context;
pub(crate) mod display;
pub(crate) mod style;
pub(crate) mod template;

pub use colored::ColoredBar;
pub use context::ProgressContext;
pub use display::ProgressGroup;
pub use style::ProgressBarOpts;
pub use template::TemplateOptions;
