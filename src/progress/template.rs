//! Template assembly from feature flags.
//!
//! This module builds progress bar template strings from a set of boolean
//! display flags, so callers can opt individual sections in or out without
//! writing raw template syntax. The description and the bar glyphs are
//! always present; everything else is optional.
//!
//! # Example
//!
//! ```rust
//! use stride::progress::TemplateOptions;
//!
//! // Percentage and count, but no timings.
//! let template = TemplateOptions {
//!     rate: false,
//!     elapsed: false,
//!     remaining: false,
//!     ..TemplateOptions::default()
//! }
//! .build();
//!
//! assert_eq!(template, "{prefix}: {percent:>3}% | {bar:40} {pos}/{len}");
//! ```

use crate::progress::ProgressBarOpts;

/// Display flags for assembling a custom bar template.
///
/// The built template is an immutable string for the rendering engine;
/// the flags only decide which sections it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOptions {
    /// Include the completion percentage.
    pub percentage: bool,
    /// Include the current/total position count.
    pub count: bool,
    /// Include the processing rate.
    pub rate: bool,
    /// Include the elapsed time.
    pub elapsed: bool,
    /// Include the estimated remaining time.
    pub remaining: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            percentage: true,
            count: true,
            rate: true,
            elapsed: true,
            remaining: true,
        }
    }
}

impl TemplateOptions {
    /// Assemble the template string.
    ///
    /// The first two sections join with `": "`, the rest with spaces after
    /// a `" | "` separator. Elapsed and remaining time join with `<` inside
    /// brackets, reading as "elapsed < remaining".
    pub fn build(&self) -> String {
        let mut parts = vec!["{prefix}".to_string()];

        if self.percentage {
            parts.push("{percent:>3}%".to_string());
        }

        parts.push("{bar:40}".to_string());

        if self.count {
            parts.push("{pos}/{len}".to_string());
        }

        if self.rate {
            parts.push("{per_sec}".to_string());
        }

        let mut time_parts = Vec::new();
        if self.elapsed {
            time_parts.push("{elapsed}");
        }
        if self.remaining {
            time_parts.push("{eta}");
        }
        if !time_parts.is_empty() {
            parts.push(format!("[{}]", time_parts.join("<")));
        }

        format!("{} | {}", parts[..2].join(": "), parts[2..].join(" "))
    }

    /// Convert the flags into ready-to-use [`ProgressBarOpts`].
    pub fn to_opts(&self) -> ProgressBarOpts {
        ProgressBarOpts::with_template(self.build())
    }
}
