//! Progress bar styling and configuration options.
//!
//! This module provides the enumerated configuration consumed everywhere a
//! helper creates a progress bar. Instead of passing free-form options to
//! the rendering engine, call sites hand a [`ProgressBarOpts`] to the
//! wrapper they use, which converts it into an `indicatif` style.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use stride::progress::ProgressBarOpts;
//!
//! // Engine-default bar, cleared from the terminal once complete.
//! let opts = ProgressBarOpts::default();
//! ```
//!
//! ## Custom Styling
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
//! ## Hidden Progress Bars
//!
//! ```rust
//! use stride::progress::ProgressBarOpts;
//!
//! let opts = ProgressBarOpts::hidden();
//! assert!(opts.to_progress_bar(10).is_hidden());
//! ```

use indicatif::{ProgressBar, ProgressStyle};

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// Minimal template showing only the description and the bar.
    ///
    /// `Resizing:  40%|███████████████▊                        |`
    pub const TEMPLATE_MINIMAL: &'static str = "{prefix}: {percent:>3}%|{bar:40}|";
    /// Detailed template with position, timings and rate.
    ///
    /// `Resizing:  40%|███████▊         | 40/100 [00:00:02<00:00:03, 18/s]`
    pub const TEMPLATE_DETAILED: &'static str =
        "{prefix}: {percent:>3}%|{bar:40}| {pos}/{len} [{elapsed}<{eta}, {per_sec}]";
    /// Template leaving room for a `key=value` metrics postfix.
    ///
    /// `Training:  40%|███████▊         | 40/100 [00:02<00:03] loss=0.1234`
    pub const TEMPLATE_METRICS: &'static str =
        "{prefix}: {percent:>3}%|{bar:40}| {pos}/{len} [{elapsed}<{eta}] {msg}";
    /// Byte-oriented template used by the copy helpers.
    ///
    /// `Copying data.bin: ━━━━━━━━━━━  211.23 KiB/211.23 KiB 1008.31 KiB/s eta 0s`
    pub const TEMPLATE_BYTES: &'static str =
        "{prefix}: {bar:40.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red} eta {eta:.blue}";
    /// Template for unbounded progress, where no total is known.
    ///
    /// `Scanning: ⠙ 1482 items 321/s`
    pub const TEMPLATE_SPINNER: &'static str = "{prefix}: {spinner} {pos} items {per_sec} {msg}";

    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use fade-in blocks as progress characters: `"█▓▒░  "`.
    pub const CHARS_FADE_IN: &'static str = "█▓▒░  ";
    /// Use a line as progress characters: `"━╾─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";
    /// Use rough blocks as progress characters: `"█  "`.
    pub const CHARS_ROUGH: &'static str = "█  ";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressBarOpts`] from a template string, keeping the
    /// engine defaults for everything else.
    pub fn with_template(template: String) -> Self {
        Self {
            template: Some(template),
            ..ProgressBarOpts::default()
        }
    }

    /// Create a new [`ProgressBarOpts`] showing only description and bar.
    pub fn with_minimal_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_MINIMAL.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
            enabled: true,
            clear: false,
        }
    }

    /// Create a new [`ProgressBarOpts`] with position, timings and rate.
    pub fn with_detailed_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_DETAILED.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
            enabled: true,
            clear: false,
        }
    }

    /// Create a new [`ProgressBarOpts`] with room for a metrics postfix.
    ///
    /// Pairs with [`ProgressContext::set_postfix`](crate::ProgressContext::set_postfix),
    /// which renders its metrics into the `{msg}` slot of this template.
    pub fn with_metrics_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_METRICS.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
            enabled: true,
            clear: false,
        }
    }

    /// Create a new [`ProgressBarOpts`] rendering byte counts and rates.
    pub fn with_bytes_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_BYTES.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
            enabled: true,
            clear: true,
        }
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }

    /// Return `true` if the progress bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    pub fn to_progress_style(self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = self.template {
            style = style.template(&template).unwrap();
        }
        if let Some(progress_chars) = self.progress_chars {
            style = style.progress_chars(&progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(self, len: u64) -> ProgressBar {
        // Return a hidden Progress bar if we disabled it.
        if !self.enabled {
            return ProgressBar::hidden();
        }

        // Otherwise returns a ProgressBar with the style.
        let style = self.to_progress_style();
        ProgressBar::new(len).with_style(style)
    }

    /// Create a totalless [`ProgressBar`] based on the provided options.
    ///
    /// The bar tracks position and rate only, for workloads where the
    /// element count is unknown and materializing the input to count it is
    /// undesirable. A custom template must render without `{len}`-derived
    /// tokens; when none is set, the spinner template is used.
    pub fn to_spinner(self) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let template = self
            .template
            .unwrap_or_else(|| ProgressBarOpts::TEMPLATE_SPINNER.into());
        let style = ProgressStyle::default_spinner().template(&template).unwrap();
        ProgressBar::new_spinner().with_style(style)
    }
}
