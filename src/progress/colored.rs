//! Provides a progress bar whose color follows the completion fraction.
//!
//! The bar is wrapped, not subclassed: [`ColoredBar`] owns a plain
//! `indicatif` bar and swaps its style whenever the completed fraction
//! crosses a color threshold. Early progress renders red, the middle
//! third yellow, and the final third green.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Color zone of a bar, derived from its completion fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorZone {
    /// Less than a third complete.
    Low,
    /// Between one and two thirds complete.
    Mid,
    /// Two thirds complete or more.
    High,
}

impl ColorZone {
    /// Zone for a position within a total.
    fn for_fraction(position: u64, total: u64) -> Self {
        if total == 0 {
            return ColorZone::Low;
        }
        let fraction = position as f64 / total as f64;
        if fraction < 1.0 / 3.0 {
            ColorZone::Low
        } else if fraction < 2.0 / 3.0 {
            ColorZone::Mid
        } else {
            ColorZone::High
        }
    }

    /// Template rendering the bar in this zone's color.
    fn template(self) -> &'static str {
        match self {
            ColorZone::Low => "{prefix}: {percent:>3}%|{bar:40.red}| {pos}/{len}",
            ColorZone::Mid => "{prefix}: {percent:>3}%|{bar:40.yellow}| {pos}/{len}",
            ColorZone::High => "{prefix}: {percent:>3}%|{bar:40.green}| {pos}/{len}",
        }
    }

    /// Build the style for this zone.
    fn to_style(self) -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(self.template())
            .unwrap()
            .progress_chars(crate::progress::ProgressBarOpts::CHARS_FINE)
    }
}

/// A progress bar colored by how far along it is.
#[derive(Debug)]
pub struct ColoredBar {
    /// The wrapped progress bar.
    bar: ProgressBar,
    /// Description, reused for the completion line.
    desc: String,
    /// Zone the current style was built for.
    zone: ColorZone,
}

impl ColoredBar {
    /// Create a new colored bar starting in the red zone.
    pub fn new(len: u64, desc: &str) -> Self {
        let zone = ColorZone::Low;
        let bar = ProgressBar::new(len).with_style(zone.to_style());
        bar.set_prefix(desc.to_string());
        Self {
            bar,
            desc: desc.to_string(),
            zone,
        }
    }

    /// Advance the bar, re-styling it when a color threshold is crossed.
    pub fn inc(&mut self, n: u64) {
        self.bar.inc(n);
        let zone = ColorZone::for_fraction(self.bar.position(), self.bar.length().unwrap_or(0));
        if zone != self.zone {
            self.bar.set_style(zone.to_style());
            self.zone = zone;
        }
    }

    /// Finish the bar and print a green completion line.
    pub fn finish(self) {
        self.bar.finish_and_clear();
        eprintln!("  {}", style(format!("{} done", self.desc)).green());
    }

    /// Return `true` while the final third has not been reached.
    pub fn is_in_progress_colors(&self) -> bool {
        self.zone != ColorZone::High
    }

    /// Get a reference to the wrapped progress bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}
