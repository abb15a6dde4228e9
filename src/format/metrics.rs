//! Metric rendering for progress bar postfixes.
//!
//! This module provides the [`MetricValue`] type and the [`metrics_line`]
//! function used to render a named set of metrics into a single display
//! string, typically shown after the bar as a postfix.
//!
//! # Example
//!
//! ```rust
//! use indexmap::IndexMap;
//! use stride::format::{metrics_line, MetricValue};
//!
//! let mut metrics = IndexMap::new();
//! metrics.insert("loss".to_string(), MetricValue::from(0.1234));
//! metrics.insert("epoch".to_string(), MetricValue::from(3));
//!
//! assert_eq!(metrics_line(&metrics), "loss=0.1234, epoch=3");
//! ```

use indexmap::IndexMap;
use std::fmt;

/// A displayable metric value.
///
/// Floating-point values render with four decimal places; everything else
/// uses its default string form.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// Floating-point metric, rendered as `{:.4}`.
    Float(f64),
    /// Integer metric.
    Int(i64),
    /// Free-form text metric.
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Float(v) => write!(f, "{:.4}", v),
            MetricValue::Int(v) => write!(f, "{}", v),
            MetricValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Float(v)
    }
}

impl From<f32> for MetricValue {
    fn from(v: f32) -> Self {
        MetricValue::Float(f64::from(v))
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        MetricValue::Int(v)
    }
}

impl From<i32> for MetricValue {
    fn from(v: i32) -> Self {
        MetricValue::Int(i64::from(v))
    }
}

impl From<usize> for MetricValue {
    fn from(v: usize) -> Self {
        MetricValue::Int(v as i64)
    }
}

impl From<&str> for MetricValue {
    fn from(v: &str) -> Self {
        MetricValue::Text(v.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(v: String) -> Self {
        MetricValue::Text(v)
    }
}

/// Render a metrics mapping into a single `key=value, key=value` line.
///
/// Entries appear in insertion order. An empty mapping yields an empty
/// string.
pub fn metrics_line(metrics: &IndexMap<String, MetricValue>) -> String {
    metrics
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}
