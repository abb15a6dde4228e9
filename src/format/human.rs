//! Human-readable formatting of counts and durations.
//!
//! This module provides pure formatting functions used to build progress
//! messages and summaries. They are deliberately independent from the
//! rendering engine so they can be used in log lines, postfix values, or
//! anywhere else a display string is needed.

/// Units used by [`format_bytes`], from bytes up to terabytes.
const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count into a human-readable string.
///
/// The value is repeatedly divided by 1024 while it is at least 1024 and a
/// larger unit remains, then rendered with two decimals.
///
/// # Arguments
///
/// * `n` - Number of bytes
///
/// # Example
///
/// ```rust
/// use stride::format::format_bytes;
///
/// assert_eq!(format_bytes(500.0), "500.00 B");
/// assert_eq!(format_bytes(1024.0 * 1024.0), "1.00 MB");
/// ```
pub fn format_bytes(n: f64) -> String {
    let mut n = n;
    let mut unit_idx = 0;

    while n >= 1024.0 && unit_idx < BYTE_UNITS.len() - 1 {
        n /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", n, BYTE_UNITS[unit_idx])
}

/// Format progress as a percentage with two decimals.
///
/// A total of zero yields `"0.00%"` instead of dividing by zero.
///
/// # Arguments
///
/// * `n` - Current progress
/// * `total` - Total steps
///
/// # Example
///
/// ```rust
/// use stride::format::format_percentage;
///
/// assert_eq!(format_percentage(50.0, 100.0), "50.00%");
/// assert_eq!(format_percentage(0.0, 0.0), "0.00%");
/// ```
pub fn format_percentage(n: f64, total: f64) -> String {
    if total == 0.0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", (n / total) * 100.0)
}

/// Format a duration in seconds into a human-readable string.
///
/// The duration is decomposed into whole hours, minutes and seconds. Zero
/// leading fields are omitted, so the output takes exactly one of three
/// shapes: `"Ns"`, `"Mm Ns"`, or `"Hh Mm Ns"`.
///
/// # Arguments
///
/// * `seconds` - Duration in seconds
///
/// # Example
///
/// ```rust
/// use stride::format::format_duration;
///
/// assert_eq!(format_duration(90.0), "1m 30s");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let hours = (seconds / 3600.0) as u64;
    let minutes = ((seconds % 3600.0) / 60.0) as u64;
    let secs = (seconds % 60.0) as u64;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_scales_through_units() {
        assert_eq!(format_bytes(0.0), "0.00 B");
        assert_eq!(format_bytes(500.0), "500.00 B");
        assert_eq!(format_bytes(1024.0), "1.00 KB");
        assert_eq!(format_bytes(1024.0 * 1024.0), "1.00 MB");
        assert_eq!(format_bytes(1024.0 * 1024.0 * 1024.0), "1.00 GB");
        assert_eq!(format_bytes(1536.0), "1.50 KB");
    }

    #[test]
    fn test_format_bytes_saturates_at_largest_unit() {
        // Beyond TB the value keeps growing instead of switching units.
        let two_pb = 1024f64.powi(5) * 2.0;
        assert_eq!(format_bytes(two_pb), "2048.00 TB");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0, 100.0), "50.00%");
        assert_eq!(format_percentage(1.0, 3.0), "33.33%");
        assert_eq!(format_percentage(100.0, 100.0), "100.00%");
    }

    #[test]
    fn test_format_percentage_zero_total() {
        assert_eq!(format_percentage(0.0, 0.0), "0.00%");
        assert_eq!(format_percentage(42.0, 0.0), "0.00%");
    }

    #[test]
    fn test_format_duration_shapes() {
        assert_eq!(format_duration(0.0), "0s");
        assert_eq!(format_duration(30.0), "30s");
        assert_eq!(format_duration(90.0), "1m 30s");
        assert_eq!(format_duration(3665.0), "1h 1m 5s");
    }

    #[test]
    fn test_format_duration_truncates_fractions() {
        assert_eq!(format_duration(30.9), "30s");
        assert_eq!(format_duration(59.999), "59s");
    }
}
