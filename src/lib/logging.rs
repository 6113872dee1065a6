//! Logging utilities for formatted output.
//!
//! This module provides consistent, user-friendly formatting for counts, durations
//! and rates, plus a timer that logs the start and completion of an operation.

use std::time::{Duration, Instant};

use log::info;

use crate::sort::SortStats;

/// Formats a count with thousands separators.
///
/// # Examples
///
/// ```
/// use chunksort_lib::logging::format_count;
///
/// assert_eq!(format_count(1234), "1,234");
/// assert_eq!(format_count(12), "12");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a duration in human-readable form.
///
/// # Examples
///
/// ```
/// use chunksort_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(45)), "45s");
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// assert_eq!(format_duration(Duration::from_secs(5400)), "1h 30m");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let (hours, mins, secs) = (total / 3600, total % 3600 / 60, total % 60);
    // only the two most significant units are shown
    match (hours, mins, secs) {
        (0, 0, s) => format!("{s}s"),
        (0, m, 0) => format!("{m}m"),
        (0, m, s) => format!("{m}m {s}s"),
        (h, 0, _) => format!("{h}h"),
        (h, m, _) => format!("{h}h {m}m"),
    }
}

/// Formats a rate (values per second) with appropriate units.
///
/// # Examples
///
/// ```
/// use chunksort_lib::logging::format_rate;
/// use std::time::Duration;
///
/// assert_eq!(format_rate(1000, Duration::from_secs(1)), "1,000 values/s");
/// assert_eq!(format_rate(30, Duration::from_secs(60)), "30.0 values/min");
/// ```
#[must_use]
pub fn format_rate(count: u64, duration: Duration) -> String {
    // sub-millisecond runs report the raw count rather than an inflated rate
    if duration < Duration::from_millis(1) {
        return format!("{} values/s", format_count(count));
    }

    let per_sec = count as f64 / duration.as_secs_f64();
    match per_sec {
        r if r >= 1.0 => format!("{} values/s", format_count(r as u64)),
        r => format!("{:.1} values/min", r * 60.0),
    }
}

/// Logs a summary of a pipeline run.
pub fn log_sort_summary(stats: &SortStats) {
    info!("=== Summary ===");
    info!("Values sorted: {}", format_count(stats.total_values));
    info!("Chunks: {}", stats.chunks);
    if stats.empty_chunks > 0 {
        info!("Empty chunks: {}", stats.empty_chunks);
    }
}

/// Timer that logs an operation's start and, on request, its completion.
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Time since the timer was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the completion with value count and rate.
    pub fn log_completion(&self, count: u64) {
        let duration = self.elapsed();
        info!(
            "{} completed: {} values in {} ({})",
            self.operation,
            format_count(count),
            format_duration(duration),
            format_rate(count, duration)
        );
    }
}
