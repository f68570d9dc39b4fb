//! # Elapsed Time Formatting
//!
//! Fixed-precision rendering of durations for the time panel, the lap list
//! and the exit summary. The math stays in integer centiseconds so repeated
//! renders never drift the way float rounding does.

use std::time::Duration;

/// Format a duration as seconds with two decimal places, e.g. `"12.34"`.
///
/// Sub-centisecond remainders are truncated, not rounded, so a value never
/// reads ahead of the clock.
pub fn format_seconds(duration: Duration) -> String {
    let centis = duration.as_millis() / 10;
    format!("{}.{:02}", centis / 100, centis % 100)
}

/// Format one lap-list row: ordinal plus two-decimal seconds.
pub fn format_lap_row(number: usize, duration: Duration) -> String {
    format!("Lap {:>3}  {:>10}", number, format_seconds(duration))
}
